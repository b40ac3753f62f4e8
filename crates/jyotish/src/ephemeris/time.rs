//! Civil time to Julian Day conversion.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::ephemeris::types::JulianDay;

/// Julian Day for a Gregorian calendar date and fractional UT hours.
///
/// Meeus, "Astronomical Algorithms", eq. 7.1, always applying the Gregorian
/// correction (matches `swe_julday` with `SE_GREG_CAL`).
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> JulianDay {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b
        - 1524.5
        + hours / 24.0;
    JulianDay(jd)
}

/// Convert UTC datetime to Julian Day
///
/// Only hours and minutes contribute to the day fraction. Seconds are dropped,
/// including the odd seconds some historical UTC offsets carry.
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> JulianDay {
    let hour_decimal = dt.hour() as f64 + dt.minute() as f64 / 60.0;
    julian_day(dt.year(), dt.month(), dt.day(), hour_decimal)
}
