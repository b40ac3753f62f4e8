use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::chart::data::{
    Ascendant, BirthData, BirthDetails, Chart, House, Location, MoonNakshatra, PlanetPosition,
    PlanetStrength,
};
use crate::chart::interpretation::interpret;
use crate::chart::settings::{EngineSettings, EphemerisBackend};
use crate::ephemeris::{
    datetime_to_julian_day, normalize_degrees, Ayanamsa, Body, BuiltinEphemeris, EphemerisProvider,
    JulianDay,
};
use crate::error::{ChartError, Result};
use crate::vedic::{equal_bhavas, strength_score, Graha, Rashi};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Computes sidereal birth charts against an ephemeris provider.
///
/// Holds only configuration fixed at construction, so one engine can serve
/// concurrent callers.
pub struct ChartEngine {
    provider: Box<dyn EphemerisProvider>,
    settings: EngineSettings,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self::with_provider(BuiltinEphemeris::new(), EngineSettings::default())
    }
}

impl ChartEngine {
    /// Build the engine and the ephemeris backend named in `settings`.
    pub fn new(settings: EngineSettings) -> Result<Self> {
        let provider: Box<dyn EphemerisProvider> = match settings.backend {
            EphemerisBackend::Builtin => Box::new(BuiltinEphemeris::new()),
            EphemerisBackend::Swiss => swiss_provider(&settings)?,
        };
        log::info!(
            "Chart engine ready: ephemeris={}, houses={}, ayanamsa={:?}",
            provider.name(),
            settings.house_system.name(),
            settings.ayanamsa
        );
        Ok(Self { provider, settings })
    }

    /// Use a caller-supplied provider, e.g. a stub in tests.
    pub fn with_provider(
        provider: impl EphemerisProvider + 'static,
        settings: EngineSettings,
    ) -> Self {
        Self {
            provider: Box::new(provider),
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn provider(&self) -> &dyn EphemerisProvider {
        self.provider.as_ref()
    }

    pub fn compute_for(&self, birth: &BirthData) -> Result<Chart> {
        self.compute_chart(
            &birth.date,
            &birth.time,
            birth.latitude,
            birth.longitude,
            &birth.timezone,
        )
    }

    /// Compute a chart from civil birth data.
    ///
    /// `date` is `YYYY-MM-DD`, `time` is `HH:MM` and `timezone` an IANA name.
    /// Latitude is north-positive, longitude east-positive.
    pub fn compute_chart(
        &self,
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Chart> {
        let utc = localize(date, time, timezone)?;
        ChartError::check_range("latitude", latitude, -90.0, 90.0)?;
        ChartError::check_range("longitude", longitude, -180.0, 180.0)?;

        let jd = datetime_to_julian_day(utc);
        let ayanamsa = match self.settings.ayanamsa {
            Ayanamsa::Lahiri => self.provider.ayanamsa_lahiri(jd)?,
        };
        log::debug!("{date} {time} {timezone} -> {utc} ({jd}), ayanamsa {ayanamsa:.6}");

        // Graha::classical() is ordered Sun, Moon, ...
        let mut classical = [0.0; 7];
        for (slot, graha) in classical.iter_mut().zip(Graha::classical()) {
            *slot = self.sidereal_longitude(jd, graha.body(), ayanamsa)?;
        }
        let (sun, moon) = (classical[0], classical[1]);
        let rahu = self.sidereal_longitude(jd, Body::MeanNode, ayanamsa)?;
        let ketu = normalize_degrees(rahu + 180.0);

        let planets: BTreeMap<Graha, PlanetPosition> = Graha::classical()
            .iter()
            .copied()
            .zip(classical)
            .chain([(Graha::Rahu, rahu), (Graha::Ketu, ketu)])
            .map(|(graha, lon)| (graha, PlanetPosition::from_longitude(lon)))
            .collect();

        let cusps = self
            .provider
            .house_cusps(jd, latitude, longitude, self.settings.house_system)?;
        let ascendant = Ascendant::from_longitude(cusps.ascendant() - ayanamsa);

        let houses: Vec<House> = equal_bhavas(ascendant.longitude)
            .into_iter()
            .map(House::from)
            .collect();

        let moon_nakshatra = MoonNakshatra::from_longitude(moon);

        let strengths: BTreeMap<Graha, PlanetStrength> = Graha::classical()
            .iter()
            .zip(classical)
            .filter_map(|(&graha, lon)| {
                strength_score(graha, lon).map(|score| (graha, PlanetStrength::from_score(score)))
            })
            .collect();

        let interpretation = interpret(
            ascendant.sign,
            Rashi::from_longitude(moon),
            Rashi::from_longitude(sun),
            &moon_nakshatra,
        );

        Ok(Chart {
            birth_details: BirthDetails {
                date: date.to_string(),
                time: time.to_string(),
                location: Location {
                    latitude,
                    longitude,
                    timezone: timezone.to_string(),
                },
                ayanamsa,
            },
            ascendant,
            planets,
            houses,
            moon_nakshatra,
            strengths,
            interpretation,
        })
    }

    fn sidereal_longitude(&self, jd: JulianDay, body: Body, ayanamsa: f64) -> Result<f64> {
        let tropical = self.provider.tropical_longitude(jd, body)?;
        Ok(normalize_degrees(tropical - ayanamsa))
    }
}

/// Civil date, time and zone to a UTC instant.
///
/// A repeated wall-clock time resolves to the earlier instant. A time skipped
/// by a DST transition is read with the offset in force after the transition,
/// so 02:30 on a spring-forward night in New York becomes 06:30 UTC.
pub fn localize(date: &str, time: &str, timezone: &str) -> Result<DateTime<Utc>> {
    let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| {
        ChartError::InputFormat {
            field: "date",
            value: date.to_string(),
            expected: "YYYY-MM-DD",
        }
    })?;
    let clock = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|_| {
        ChartError::InputFormat {
            field: "time",
            value: time.to_string(),
            expected: "HH:MM (24-hour)",
        }
    })?;
    let tz: Tz = timezone
        .trim()
        .parse()
        .map_err(|_| ChartError::UnknownTimezone(timezone.to_string()))?;

    let naive = day.and_time(clock);
    let utc = match naive.and_local_timezone(tz) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => local.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = Utc.from_utc_datetime(&(naive - offset_after_gap(tz, naive)));
            log::debug!("{date} {time} falls in a {timezone} DST gap, using {shifted}");
            shifted
        }
    };
    Ok(utc)
}

/// Offset in force just after the gap that swallowed `naive`.
///
/// Read with the pre-gap offset, a skipped wall-clock time lands inside the
/// gap's width after the transition instant.
fn offset_after_gap(tz: Tz, naive: NaiveDateTime) -> Duration {
    let before = tz.offset_from_utc_datetime(&(naive - Duration::days(1))).fix();
    let in_gap = naive - Duration::seconds(i64::from(before.local_minus_utc()));
    let after = tz.offset_from_utc_datetime(&in_gap).fix();
    Duration::seconds(i64::from(after.local_minus_utc()))
}

#[cfg(feature = "swisseph")]
fn swiss_provider(settings: &EngineSettings) -> Result<Box<dyn EphemerisProvider>> {
    let adapter = crate::ephemeris::SwissEphemerisAdapter::new(settings.ephemeris_path.as_deref())?;
    Ok(Box::new(adapter))
}

#[cfg(not(feature = "swisseph"))]
fn swiss_provider(_settings: &EngineSettings) -> Result<Box<dyn EphemerisProvider>> {
    log::warn!("Swiss Ephemeris requested but the `swisseph` feature is not enabled");
    Err(crate::ephemeris::EphemerisError::InvalidBackend {
        backend: EphemerisBackend::Swiss.name().to_string(),
        valid: vec![EphemerisBackend::Builtin.name().to_string()],
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::EphemerisError;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_localize_kolkata() {
        let utc = localize("2000-01-01", "17:30", "Asia/Kolkata").unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (2000, 1, 1));
        assert_eq!((utc.hour(), utc.minute()), (12, 0));
    }

    #[test]
    fn test_localize_rejects_bad_input() {
        assert!(matches!(
            localize("2024-13-40", "10:00", "UTC"),
            Err(ChartError::InputFormat { field: "date", .. })
        ));
        assert!(matches!(
            localize("2024-01-01", "25:00", "UTC"),
            Err(ChartError::InputFormat { field: "time", .. })
        ));
        assert!(matches!(
            localize("2024-01-01", "10:00", "Mars/Olympus"),
            Err(ChartError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn test_localize_dst_gap_and_overlap() {
        // 2021-03-14 02:30 does not exist in New York; EDT applies.
        let utc = localize("2021-03-14", "02:30", "America/New_York").unwrap();
        assert_eq!((utc.day(), utc.hour(), utc.minute()), (14, 6, 30));
        // Southern hemisphere gap: 2021-10-03 02:15 in Sydney is AEDT (+11).
        let utc = localize("2021-10-03", "02:15", "Australia/Sydney").unwrap();
        assert_eq!((utc.day(), utc.hour(), utc.minute()), (2, 15, 15));
        // 2021-11-07 01:30 happens twice; the EDT reading comes first.
        let utc = localize("2021-11-07", "01:30", "America/New_York").unwrap();
        assert_eq!((utc.hour(), utc.minute()), (5, 30));
    }

    #[cfg(not(feature = "swisseph"))]
    #[test]
    fn test_swiss_backend_requires_feature() {
        let settings = EngineSettings::default().with_backend(EphemerisBackend::Swiss);
        assert!(matches!(
            ChartEngine::new(settings),
            Err(ChartError::EphemerisLookup(EphemerisError::InvalidBackend { .. }))
        ));
    }
}
