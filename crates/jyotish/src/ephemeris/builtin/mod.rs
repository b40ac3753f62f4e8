//! Built-in analytic ephemeris.
//!
//! Pure-Rust series good to arcminutes for the Sun, Moon and lunar node and to
//! a fraction of a degree for Mercury through Saturn over 1800-2050. Needs no
//! data files, which makes it the default backend for the chart engine.
//!
//! UT is used in place of TT throughout; the ~1 minute difference moves the
//! Moon by well under an arcminute.

mod houses;
mod lunar;
mod planets;

use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{normalize_degrees, Body, HouseCusps, HouseSystem, JulianDay};

pub use houses::{ascendant_and_mc, gmst_degrees, mean_obliquity_degrees};

/// Lahiri (Chitrapaksha) ayanamsa at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Supported span: 1800-01-01 to 2051-01-01, the validity window of the
/// planetary mean elements.
pub const SUPPORTED_JD_RANGE: (f64, f64) = (2_378_496.5, 2_470_172.5);

/// IAU 2006 general precession in ecliptic longitude, degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn general_precession_degrees(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3
        - 0.000023857 * t4
        - 0.0000000383 * t5;
    arcsec / 3600.0
}

/// Nutation in longitude from the four principal terms, degrees.
pub fn nutation_longitude_degrees(t: f64) -> f64 {
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun_mean = (280.4665 + 36000.7698 * t).to_radians();
    let moon_mean = (218.3165 + 481267.8813 * t).to_radians();
    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * sun_mean).sin()
        - 0.23 * (2.0 * moon_mean).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

/// Lahiri ayanamsa: J2000 reference value plus accumulated precession.
pub fn lahiri_ayanamsa_degrees(jd: JulianDay) -> f64 {
    LAHIRI_J2000_DEG + general_precession_degrees(jd.centuries_since_j2000())
}

/// Analytic ephemeris provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEphemeris;

impl BuiltinEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn check_range(jd: JulianDay) -> Result<(), EphemerisError> {
        let (min, max) = SUPPORTED_JD_RANGE;
        if !jd.0.is_finite() || jd.0 < min || jd.0 > max {
            return Err(EphemerisError::JulianDayOutOfRange { jd, min, max });
        }
        Ok(())
    }
}

impl EphemerisProvider for BuiltinEphemeris {
    fn name(&self) -> &str {
        "builtin"
    }

    fn tropical_longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        Self::check_range(jd)?;
        let t = jd.centuries_since_j2000();
        let nutation = nutation_longitude_degrees(t);

        let geometric = match body {
            Body::Sun => planets::sun_longitude(t),
            Body::Moon => lunar::moon_longitude(t),
            Body::MeanNode => lunar::mean_node_longitude(t),
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                let j2000_lon = planets::geocentric_longitude_j2000(body, jd).ok_or_else(|| {
                    EphemerisError::CalculationFailed {
                        body,
                        jd,
                        message: "no orbital elements for body".to_string(),
                    }
                })?;
                j2000_lon + general_precession_degrees(t)
            }
        };

        let lon = normalize_degrees(geometric + nutation);
        if !lon.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body,
                jd,
                message: "series did not produce a finite longitude".to_string(),
            });
        }
        Ok(lon)
    }

    fn ayanamsa_lahiri(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        Self::check_range(jd)?;
        Ok(lahiri_ayanamsa_degrees(jd))
    }

    fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        Self::check_range(jd)?;
        let cusps = match system {
            HouseSystem::Placidus => houses::placidus_cusps(jd, latitude, longitude)?,
            HouseSystem::Equal => houses::equal_cusps(jd, latitude, longitude)?,
        };
        Ok(HouseCusps { system, cusps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::time::julian_day;

    #[test]
    fn test_lahiri_at_j2000() {
        let ayanamsa = lahiri_ayanamsa_degrees(JulianDay(crate::ephemeris::J2000_JD));
        assert_eq!(ayanamsa, LAHIRI_J2000_DEG);
    }

    #[test]
    fn test_lahiri_grows_with_precession() {
        // About 50.3" per year
        let ayanamsa_2020 = lahiri_ayanamsa_degrees(julian_day(2020, 1, 1, 0.0));
        assert!((ayanamsa_2020 - 24.13).abs() < 0.02, "{}", ayanamsa_2020);
    }

    #[test]
    fn test_rejects_out_of_range_jd() {
        let eph = BuiltinEphemeris::new();
        let err = eph
            .tropical_longitude(JulianDay(0.0), Body::Sun)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::JulianDayOutOfRange { .. }));
        assert!(eph.ayanamsa_lahiri(JulianDay(f64::NAN)).is_err());
    }

    #[test]
    fn test_range_follows_element_validity() {
        let eph = BuiltinEphemeris::new();
        for (year, ok) in [(1799, false), (1800, true), (2050, true), (2051, false)] {
            let jd = julian_day(year, 6, 1, 0.0);
            assert_eq!(eph.tropical_longitude(jd, Body::Jupiter).is_ok(), ok, "{year}");
        }
    }

    #[test]
    fn test_every_body_in_range() {
        let eph = BuiltinEphemeris::new();
        let jd = julian_day(1985, 7, 3, 4.5);
        for body in [
            Body::Sun,
            Body::Moon,
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::MeanNode,
        ] {
            let lon = eph.tropical_longitude(jd, body).unwrap();
            assert!((0.0..360.0).contains(&lon), "{body}: {lon}");
        }
    }
}
