use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ephemeris::EphemerisError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Astronomical time coordinate: fractional days since the Julian epoch (UT).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(pub f64);

impl JulianDay {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_CENTURY
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

/// Bodies an ephemeris provider can be asked about.
///
/// Rahu and Ketu both resolve to [`Body::MeanNode`]; Ketu is derived by the
/// chart engine, never queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    MeanNode,
}

impl Body {
    pub fn id(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::MeanNode => "mean_node",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, HouseSystem)] = &[
    ("placidus", HouseSystem::Placidus),
    ("equal", HouseSystem::Equal),
];

/// House system used to locate the ascendant cusp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    #[default]
    Placidus,
    Equal,
}

impl HouseSystem {
    pub fn name(self) -> &'static str {
        match self {
            HouseSystem::Placidus => "placidus",
            HouseSystem::Equal => "equal",
        }
    }

    /// Single-letter code used by the Swiss Ephemeris.
    pub fn code(self) -> u8 {
        match self {
            HouseSystem::Placidus => b'P',
            HouseSystem::Equal => b'E',
        }
    }
}

impl FromStr for HouseSystem {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, system)| *system)
            .ok_or_else(|| EphemerisError::InvalidHouseSystem {
                system: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Ayanamsa mapping
const AYANAMSAS: &[(&str, Ayanamsa)] = &[
    ("lahiri", Ayanamsa::Lahiri),
    ("chitrapaksha", Ayanamsa::Lahiri),
];

/// Sidereal standard. Only Lahiri is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ayanamsa {
    #[default]
    Lahiri,
}

impl FromStr for Ayanamsa {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        AYANAMSAS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, ayanamsa)| *ayanamsa)
            .ok_or_else(|| EphemerisError::InvalidAyanamsa {
                ayanamsa: s.to_string(),
                valid: AYANAMSAS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// House cusps as returned by a provider, tropical degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    pub system: HouseSystem,
    /// Cusps 1..12; index 0 is the ascendant.
    pub cusps: [f64; 12],
}

impl HouseCusps {
    pub fn ascendant(&self) -> f64 {
        self.cusps[0]
    }
}

/// Normalize degrees to [0, 360).
///
/// `rem_euclid` can round tiny negative inputs up to exactly 360.0, which is
/// folded back to 0.
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-17) < 360.0);
    }

    #[test]
    fn test_house_system_from_str() {
        assert_eq!("Placidus".parse::<HouseSystem>().unwrap(), HouseSystem::Placidus);
        assert_eq!("equal".parse::<HouseSystem>().unwrap(), HouseSystem::Equal);
        let err = "koch".parse::<HouseSystem>().unwrap_err();
        assert!(err.to_string().contains("koch"));
    }

    #[test]
    fn test_ayanamsa_from_str() {
        assert_eq!("lahiri".parse::<Ayanamsa>().unwrap(), Ayanamsa::Lahiri);
        assert!("fagan_bradley".parse::<Ayanamsa>().is_err());
    }

    #[test]
    fn test_centuries_since_j2000() {
        assert_eq!(JulianDay(J2000_JD).centuries_since_j2000(), 0.0);
        assert_eq!(JulianDay(J2000_JD + DAYS_PER_CENTURY).centuries_since_j2000(), 1.0);
    }
}
