//! Rashis (zodiac signs): twelve 30 degree segments of the sidereal ecliptic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::normalize_degrees;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_ORDER: [Rashi; 12] = [
    Rashi::Aries,
    Rashi::Taurus,
    Rashi::Gemini,
    Rashi::Cancer,
    Rashi::Leo,
    Rashi::Virgo,
    Rashi::Libra,
    Rashi::Scorpio,
    Rashi::Sagittarius,
    Rashi::Capricorn,
    Rashi::Aquarius,
    Rashi::Pisces,
];

impl Rashi {
    /// Sign at a 0-based index; wraps modulo 12.
    pub fn from_index(index: usize) -> Rashi {
        SIGN_ORDER[index % 12]
    }

    /// Sign containing a longitude.
    pub fn from_longitude(longitude: f64) -> Rashi {
        Rashi::from_index(sign_index(longitude))
    }

    /// 0-based index, Aries = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Rashi::Aries => "Aries",
            Rashi::Taurus => "Taurus",
            Rashi::Gemini => "Gemini",
            Rashi::Cancer => "Cancer",
            Rashi::Leo => "Leo",
            Rashi::Virgo => "Virgo",
            Rashi::Libra => "Libra",
            Rashi::Scorpio => "Scorpio",
            Rashi::Sagittarius => "Sagittarius",
            Rashi::Capricorn => "Capricorn",
            Rashi::Aquarius => "Aquarius",
            Rashi::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `floor(L / 30)` for a normalized longitude, clamped to 11 against rounding.
pub fn sign_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    ((lon / SIGN_SPAN).floor() as usize).min(11)
}

/// Degrees past the start of the sign, `L - 30 * sign_index(L)`.
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_degrees(longitude);
    lon - SIGN_SPAN * sign_index(lon) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_longitude() {
        assert_eq!(Rashi::from_longitude(0.0), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(29.999), Rashi::Aries);
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Taurus);
        assert_eq!(Rashi::from_longitude(359.99), Rashi::Pisces);
        assert_eq!(Rashi::from_longitude(-15.0), Rashi::Pisces);
    }

    #[test]
    fn test_degree_in_sign() {
        assert_eq!(degree_in_sign(45.5), 15.5);
        assert_eq!(degree_in_sign(330.0), 0.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Rashi::Aries.name(), "Aries");
        assert_eq!(Rashi::Sagittarius.to_string(), "Sagittarius");
        assert_eq!(Rashi::from_index(11).name(), "Pisces");
    }

    #[test]
    fn test_index_round_trip() {
        for (i, sign) in SIGN_ORDER.iter().enumerate() {
            assert_eq!(sign.index(), i);
            assert_eq!(Rashi::from_index(i), *sign);
        }
        assert_eq!(Rashi::from_index(12), Rashi::Aries);
    }
}
