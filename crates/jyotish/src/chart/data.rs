//! Chart records. Field names are part of the JSON interface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::normalize_degrees;
use crate::vedic::{
    degree_in_sign, nakshatra_index, nakshatra_lord, nakshatra_name, pada, sign_index, Bhava,
    Graha, Rashi, StrengthStatus,
};

/// Birth input as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour clock
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA name, e.g. `Asia/Kolkata`
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub date: String,
    pub time: String,
    pub location: Location,
    /// Lahiri ayanamsa at the birth instant, degrees.
    pub ayanamsa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub longitude: f64,
    pub sign: Rashi,
    pub sign_num: u8,
    pub degree: f64,
}

impl Ascendant {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let sign_num = sign_index(longitude);
        Self {
            longitude,
            sign: Rashi::from_index(sign_num),
            sign_num: sign_num as u8,
            degree: degree_in_sign(longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub longitude: f64,
    pub sign: Rashi,
    pub sign_num: u8,
    pub degree: f64,
    pub nakshatra: String,
    /// Not assigned by the engine; always serialized as `null`.
    pub house: Option<u8>,
}

impl PlanetPosition {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let sign_num = sign_index(longitude);
        Self {
            longitude,
            sign: Rashi::from_index(sign_num),
            sign_num: sign_num as u8,
            degree: degree_in_sign(longitude),
            nakshatra: nakshatra_name(nakshatra_index(longitude)).to_string(),
            house: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub house: u8,
    pub cusp_longitude: f64,
    pub sign: Rashi,
    pub description: String,
}

impl From<Bhava> for House {
    fn from(bhava: Bhava) -> Self {
        Self {
            house: bhava.number,
            cusp_longitude: bhava.cusp,
            sign: bhava.rashi,
            description: bhava.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonNakshatra {
    pub name: String,
    pub pada: u8,
    pub lord: Graha,
}

impl MoonNakshatra {
    pub fn from_longitude(longitude: f64) -> Self {
        let index = nakshatra_index(longitude);
        Self {
            name: nakshatra_name(index).to_string(),
            pada: pada(longitude),
            lord: nakshatra_lord(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetStrength {
    pub score: f64,
    pub status: StrengthStatus,
}

impl PlanetStrength {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            status: StrengthStatus::from_score(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub ascendant_sign: String,
    pub moon_sign: String,
    pub moon_nakshatra: String,
    pub sun_sign: String,
}

/// A computed birth chart. Built once by the engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub birth_details: BirthDetails,
    pub ascendant: Ascendant,
    pub planets: BTreeMap<Graha, PlanetPosition>,
    pub houses: Vec<House>,
    pub moon_nakshatra: MoonNakshatra,
    pub strengths: BTreeMap<Graha, PlanetStrength>,
    pub interpretation: Interpretation,
}

fn round_to(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}

impl Chart {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.get(&graha)
    }

    pub fn strength(&self, graha: Graha) -> Option<&PlanetStrength> {
        self.strengths.get(&graha)
    }

    /// Copy with every float rounded to `places` decimals for display.
    ///
    /// Longitudes that round up to 360 wrap to 0. Signs, nakshatras and
    /// statuses keep the values derived at full precision.
    pub fn rounded(&self, places: u32) -> Chart {
        let factor = 10f64.powi(places as i32);
        let lon = |value: f64| normalize_degrees(round_to(value, factor));
        let val = |value: f64| round_to(value, factor);

        let mut chart = self.clone();
        chart.birth_details.ayanamsa = val(chart.birth_details.ayanamsa);
        chart.ascendant.longitude = lon(chart.ascendant.longitude);
        chart.ascendant.degree = val(chart.ascendant.degree);
        for position in chart.planets.values_mut() {
            position.longitude = lon(position.longitude);
            position.degree = val(position.degree);
        }
        for house in &mut chart.houses {
            house.cusp_longitude = lon(house.cusp_longitude);
        }
        for strength in chart.strengths.values_mut() {
            strength.score = val(strength.score);
        }
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planet_position_derivation() {
        let pos = PlanetPosition::from_longitude(-10.0);
        assert_eq!(pos.longitude, 350.0);
        assert_eq!(pos.sign, Rashi::Pisces);
        assert_eq!(pos.sign_num, 11);
        assert_eq!(pos.degree, 20.0);
        assert_eq!(pos.nakshatra, "Revati");
        assert!(pos.house.is_none());
    }

    #[test]
    fn test_moon_nakshatra_from_longitude() {
        // 10 Taurus = 40 degrees: Krittika runs 26.67-40.0, Rohini starts at 40.0
        let nak = MoonNakshatra::from_longitude(40.5);
        assert_eq!(nak.name, "Rohini");
        assert_eq!(nak.pada, 1);
        assert_eq!(nak.lord, Graha::Moon);
    }

    #[test]
    fn test_birth_data_name_is_optional() {
        let json = r#"{"date":"1990-01-01","time":"06:30","latitude":28.61,
                       "longitude":77.21,"timezone":"Asia/Kolkata"}"#;
        let birth: BirthData = serde_json::from_str(json).unwrap();
        assert!(birth.name.is_none());
        assert!(!serde_json::to_string(&birth).unwrap().contains("name"));
    }
}
