//! Bhavas (houses), laid out as equal 30 degree segments from the lagna.

use crate::ephemeris::normalize_degrees;
use crate::vedic::rashi::{Rashi, SIGN_SPAN};

pub const HOUSE_LABELS: [&str; 12] = [
    "1st House (Lagna/Self)",
    "2nd House (Wealth)",
    "3rd House (Courage)",
    "4th House (Mother/Home)",
    "5th House (Children)",
    "6th House (Enemies)",
    "7th House (Marriage)",
    "8th House (Longevity)",
    "9th House (Fortune)",
    "10th House (Career)",
    "11th House (Gains)",
    "12th House (Loss/Liberation)",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bhava {
    /// 1-12.
    pub number: u8,
    pub cusp: f64,
    pub rashi: Rashi,
    pub label: &'static str,
}

/// Twelve equal houses, house 1 starting exactly on the ascendant.
pub fn equal_bhavas(ascendant: f64) -> [Bhava; 12] {
    std::array::from_fn(|i| {
        let cusp = normalize_degrees(ascendant + SIGN_SPAN * i as f64);
        Bhava {
            number: i as u8 + 1,
            cusp,
            rashi: Rashi::from_longitude(cusp),
            label: HOUSE_LABELS[i],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_house_is_ascendant() {
        let houses = equal_bhavas(123.45);
        assert_eq!(houses[0].cusp, 123.45);
        assert_eq!(houses[0].rashi, Rashi::Leo);
        assert_eq!(houses[6].label, "7th House (Marriage)");
    }

    #[test]
    fn test_wraps_past_pisces() {
        let houses = equal_bhavas(350.0);
        assert_eq!(houses[1].cusp, 20.0);
        assert_eq!(houses[1].rashi, Rashi::Aries);
        assert_eq!(houses[11].number, 12);
        assert!(houses.iter().all(|h| (0.0..360.0).contains(&h.cusp)));
    }
}
