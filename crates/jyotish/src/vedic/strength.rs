//! Simple positional strength from exaltation and debilitation points.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vedic::types::Graha;

pub const BASELINE_SCORE: f64 = 50.0;
/// Distance (degrees) within which an exaltation or debilitation point counts.
pub const STRENGTH_ORB: f64 = 15.0;
const POINTS_PER_DEGREE: f64 = 2.0;

/// Sidereal exaltation point per classical graha, degrees.
pub const EXALTATION_POINTS: [(Graha, f64); 7] = [
    (Graha::Sun, 10.0),
    (Graha::Moon, 33.0),
    (Graha::Mars, 298.0),
    (Graha::Mercury, 165.0),
    (Graha::Jupiter, 95.0),
    (Graha::Venus, 357.0),
    (Graha::Saturn, 200.0),
];

/// Debilitation points, each opposite the exaltation point.
pub const DEBILITATION_POINTS: [(Graha, f64); 7] = [
    (Graha::Sun, 190.0),
    (Graha::Moon, 213.0),
    (Graha::Mars, 118.0),
    (Graha::Mercury, 345.0),
    (Graha::Jupiter, 275.0),
    (Graha::Venus, 177.0),
    (Graha::Saturn, 20.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthStatus {
    Strong,
    Moderate,
    Weak,
}

impl StrengthStatus {
    /// Strong above 70, Moderate above 40, otherwise Weak.
    pub fn from_score(score: f64) -> Self {
        if score > 70.0 {
            StrengthStatus::Strong
        } else if score > 40.0 {
            StrengthStatus::Moderate
        } else {
            StrengthStatus::Weak
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthStatus::Strong => "Strong",
            StrengthStatus::Moderate => "Moderate",
            StrengthStatus::Weak => "Weak",
        }
    }
}

impl fmt::Display for StrengthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn point_for(table: &[(Graha, f64)], graha: Graha) -> Option<f64> {
    table.iter().find(|(g, _)| *g == graha).map(|(_, deg)| *deg)
}

pub fn exaltation_point(graha: Graha) -> Option<f64> {
    point_for(&EXALTATION_POINTS, graha)
}

pub fn debilitation_point(graha: Graha) -> Option<f64> {
    point_for(&DEBILITATION_POINTS, graha)
}

/// `(15 - distance) * 2` when strictly inside the orb.
///
/// Distance is the plain difference of longitudes, so a point near 0 degrees
/// does not see a planet just below 360.
fn proximity_bonus(longitude: f64, point: f64) -> f64 {
    let distance = (longitude - point).abs();
    if distance < STRENGTH_ORB {
        (STRENGTH_ORB - distance) * POINTS_PER_DEGREE
    } else {
        0.0
    }
}

/// Score in [0, 100] for a classical graha; `None` for the nodes.
///
/// Exaltation and debilitation adjustments are applied independently.
pub fn strength_score(graha: Graha, longitude: f64) -> Option<f64> {
    let exaltation = exaltation_point(graha)?;
    let debilitation = debilitation_point(graha)?;
    Some(score_against(longitude, exaltation, debilitation))
}

fn score_against(longitude: f64, exaltation: f64, debilitation: f64) -> f64 {
    let score = BASELINE_SCORE + proximity_bonus(longitude, exaltation)
        - proximity_bonus(longitude, debilitation);
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_exaltation() {
        assert_eq!(strength_score(Graha::Sun, 10.0), Some(80.0));
        assert_eq!(StrengthStatus::from_score(80.0), StrengthStatus::Strong);
    }

    #[test]
    fn test_exact_debilitation() {
        assert_eq!(strength_score(Graha::Saturn, 20.0), Some(20.0));
        assert_eq!(StrengthStatus::from_score(20.0), StrengthStatus::Weak);
    }

    #[test]
    fn test_orb_edge_is_exclusive() {
        assert_eq!(strength_score(Graha::Moon, 48.0), Some(50.0));
        assert_eq!(strength_score(Graha::Moon, 47.0), Some(52.0));
    }

    #[test]
    fn test_distance_does_not_wrap() {
        // 359 is 2 degrees from Venus' exaltation at 357; 5 from Sun's 10 only across 0.
        assert_eq!(strength_score(Graha::Venus, 359.0), Some(76.0));
        assert_eq!(strength_score(Graha::Sun, 355.0), Some(50.0));
    }

    #[test]
    fn test_both_points_inside_orb() {
        // Points 20 degrees apart: both adjustments apply and partly cancel.
        assert_eq!(proximity_bonus(20.0, 10.0), 10.0);
        assert_eq!(proximity_bonus(20.0, 30.0), 10.0);
        assert_eq!(score_against(20.0, 10.0, 30.0), 50.0);
        assert_eq!(score_against(22.0, 10.0, 30.0), 42.0);
        assert_eq!(score_against(16.0, 10.0, 30.0), 66.0);
        // 15 from the debilitation point is outside the orb.
        assert_eq!(score_against(15.0, 10.0, 30.0), 70.0);
    }

    #[test]
    fn test_nodes_are_not_scored() {
        assert_eq!(strength_score(Graha::Rahu, 10.0), None);
        assert_eq!(strength_score(Graha::Ketu, 10.0), None);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(StrengthStatus::from_score(70.0), StrengthStatus::Moderate);
        assert_eq!(StrengthStatus::from_score(70.0001), StrengthStatus::Strong);
        assert_eq!(StrengthStatus::from_score(40.0), StrengthStatus::Weak);
        assert_eq!(StrengthStatus::from_score(40.5), StrengthStatus::Moderate);
    }
}
