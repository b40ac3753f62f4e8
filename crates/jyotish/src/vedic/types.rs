//! Vedic astrology types shared across the chart modules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ephemeris::Body;

/// The nine grahas tracked in a chart, in chart order.
///
/// `Ord` follows declaration order so maps keyed by `Graha` serialize
/// Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
    Graha::Rahu,
    Graha::Ketu,
];

pub const CLASSICAL_GRAHAS: [Graha; 7] = [
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Mercury,
    Graha::Jupiter,
    Graha::Venus,
    Graha::Saturn,
];

impl Graha {
    pub const fn all() -> &'static [Graha] {
        &ALL_GRAHAS
    }

    /// The seven visible planets; the lunar nodes are excluded.
    pub const fn classical() -> &'static [Graha] {
        &CLASSICAL_GRAHAS
    }

    pub fn is_node(self) -> bool {
        matches!(self, Graha::Rahu | Graha::Ketu)
    }

    /// Ephemeris body queried for this graha. Both nodes map to the mean node.
    pub fn body(self) -> Body {
        match self {
            Graha::Sun => Body::Sun,
            Graha::Moon => Body::Moon,
            Graha::Mars => Body::Mars,
            Graha::Mercury => Body::Mercury,
            Graha::Jupiter => Body::Jupiter,
            Graha::Venus => Body::Venus,
            Graha::Saturn => Body::Saturn,
            Graha::Rahu | Graha::Ketu => Body::MeanNode,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Graha::Sun => "Sun",
            Graha::Moon => "Moon",
            Graha::Mars => "Mars",
            Graha::Mercury => "Mercury",
            Graha::Jupiter => "Jupiter",
            Graha::Venus => "Venus",
            Graha::Saturn => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_excludes_nodes() {
        assert_eq!(Graha::classical().len(), 7);
        assert!(Graha::classical().iter().all(|g| !g.is_node()));
    }

    #[test]
    fn test_nodes_share_mean_node_body() {
        assert_eq!(Graha::Rahu.body(), Body::MeanNode);
        assert_eq!(Graha::Ketu.body(), Body::MeanNode);
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Graha::Jupiter).unwrap(), "\"Jupiter\"");
    }
}
