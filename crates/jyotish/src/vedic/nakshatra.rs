//! Nakshatra utilities.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::{Deserialize, Serialize};

use crate::ephemeris::normalize_degrees;
use crate::vedic::types::Graha;

pub const NAKSHATRA_COUNT: usize = 27;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / NAKSHATRA_COUNT as f64;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

// (slug, display_name)
pub const NAKSHATRA_ORDER: [(&str, &str); NAKSHATRA_COUNT] = [
    ("ashwini", "Ashwini"),
    ("bharani", "Bharani"),
    ("krittika", "Krittika"),
    ("rohini", "Rohini"),
    ("mrigashira", "Mrigashira"),
    ("ardra", "Ardra"),
    ("punarvasu", "Punarvasu"),
    ("pushya", "Pushya"),
    ("ashlesha", "Ashlesha"),
    ("magha", "Magha"),
    ("purva_phalguni", "Purva Phalguni"),
    ("uttara_phalguni", "Uttara Phalguni"),
    ("hasta", "Hasta"),
    ("chitra", "Chitra"),
    ("swati", "Swati"),
    ("vishakha", "Vishakha"),
    ("anuradha", "Anuradha"),
    ("jyeshtha", "Jyeshtha"),
    ("mula", "Mula"),
    ("purva_ashadha", "Purva Ashadha"),
    ("uttara_ashadha", "Uttara Ashadha"),
    ("shravana", "Shravana"),
    ("dhanishta", "Dhanishta"),
    ("shatabhisha", "Shatabhisha"),
    ("purva_bhadrapada", "Purva Bhadrapada"),
    ("uttara_bhadrapada", "Uttara Bhadrapada"),
    ("revati", "Revati"),
];

/// Vimshottari lord cycle, starting from Ashwini.
pub const NAKSHATRA_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Venus,
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseNakshatraRecord {
    pub id: String,
    pub name: String,
    pub lord: Graha,
    pub start: f64,
    pub end: f64,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraMetadata {
    #[serde(flatten)]
    pub base: BaseNakshatraRecord,
    pub offset: f64,
    pub progress: f64,
    pub pada: u8,
    pub pada_fraction: f64,
}

fn build_nakshatra_table() -> Vec<BaseNakshatraRecord> {
    NAKSHATRA_ORDER
        .iter()
        .enumerate()
        .map(|(idx, (slug, display_name))| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            BaseNakshatraRecord {
                id: slug.to_string(),
                name: display_name.to_string(),
                lord: nakshatra_lord(idx),
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
                index: idx,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<BaseNakshatraRecord> = build_nakshatra_table();
}

/// `floor(L / (360/27))`, clamped to 26 so 359.999... never spills over.
pub fn nakshatra_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    ((lon / NAKSHATRA_SEGMENT_SIZE).floor() as usize).min(NAKSHATRA_COUNT - 1)
}

/// Pada 1-4 within the nakshatra containing `longitude`.
pub fn pada(longitude: f64) -> u8 {
    let offset = normalize_degrees(longitude) % NAKSHATRA_SEGMENT_SIZE;
    ((offset / PADA_SIZE).floor() as u8).min(3) + 1
}

/// Ruling graha of a nakshatra, cycling every nine mansions.
pub fn nakshatra_lord(index: usize) -> Graha {
    NAKSHATRA_LORDS[index % NAKSHATRA_LORDS.len()]
}

pub fn nakshatra_name(index: usize) -> &'static str {
    NAKSHATRA_ORDER[index % NAKSHATRA_COUNT].1
}

/// Full record table, one entry per nakshatra in zodiac order.
pub fn nakshatra_table() -> &'static [BaseNakshatraRecord] {
    &NAKSHATRA_TABLE
}

/// Return metadata for the nakshatra containing the given longitude.
///
/// Returns a struct containing id, name, lord, index, start/end degrees,
/// within-nakshatra offset, pada number, and pada fraction.
pub fn nakshatra_for_longitude(longitude: f64) -> NakshatraMetadata {
    let lon = normalize_degrees(longitude);
    let entry = &NAKSHATRA_TABLE[nakshatra_index(lon)];

    let offset = (lon - entry.start).max(0.0);
    let pada = pada(lon);
    let pada_offset = offset - f64::from(pada - 1) * PADA_SIZE;

    NakshatraMetadata {
        base: entry.clone(),
        offset,
        progress: offset / NAKSHATRA_SEGMENT_SIZE,
        pada,
        pada_fraction: pada_offset / PADA_SIZE,
    }
}
