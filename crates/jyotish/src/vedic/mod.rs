pub mod bhava;
pub mod nakshatra;
pub mod rashi;
pub mod strength;
pub mod types;

pub use bhava::{equal_bhavas, Bhava, HOUSE_LABELS};
pub use nakshatra::{
    nakshatra_for_longitude, nakshatra_index, nakshatra_lord, nakshatra_name, pada,
    NakshatraMetadata, NAKSHATRA_SEGMENT_SIZE, PADA_SIZE,
};
pub use rashi::{degree_in_sign, sign_index, Rashi};
pub use strength::{strength_score, StrengthStatus};
pub use types::Graha;
