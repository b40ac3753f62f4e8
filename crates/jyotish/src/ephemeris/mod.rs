pub mod builtin;
pub mod provider;
pub mod time;
pub mod types;

#[cfg(feature = "swisseph")]
pub mod adapter;

pub use builtin::BuiltinEphemeris;
pub use provider::{EphemerisError, EphemerisProvider};
pub use time::{datetime_to_julian_day, julian_day};
pub use types::{
    normalize_degrees, Ayanamsa, Body, HouseCusps, HouseSystem, JulianDay, DAYS_PER_CENTURY,
    J2000_JD,
};

#[cfg(feature = "swisseph")]
pub use adapter::SwissEphemerisAdapter;
