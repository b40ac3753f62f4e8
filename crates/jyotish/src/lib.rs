//! Sidereal (Lahiri) Vedic birth charts.
//!
//! [`ChartEngine`] turns a civil birth date, time, timezone and place into a
//! [`Chart`]: ascendant, nine grahas, twelve equal houses, the Moon's
//! nakshatra, simple strengths and a short interpretation. Positions come from
//! an [`EphemerisProvider`]; the built-in analytic ephemeris is the default and
//! the Swiss Ephemeris is available behind the `swisseph` feature.

pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod vedic;

pub use chart::{chart_summary, BirthData, Chart, ChartEngine, EngineSettings, EphemerisBackend};
pub use ephemeris::{BuiltinEphemeris, EphemerisError, EphemerisProvider};
pub use error::{ChartError, Result};
pub use vedic::{Graha, Rashi};

/// Compute a chart with the default engine (built-in ephemeris, Lahiri).
pub fn compute_chart(
    date: &str,
    time: &str,
    latitude: f64,
    longitude: f64,
    timezone: &str,
) -> Result<Chart> {
    ChartEngine::default().compute_chart(date, time, latitude, longitude, timezone)
}
