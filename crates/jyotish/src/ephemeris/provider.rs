use thiserror::Error;

use crate::ephemeris::types::{Body, HouseCusps, HouseSystem, JulianDay};

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Invalid ayanamsa: {ayanamsa}. Valid ayanamsas: {valid:?}")]
    InvalidAyanamsa { ayanamsa: String, valid: Vec<String> },
    #[error("Invalid ephemeris backend: {backend}. Valid backends: {valid:?}")]
    InvalidBackend { backend: String, valid: Vec<String> },
    #[error("{jd} is outside the supported range [{min}, {max}]")]
    JulianDayOutOfRange { jd: JulianDay, min: f64, max: f64 },
    #[error("Failed to calculate position for {body} at {jd}: {message}")]
    CalculationFailed {
        body: Body,
        jd: JulianDay,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Narrow capability the chart engine needs from an ephemeris.
///
/// Implementations must be pure with respect to their inputs: the same Julian
/// Day and body always give the same answer.
pub trait EphemerisProvider: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Geocentric apparent ecliptic longitude in the tropical zodiac, [0, 360).
    fn tropical_longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError>;

    /// Lahiri ayanamsa in degrees.
    fn ayanamsa_lahiri(&self, jd: JulianDay) -> Result<f64, EphemerisError>;

    /// Tropical house cusps for a place; cusp 1 is the ascendant.
    fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tropical_longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(jd, body)
    }

    fn ayanamsa_lahiri(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        (**self).ayanamsa_lahiri(jd)
    }

    fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        (**self).house_cusps(jd, latitude, longitude, system)
    }
}
