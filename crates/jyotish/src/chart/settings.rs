use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ephemeris::{Ayanamsa, EphemerisError, HouseSystem};

/// Which ephemeris implementation backs the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EphemerisBackend {
    /// Analytic series compiled into the crate.
    #[default]
    Builtin,
    /// Swiss Ephemeris data files (cargo feature `swisseph`).
    Swiss,
}

impl EphemerisBackend {
    pub fn name(self) -> &'static str {
        match self {
            EphemerisBackend::Builtin => "builtin",
            EphemerisBackend::Swiss => "swiss",
        }
    }
}

impl fmt::Display for EphemerisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EphemerisBackend {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "builtin" | "built-in" => Ok(EphemerisBackend::Builtin),
            "swiss" | "swisseph" => Ok(EphemerisBackend::Swiss),
            _ => Err(EphemerisError::InvalidBackend {
                backend: s.to_string(),
                valid: vec!["builtin".to_string(), "swiss".to_string()],
            }),
        }
    }
}

/// Static engine configuration, fixed for the engine's lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSettings {
    pub backend: EphemerisBackend,
    /// Swiss Ephemeris data directory; ignored by the built-in backend.
    pub ephemeris_path: Option<PathBuf>,
    /// System queried for the ascendant. Houses are always laid out equal
    /// from that ascendant.
    pub house_system: HouseSystem,
    pub ayanamsa: Ayanamsa,
}

impl EngineSettings {
    pub fn with_backend(mut self, backend: EphemerisBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_ephemeris_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ephemeris_path = Some(path.into());
        self
    }

    pub fn with_house_system(mut self, house_system: HouseSystem) -> Self {
        self.house_system = house_system;
        self
    }
}
