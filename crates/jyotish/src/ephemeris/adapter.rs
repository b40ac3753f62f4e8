use crate::ephemeris::builtin::lahiri_ayanamsa_degrees;
use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{normalize_degrees, Body, HouseCusps, HouseSystem, JulianDay};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::Cusp;

/// The Swiss Ephemeris keeps global state in C; every call goes through this lock.
static SWE_LOCK: Mutex<()> = Mutex::new(());

/// FLG_SWIEPH: use Swiss Ephemeris files
const FLG_SWIEPH: i32 = 2;

/// Default data directory when neither the settings nor the environment name one.
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Resolve the ephemeris directory: explicit path, `SWISS_EPHEMERIS_PATH`,
/// then [`DEFAULT_EPHEMERIS_PATH`].
pub fn resolve_ephemeris_path(ephemeris_path: Option<&Path>) -> PathBuf {
    ephemeris_path.map(Path::to_path_buf).unwrap_or_else(|| {
        env::var("SWISS_EPHEMERIS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
    })
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<&Path>) -> Result<Self, EphemerisError> {
        let path = resolve_ephemeris_path(ephemeris_path);

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris \
                          data files are installed."
                    .to_string(),
            });
        }

        {
            let _guard = SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            set_ephe_path(&path.to_string_lossy());
        }
        log::info!("Swiss Ephemeris data at {}", path.display());
        Ok(Self { ephemeris_path: path })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Swiss Ephemeris body id.
    pub fn body_code(body: Body) -> i32 {
        match body {
            Body::Sun => 0,
            Body::Moon => 1,
            Body::Mercury => 2,
            Body::Venus => 3,
            Body::Mars => 4,
            Body::Jupiter => 5,
            Body::Saturn => 6,
            Body::MeanNode => 10,
        }
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn name(&self) -> &str {
        "swiss"
    }

    fn tropical_longitude(&self, jd: JulianDay, body: Body) -> Result<f64, EphemerisError> {
        let _guard = SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let result = calc_ut(jd.0, Self::body_code(body) as u32, FLG_SWIEPH as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;
        Ok(normalize_degrees(result.out[0]))
    }

    /// The bindings do not expose `swe_set_sid_mode`, so the Lahiri value comes
    /// from the same precession model as the built-in backend.
    fn ayanamsa_lahiri(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        Ok(lahiri_ayanamsa_degrees(jd))
    }

    fn house_cusps(
        &self,
        jd: JulianDay,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseCusps, EphemerisError> {
        let (c, _) = {
            let _guard = SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            houses_ex(jd.0, FLG_SWIEPH, latitude, longitude, system.code() as i32)
        };
        let cusps = Cusp::from_array(c);
        let values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusp at lat={latitude} lon={longitude}"),
            });
        }
        Ok(HouseCusps {
            system,
            cusps: values.map(normalize_degrees),
        })
    }
}
