pub mod data;
pub mod engine;
pub mod interpretation;
pub mod settings;
pub mod summary;

pub use data::{
    Ascendant, BirthData, BirthDetails, Chart, House, Interpretation, Location, MoonNakshatra,
    PlanetPosition, PlanetStrength,
};
pub use engine::{localize, ChartEngine};
pub use interpretation::interpret;
pub use settings::{EngineSettings, EphemerisBackend};
pub use summary::chart_summary;
