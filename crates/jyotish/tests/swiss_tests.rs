#![cfg(feature = "swisseph")]

use jyotish::chart::{ChartEngine, EngineSettings, EphemerisBackend};
use jyotish::ephemeris::{
    BuiltinEphemeris, Body, EphemerisProvider, HouseSystem, JulianDay, SwissEphemerisAdapter,
    J2000_JD,
};
use jyotish::Graha;

fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_swiss_agrees_with_builtin() {
    let swiss = SwissEphemerisAdapter::new(None).unwrap();
    let builtin = BuiltinEphemeris::new();
    let jd = JulianDay(J2000_JD);

    for body in [Body::Sun, Body::Moon, Body::Mars, Body::Jupiter, Body::MeanNode] {
        let a = swiss.tropical_longitude(jd, body).unwrap();
        let b = builtin.tropical_longitude(jd, body).unwrap();
        assert!(angle_diff(a, b) < 0.5, "{body}: swiss {a} builtin {b}");
    }

    let a = swiss.house_cusps(jd, 28.61, 77.21, HouseSystem::Placidus).unwrap();
    let b = builtin.house_cusps(jd, 28.61, 77.21, HouseSystem::Placidus).unwrap();
    assert!(angle_diff(a.ascendant(), b.ascendant()) < 0.1);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_engine_with_swiss_backend() {
    let settings = EngineSettings::default().with_backend(EphemerisBackend::Swiss);
    let engine = ChartEngine::new(settings).unwrap();
    assert_eq!(engine.provider().name(), "swiss");
    let chart = engine
        .compute_chart("1990-05-15", "14:30", 28.6139, 77.2090, "Asia/Kolkata")
        .unwrap();
    assert_eq!(chart.planets.len(), 9);
    assert!(chart.strength(Graha::Rahu).is_none());
}

#[test]
fn test_missing_data_directory() {
    let missing = std::path::Path::new("/nonexistent/swisseph");
    let err = SwissEphemerisAdapter::new(Some(missing)).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/swisseph"));
}

#[test]
fn test_configured_directory_reaches_library() {
    let dir = std::env::temp_dir();
    let adapter = SwissEphemerisAdapter::new(Some(&dir)).unwrap();
    assert_eq!(adapter.ephemeris_path(), dir.as_path());
}

#[test]
fn test_body_codes() {
    assert_eq!(SwissEphemerisAdapter::body_code(Body::Sun), 0);
    assert_eq!(SwissEphemerisAdapter::body_code(Body::Saturn), 6);
    assert_eq!(SwissEphemerisAdapter::body_code(Body::MeanNode), 10);
}
