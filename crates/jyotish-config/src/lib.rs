use jyotish::chart::{EngineSettings, EphemerisBackend};
use jyotish::ephemeris::{Ayanamsa, HouseSystem};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried for `configs/jyotish.toml`, from the repo root
/// and from a crate directory.
pub const CONFIG_PATHS: [&str; 2] = ["configs/jyotish.toml", "../../configs/jyotish.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
struct EngineToml {
    #[serde(default)]
    ephemeris: Option<String>,
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    house_system: Option<String>,
    #[serde(default)]
    ayanamsa: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineToml>,
}

/// Try the common relative paths for `configs/jyotish.toml`.
///
/// Returns the path that was read along with its contents.
pub fn read_config_toml_text() -> anyhow::Result<(PathBuf, String)> {
    for p in &CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok((PathBuf::from(p), c));
        }
    }
    anyhow::bail!("Could not load jyotish.toml from {:?}", CONFIG_PATHS);
}

/// Parse engine settings from TOML text. A missing `[engine]` table or key
/// keeps the default.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse jyotish.toml: {e}"))?;
    let cfg = root.engine.unwrap_or_default();

    let mut settings = EngineSettings::default();
    if let Some(backend) = cfg.ephemeris {
        settings.backend = backend
            .parse::<EphemerisBackend>()
            .map_err(|e| anyhow::anyhow!("engine.ephemeris: {e}"))?;
    }
    if let Some(system) = cfg.house_system {
        settings.house_system = system
            .parse::<HouseSystem>()
            .map_err(|e| anyhow::anyhow!("engine.house_system: {e}"))?;
    }
    if let Some(ayanamsa) = cfg.ayanamsa {
        settings.ayanamsa = ayanamsa
            .parse::<Ayanamsa>()
            .map_err(|e| anyhow::anyhow!("engine.ayanamsa: {e}"))?;
    }
    settings.ephemeris_path = cfg.ephemeris_path;
    Ok(settings)
}

/// The Swiss backend needs its data directory up front.
pub fn validate_ephemeris_path(settings: &EngineSettings) -> anyhow::Result<()> {
    if settings.backend != EphemerisBackend::Swiss {
        return Ok(());
    }
    if let Some(path) = &settings.ephemeris_path {
        if !path.is_dir() {
            anyhow::bail!("engine.ephemeris_path does not exist: {}", path.display());
        }
    }
    Ok(())
}

/// Load engine settings from `path`, or from the first of [`CONFIG_PATHS`]
/// that exists. With no path given and no file found, the defaults apply.
pub fn load_engine_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", p.display()))?,
        None => match read_config_toml_text() {
            Ok((_, text)) => text,
            Err(_) => return Ok(EngineSettings::default()),
        },
    };
    let settings = parse_engine_settings(&text)?;
    validate_ephemeris_path(&settings)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(parse_engine_settings("").unwrap(), EngineSettings::default());
        assert_eq!(parse_engine_settings("[engine]\n").unwrap(), EngineSettings::default());
    }

    #[test]
    fn test_full_engine_table() {
        let text = r#"
            [engine]
            ephemeris = "swiss"
            ephemeris_path = "/opt/swisseph"
            house_system = "equal"
            ayanamsa = "lahiri"
        "#;
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.backend, EphemerisBackend::Swiss);
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/swisseph")));
        assert_eq!(settings.house_system, HouseSystem::Equal);
        assert_eq!(settings.ayanamsa, Ayanamsa::Lahiri);
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let err = parse_engine_settings("[engine]\nhouse_system = \"koch\"\n").unwrap_err();
        assert!(err.to_string().contains("koch"), "{err}");
        assert!(parse_engine_settings("[engine]\nayanamsa = \"raman\"\n").is_err());
        assert!(parse_engine_settings("[engine]\nephemeris = \"jpl\"\n").is_err());
        assert!(parse_engine_settings("[engine").is_err());
    }

    #[test]
    fn test_missing_swiss_directory() {
        let settings = EngineSettings::default()
            .with_backend(EphemerisBackend::Swiss)
            .with_ephemeris_path("/nonexistent/swisseph");
        assert!(validate_ephemeris_path(&settings).is_err());
        let builtin = EngineSettings::default().with_ephemeris_path("/nonexistent/swisseph");
        assert!(validate_ephemeris_path(&builtin).is_ok());
    }

    #[test]
    fn test_explicit_missing_file() {
        assert!(load_engine_settings(Some(Path::new("/nonexistent/jyotish.toml"))).is_err());
    }
}
