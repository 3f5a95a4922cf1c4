//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.pokeview/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The page size is not configurable.
//!
//! Config is read before the file logger exists (the logger's own settings
//! live here), so loading and resolution collect [`StartupNote`]s instead of
//! logging. `main` writes them out once the logger is up.

use log::Level;
use serde::Deserialize;
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PokeviewConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_FILE: &str = "pokeview.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Ignored or invalid values met while resolving
    pub notes: Vec<StartupNote>,
}

/// A message produced before logging is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupNote {
    pub level: Level,
    pub message: String,
}

impl StartupNote {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// A parsed config file plus what happened while finding it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: PokeviewConfig,
    pub notes: Vec<StartupNote>,
}

/// Values supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.pokeview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pokeview").join("config.toml"))
}

/// Load config from `~/.pokeview/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PokeviewConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            return Ok(LoadedConfig {
                config: PokeviewConfig::default(),
                notes: vec![StartupNote::new(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                )],
            });
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig, ConfigError> {
    if !path.exists() {
        let mut notes = vec![StartupNote::new(
            Level::Info,
            format!("No config file found, generating default at {}", path.display()),
        )];
        if let Err(e) = generate_default_config(path) {
            notes.push(StartupNote::new(
                Level::Warn,
                format!("Failed to write default config: {e}"),
            ));
        }
        return Ok(LoadedConfig {
            config: PokeviewConfig::default(),
            notes,
        });
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PokeviewConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    let notes = vec![
        StartupNote::new(Level::Info, format!("Loaded config from {}", path.display())),
        StartupNote::new(Level::Debug, format!("Config: {config:?}")),
    ];
    Ok(LoadedConfig { config, notes })
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# pokeview configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://pokeapi.co/api/v2"   # Or set POKEVIEW_BASE_URL, or --base-url
# timeout_secs = 15                        # Or set POKEVIEW_TIMEOUT_SECS

# [logging]
# level = "info"                           # off, error, warn, info, debug, trace (or --log-level)
# file = "pokeview.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PokeviewConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &PokeviewConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("POKEVIEW_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: env → config → default. Unparseable env values are ignored.
    let timeout_secs = env("POKEVIEW_TIMEOUT_SECS")
        .and_then(|v| match v.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(_) => {
                notes.push(StartupNote::new(
                    Level::Warn,
                    format!("Ignoring invalid POKEVIEW_TIMEOUT_SECS: {v:?}"),
                ));
                None
            }
        })
        .or(config.api.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    // Log level: CLI → config → default. An unknown value falls through to the next layer.
    let log_level = [
        ("--log-level", cli.log_level.as_deref()),
        ("[logging] level", config.logging.level.as_deref()),
    ]
    .into_iter()
    .find_map(|(origin, value)| {
        let value = value?;
        let parsed = parse_level(value);
        if parsed.is_none() {
            notes.push(StartupNote::new(
                Level::Warn,
                format!("Ignoring unknown log level {value:?} from {origin}"),
            ));
        }
        parsed
    })
    .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .logging
        .file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
        log_level,
        log_file: PathBuf::from(log_file),
        notes,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = PokeviewConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&PokeviewConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.log_file, PathBuf::from("pokeview.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = PokeviewConfig {
            api: ApiConfig {
                base_url: Some("http://localhost:9000/api/v2".to_string()),
                timeout_secs: Some(3),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: Some("/tmp/pv.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://localhost:9000/api/v2");
        assert_eq!(resolved.timeout, Duration::from_secs(3));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/pv.log"));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = PokeviewConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                timeout_secs: Some(3),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "POKEVIEW_BASE_URL" => Some("http://from-env".to_string()),
            "POKEVIEW_TIMEOUT_SECS" => Some("7".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.timeout, Duration::from_secs(7));

        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            log_level: Some("WARN".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_env_timeout_falls_back() {
        let env = |key: &str| (key == "POKEVIEW_TIMEOUT_SECS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&PokeviewConfig::default(), &CliOverrides::default(), env);
        assert_eq!(resolved.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(resolved.notes.len(), 1);
        assert_eq!(resolved.notes[0].level, Level::Warn);
        assert!(resolved.notes[0].message.contains("POKEVIEW_TIMEOUT_SECS"));
    }

    #[test]
    fn test_clean_resolve_has_no_notes() {
        let resolved = resolve_with_env(&PokeviewConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.notes.is_empty());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&PokeviewConfig::default(), &cli, no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            resolved.notes,
            vec![StartupNote::new(
                Level::Warn,
                "Ignoring unknown log level \"loud\" from --log-level"
            )]
        );
    }

    #[test]
    fn test_unknown_cli_log_level_falls_through_to_config() {
        let config = PokeviewConfig {
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &cli, no_env);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.notes.len(), 1);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[api]
base_url = "http://127.0.0.1:8080/api/v2"
timeout_secs = 30

[logging]
level = "trace"
"#;
        let config: PokeviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://127.0.0.1:8080/api/v2"));
        assert_eq!(config.api.timeout_secs, Some(30));
        assert_eq!(config.logging.level.as_deref(), Some("trace"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[logging]
file = "elsewhere.log"
"#;
        let config: PokeviewConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.file.as_deref(), Some("elsewhere.log"));
        assert!(config.api.base_url.is_none());
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("pokeview-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let loaded = load_config_from(&path).unwrap();
        assert!(loaded.config.api.base_url.is_none());
        assert_eq!(loaded.notes.len(), 1);
        assert!(loaded.notes[0].message.starts_with("No config file found"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# base_url = \"https://pokeapi.co/api/v2\""));

        // The generated file is all comments, so it parses to defaults.
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.config.api.base_url.is_none());
        assert!(reparsed.notes[0].message.starts_with("Loaded config from"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("pokeview-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
