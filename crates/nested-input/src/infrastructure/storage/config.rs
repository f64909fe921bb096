//! TOML configuration for the input bridge.
//!
//! Read from `$XDG_CONFIG_HOME/nested-input/config.toml` (falling back to
//! `~/.config/nested-input/config.toml`), or from an explicit path given on
//! the command line.  A missing file is not an error: every field has a
//! default, and so does every section.
//!
//! ```toml
//! log_level = "info"
//!
//! [bridge]
//! thread_name = "nested-input"
//! blocked_signal = "SIGUSR1"   # "" disables masking
//!
//! [hotkeys]
//! command_modifier = "LeftMeta"
//! toggle_fullscreen = "KeyF"
//! toggle_filter = "KeyN"
//!
//! [output]
//! width = 1280
//! height = 720
//! refresh_rate = 60
//! ```
//!
//! Key and modifier names are the variant names of
//! [`EvdevKey`](nested_input_core::EvdevKey) and
//! [`Modifier`](nested_input_core::Modifier).

use std::path::{Path, PathBuf};

use nested_input_core::OutputMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::hotkeys::HotkeyBindings;
use crate::infrastructure::signal;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `bridge.blocked_signal` does not name a signal.
    #[error("invalid bridge.blocked_signal {0:?}")]
    InvalidSignal(String),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// `tracing` level filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub hotkeys: HotkeyBindings,
    /// Output mode assumed until the window reports its own.
    #[serde(default)]
    pub output: OutputMode,
}

/// Loop thread settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeConfig {
    /// Name of the input loop thread.
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
    /// Signal blocked on the input loop thread.  Empty disables masking.
    #[serde(default = "default_blocked_signal")]
    pub blocked_signal: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_thread_name() -> String {
    "nested-input".to_string()
}
fn default_blocked_signal() -> String {
    "SIGUSR1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            bridge: BridgeConfig::default(),
            hotkeys: HotkeyBindings::default(),
            output: OutputMode::default(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
            blocked_signal: default_blocked_signal(),
        }
    }
}

impl AppConfig {
    /// Checks values that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSignal`] for an unknown signal name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        signal::validate(&self.bridge.blocked_signal)
            .map_err(|_| ConfigError::InvalidSignal(self.bridge.blocked_signal.clone()))
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Returns the `nested-input` config directory.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] when neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("nested-input"))
}

/// Resolves the default config file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if the directory cannot be determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads and validates the config.
///
/// Reads `path` if given, otherwise the default location.  A missing file
/// yields [`AppConfig::default()`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::InvalidSignal`] for an unknown signal name.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_file_path()?,
    };

    let cfg = match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str::<AppConfig>(&content)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => return Err(ConfigError::Io { path, source: e }),
    };
    cfg.validate()?;
    Ok(cfg)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use nested_input_core::{EvdevKey, Modifier};

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_config_default_values() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.bridge.thread_name, "nested-input");
        assert_eq!(cfg.bridge.blocked_signal, "SIGUSR1");
        assert_eq!(cfg.hotkeys.command_modifier, Modifier::LeftMeta);
        assert_eq!(cfg.hotkeys.toggle_fullscreen, EvdevKey::KeyF);
        assert_eq!(cfg.hotkeys.toggle_filter, EvdevKey::KeyN);
        assert_eq!(cfg.output, OutputMode { width: 1280, height: 720, refresh_rate: 60 });
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_sections_override_only_named_fields() {
        // Arrange
        let toml_str = r#"
log_level = "debug"

[bridge]
blocked_signal = ""

[hotkeys]
toggle_filter = "F12"

[output]
refresh_rate = 144
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.bridge.thread_name, "nested-input");
        assert_eq!(cfg.bridge.blocked_signal, "");
        assert_eq!(cfg.hotkeys.toggle_filter, EvdevKey::F12);
        assert_eq!(cfg.hotkeys.toggle_fullscreen, EvdevKey::KeyF);
        assert_eq!(cfg.output.refresh_rate, 144);
        assert_eq!(cfg.output.width, 1280);
    }

    #[test]
    fn test_unknown_key_name_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
[hotkeys]
toggle_fullscreen = "Hyper"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        let result: Result<AppConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_unknown_signal_fails_validation() {
        let mut cfg = AppConfig::default();
        cfg.bridge.blocked_signal = "SIGWHATEVER".into();

        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSignal(s)) if s == "SIGWHATEVER"));
    }

    // ── Loading from disk ─────────────────────────────────────────────────────

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("nested-input-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir.join(name)
    }

    #[test]
    fn test_load_config_missing_file_yields_defaults() {
        let path = scratch_file("does-not-exist.toml");
        let _ = std::fs::remove_file(&path);

        let cfg = load_config(Some(&path)).expect("load");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_config_reads_explicit_path() {
        // Arrange
        let path = scratch_file("explicit.toml");
        std::fs::write(&path, "[bridge]\nthread_name = \"input\"\n").expect("write");

        // Act
        let cfg = load_config(Some(&path)).expect("load");

        // Assert
        assert_eq!(cfg.bridge.thread_name, "input");
        let _ = std::fs::remove_file(&path);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_config_rejects_unknown_signal() {
        let path = scratch_file("bad-signal.toml");
        std::fs::write(&path, "[bridge]\nblocked_signal = \"SIGNOPE\"\n").expect("write");

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(ConfigError::InvalidSignal(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_config_reports_malformed_file() {
        let path = scratch_file("malformed.toml");
        std::fs::write(&path, "log_level = ").expect("write");

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }
}
