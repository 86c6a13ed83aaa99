use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`ATELIER__MOTION__ENABLED=false`).
pub const ENV_PREFIX: &str = "ATELIER";
/// Nesting separator used in environment overrides.
pub const ENV_SEPARATOR: &str = "__";
/// Base name of the configuration file when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "desktop";

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Adds a human-readable context to configuration failures.
pub trait ConfigErrorExt<T> {
    /// Attaches `context` to the error, if any.
    ///
    /// # Errors
    /// Returns the original error wrapped as [`ConfigError`] with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T> ConfigErrorExt<T> for std::result::Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `desktop.toml`) if it exists. If no path is
///    provided, it defaults to `"desktop"`. Any extension supported by the `config` crate is accepted.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `ATELIER__`.
///    Nested structures are accessed using double underscores (e.g., `ATELIER__WINDOW__WIDTH` maps to `window.width`).
///
/// Missing sections fall back to the target type's `#[serde(default)]` values, so a machine
/// without any configuration still starts.
///
/// # Errors
/// This function will return an error if:
/// * The file exists but cannot be parsed.
/// * The merged values do not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use atelier_kernel::config::load_config;
/// use atelier_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let env = Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true);
    load_layered(path, env)
}

fn load_layered<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!("Loading config from {}", effective_path.display());

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_domain::config::AppConfig;
    use std::fs;
    use tempfile::tempdir;

    fn env_from(pairs: &[(&str, &str)]) -> Environment {
        let source = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<config::Map<String, String>>();

        Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().expect("temp dir");
        let cfg: AppConfig =
            load_layered(Some(dir.path().join("absent")), env_from(&[])).expect("load");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_file_values_are_applied() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("desktop.toml");
        fs::write(&path, "[window]\ntitle = \"Fitting Room\"\n\n[motion]\nstagger_ms = 40\n")
            .expect("write config");

        let cfg: AppConfig = load_layered(Some(&path), env_from(&[])).expect("load");
        assert_eq!(cfg.window.title, "Fitting Room");
        assert_eq!(cfg.motion.stagger_ms, 40);
        assert!(cfg.motion.enabled);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("desktop.toml");
        fs::write(&path, "[motion]\nenabled = true\n").expect("write config");

        let env = env_from(&[("ATELIER__MOTION__ENABLED", "false"), ("ATELIER__LOG__LEVEL", "debug")]);
        let cfg: AppConfig = load_layered(Some(&path), env).expect("load");
        assert!(!cfg.motion.enabled);
        assert_eq!(cfg.log.level, "debug");
    }

    #[test]
    fn test_malformed_file_reports_context() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[window\ntitle = ").expect("write config");

        let err = load_layered::<AppConfig>(Some(&path), env_from(&[])).expect_err("must fail");
        assert!(err.to_string().contains("Failed to build config"), "{err}");
    }
}
