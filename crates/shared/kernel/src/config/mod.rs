use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;
use whub_domain::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_FILE};

/// Custom error type for config loading.
#[whub_derive::whub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration: an optional file overlaid with `WHUB__`-prefixed environment variables.
///
/// Nested keys use double underscores, so `WHUB__CATALOG__EXCLUSIVITY=mutual`
/// maps to `catalog.exclusivity`. The file may omit its extension; every
/// format supported by the `config` crate is probed.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
    env: Option<HashMap<String, String>>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_CONFIG_FILE), required: false, env: None }
    }
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` instead of the default `server` file and makes it mandatory.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self.required = true;
        self
    }

    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replaces the process environment with an explicit variable map.
    #[must_use]
    pub fn env_source<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered sources and deserializes them into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] when a required file is missing, a source
    /// is malformed, or the merged values do not match `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        // Environment values arrive as strings; parse ports and flags into their types.
        let mut env = Environment::with_prefix(CONFIG_ENV_PREFIX)
            .separator(CONFIG_ENV_SEPARATOR)
            .try_parsing(true);
        if let Some(vars) = self.env {
            env = env.source(Some(vars.into_iter().collect()));
        }

        info!(path = %self.path.display(), required = self.required, "Loading config");

        Config::builder()
            .add_source(File::from(self.path.as_path()).required(self.required))
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Loads `T` from `path` (mandatory) or from the optional default `server` file,
/// then applies environment overrides.
///
/// # Errors
/// Returns an error if an explicitly given file cannot be found, or if the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust,no_run
/// use whub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    match path {
        Some(path) => ConfigLoader::new().file(path).load(),
        None => ConfigLoader::new().load(),
    }
}
