use crate::constants::DEFAULT_PORT;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::str::FromStr;

/// Settings read from the config file and `WHUB__*` environment variables.
///
/// Every section is optional; missing values take their defaults.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

/// Listening socket and optional TLS.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// PEM files used when HTTPS is enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Print-position catalog knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// How `exclusivePositions` are interpreted by the selection validator.
    pub exclusivity: ExclusivityMode,
    /// Log registry entries whose required/exclusive positions are not allowed positions.
    pub audit_registry: bool,
}

/// Interpretation of a product type's exclusive positions.
///
/// Config files and environment variables are parsed through [`FromStr`], so
/// they accept the same spellings as the CLI and the REST query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusivityMode {
    /// An exclusive position must be the only selected position.
    #[default]
    Standalone,
    /// Two or more distinct exclusive positions must not be selected together.
    Mutual,
}

impl ExclusivityMode {
    pub const ALL: [Self; 2] = [Self::Standalone, Self::Mutual];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standalone => "standalone",
            Self::Mutual => "mutual",
        }
    }
}

impl fmt::Display for ExclusivityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`ExclusivityMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExclusivityModeError(String);

impl fmt::Display for ParseExclusivityModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown exclusivity mode '{}', expected 'standalone' or 'mutual'", self.0)
    }
}

impl std::error::Error for ParseExclusivityModeError {}

impl<'de> Deserialize<'de> for ExclusivityMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl FromStr for ExclusivityMode {
    type Err = ParseExclusivityModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseExclusivityModeError(s.to_owned()))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: Ipv4Addr::UNSPECIFIED.into(), port: DEFAULT_PORT, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: "cert.pem".into(), key: "key.pem".into() }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { exclusivity: ExclusivityMode::default(), audit_registry: true }
    }
}
