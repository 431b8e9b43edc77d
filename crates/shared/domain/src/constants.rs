//! Shared string constants.

/// `OpenAPI` tag for platform endpoints (health).
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the print-position catalog.
pub const CATALOG_TAG: &str = "Catalog";

/// Prefix of environment overrides, e.g. `WHUB__SERVER__PORT=8080`.
pub const CONFIG_ENV_PREFIX: &str = "WHUB";
/// Separator between nested config keys in environment overrides.
pub const CONFIG_ENV_SEPARATOR: &str = "__";
/// Config file looked up when no explicit path is given (any supported extension).
pub const DEFAULT_CONFIG_FILE: &str = "server";

pub const DEFAULT_PORT: u16 = 4583;
