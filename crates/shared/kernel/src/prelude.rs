//! Common imports for feature slices.

pub use crate::config::{ConfigError, ConfigLoader, load_config};
pub use crate::domain::config::{ApiConfig, CatalogConfig, ExclusivityMode};
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
