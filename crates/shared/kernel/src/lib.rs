//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and, behind the `server`
//! feature, the API state container plus the system router.
//!
//! ## Config loading
//! ```rust,no_run
//! use whub_kernel::config::load_config;
//! use whub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use whub_domain as domain;
