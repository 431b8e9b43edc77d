//! Facade crate for Warehouse Hub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `whub` with the desired feature flags (`server`).
//! - Call [`init`] to build the feature slices; register them into the API state.

use std::borrow::Cow;
pub use whub_domain as domain;
use whub_domain::config::ApiConfig;
use whub_domain::registry::InitializedSlice;
pub use whub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use whub_catalog::server::catalog_router;
        pub use whub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use whub_catalog as catalog;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "catalog",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Failure while bootstrapping the feature slices.
#[whub_derive::whub_error]
pub enum PlatformError {
    #[error("Catalog slice failed{}: {source}", format_context(.context))]
    Catalog { source: whub_catalog::CatalogError, context: Option<Cow<'static, str>> },
}

/// Initialize all enabled feature slices.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, PlatformError> {
    let mut slices = Vec::new();

    // Catalog
    slices.push(features::catalog::init(&config.catalog)?);

    tracing::debug!(slices = slices.len(), "Feature slices initialized");
    Ok(slices)
}
