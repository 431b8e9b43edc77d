//! # Catalog
//!
//! Print-position catalog slice for product configuration.
//!
//! * [`domain::registry`]: the built-in product types and their position policies.
//! * [`domain::validator`]: checks a selection of print positions and reports errors and warnings.
//! * [`domain::filter`]: narrows position lists and projects constraints for pickers.
//! * [`dto`]: serializable product-type views.
//! * `server` (feature): Axum handlers and the `/catalog` router.
//!
//! ```rust
//! use whub_catalog::domain::validate_position_selection;
//!
//! let report = validate_position_selection("tote-bag", &["Front"]);
//! assert!(report.is_valid);
//! ```

pub mod domain;
pub mod dto;
mod error;
#[cfg(feature = "server")]
pub mod server;

pub use error::{CatalogError, CatalogErrorExt};

use crate::domain::{
    SelectionReport, audit_registry, product_types, registry::duplicate_ids,
    validate_position_selection_with,
};
use whub_kernel::domain::config::{CatalogConfig, ExclusivityMode};
use whub_kernel::domain::registry::InitializedSlice;

/// Catalog feature state.
#[whub_derive::whub_slice]
pub struct Catalog {
    /// Exclusivity rule applied when a request does not pick one.
    pub exclusivity: ExclusivityMode,
}

impl Catalog {
    /// Validates `selected` with `mode`, falling back to the configured exclusivity rule.
    #[must_use]
    pub fn validate<S: AsRef<str>>(
        &self,
        product_type_id: &str,
        selected: &[S],
        mode: Option<ExclusivityMode>,
    ) -> SelectionReport {
        validate_position_selection_with(product_type_id, selected, mode.unwrap_or(self.exclusivity))
    }
}

/// Initialize the catalog feature.
///
/// Registry audit findings are logged as warnings and never fail initialization.
///
/// # Errors
/// Returns [`CatalogError::Internal`] if two product types share an id.
pub fn init(config: &CatalogConfig) -> Result<InitializedSlice, CatalogError> {
    let duplicates = duplicate_ids(product_types());
    if !duplicates.is_empty() {
        return Err(CatalogError::Internal {
            message: format!("Duplicate product type ids: {}", duplicates.join(", ")).into(),
            context: Some("Catalog registry".into()),
        });
    }

    if config.audit_registry {
        for finding in audit_registry() {
            tracing::warn!(
                product_type = finding.product_type,
                position = finding.position,
                kind = %finding.kind,
                "Constrained position is not an allowed position"
            );
        }
    }

    tracing::info!(
        product_types = product_types().len(),
        exclusivity = %config.exclusivity,
        "Catalog slice initialized"
    );

    Ok(Catalog::new(CatalogInner { exclusivity: config.exclusivity }).into())
}
