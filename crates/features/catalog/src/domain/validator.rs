//! # Selection validator
//!
//! Checks a caller-supplied list of print positions against the policy of a
//! product type. The checks run in a fixed order and accumulate:
//!
//! 1. **Product type**: an unknown id yields a single error and nothing else runs.
//! 2. **Allowed set**: every selection outside the allowed positions, in one error.
//! 3. **Max count**: the raw selection length (duplicates included) against `max_positions`.
//! 4. **Required**: every required position absent from the selection, in one error.
//! 5. **Exclusivity**: advisory; produces a warning and never affects validity.
//!
//! Position names are compared case-insensitively. Nothing here logs or fails:
//! the [`SelectionReport`] is the only channel.

use super::registry::{ProductType, get_product_type};
use fxhash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;
use whub_kernel::domain::config::ExclusivityMode;

/// A single validation finding, rendered as a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionIssue {
    UnknownProductType { id: String },
    InvalidPositions { product_type: String, invalid: Vec<String>, allowed: Vec<String> },
    TooManyPositions { product_type: String, max: usize, selected: usize },
    MissingRequired { product_type: String, missing: Vec<String> },
    ExclusiveSelection { exclusive: Vec<String>, mode: ExclusivityMode },
}

impl fmt::Display for SelectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProductType { id } => write!(f, "Unknown product type: {id}"),
            Self::InvalidPositions { product_type, invalid, allowed } => write!(
                f,
                "Invalid positions for {product_type}: {}. Allowed positions: {}",
                invalid.join(", "),
                allowed.join(", ")
            ),
            Self::TooManyPositions { product_type, max, selected } => write!(
                f,
                "{product_type} allows at most {max} position(s), but {selected} were selected"
            ),
            Self::MissingRequired { product_type, missing } => {
                write!(f, "{product_type} requires the following position(s): {}", missing.join(", "))
            },
            Self::ExclusiveSelection { exclusive, mode: ExclusivityMode::Standalone } => write!(
                f,
                "{} should be printed on its own; consider selecting only one position",
                exclusive.join(", ")
            ),
            Self::ExclusiveSelection { exclusive, mode: ExclusivityMode::Mutual } => write!(
                f,
                "{} should not be combined; consider selecting only one of them",
                exclusive.join(", ")
            ),
        }
    }
}

impl Serialize for SelectionIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of [`validate_position_selection`].
///
/// Serializes as `{ "isValid": bool, "errors": [string], "warnings": [string] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SelectionReport {
    /// `true` iff `errors` is empty
    pub is_valid: bool,
    /// Blocking problems
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub errors: Vec<SelectionIssue>,
    /// Advisory notes that never affect `isValid`
    #[cfg_attr(feature = "server", schema(value_type = Vec<String>))]
    pub warnings: Vec<SelectionIssue>,
}

impl SelectionReport {
    fn from_issues(errors: Vec<SelectionIssue>, warnings: Vec<SelectionIssue>) -> Self {
        Self { is_valid: errors.is_empty(), errors, warnings }
    }

    /// Error messages, in check order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Validates `selected` using the literal ([`ExclusivityMode::Standalone`]) exclusivity rule.
#[must_use]
pub fn validate_position_selection<S: AsRef<str>>(
    product_type_id: &str,
    selected: &[S],
) -> SelectionReport {
    validate_position_selection_with(product_type_id, selected, ExclusivityMode::Standalone)
}

/// Validates `selected` against the policy of `product_type_id`.
#[must_use]
pub fn validate_position_selection_with<S: AsRef<str>>(
    product_type_id: &str,
    selected: &[S],
    mode: ExclusivityMode,
) -> SelectionReport {
    let Some(product_type) = get_product_type(product_type_id) else {
        return SelectionReport::from_issues(
            vec![SelectionIssue::UnknownProductType { id: product_type_id.to_owned() }],
            Vec::new(),
        );
    };

    validate_product_type_selection(product_type, selected, mode)
}

/// Runs checks 2 to 5 against an already resolved product type.
#[must_use]
pub fn validate_product_type_selection<S: AsRef<str>>(
    product_type: &ProductType,
    selected: &[S],
    mode: ExclusivityMode,
) -> SelectionReport {
    let chosen: FxHashSet<String> = selected.iter().map(|p| p.as_ref().to_lowercase()).collect();
    let errors = [
        check_allowed(product_type, selected),
        check_max_count(product_type, selected.len()),
        check_required(product_type, &chosen),
    ]
    .into_iter()
    .flatten()
    .collect();
    let warnings = check_exclusive(product_type, &chosen, selected.len(), mode).into_iter().collect();

    SelectionReport::from_issues(errors, warnings)
}

fn check_allowed<S: AsRef<str>>(product_type: &ProductType, selected: &[S]) -> Option<SelectionIssue> {
    let allowed: FxHashSet<String> =
        product_type.allowed_positions.iter().map(|p| p.to_lowercase()).collect();

    let invalid: Vec<String> = selected
        .iter()
        .map(S::as_ref)
        .filter(|position| !allowed.contains(&position.to_lowercase()))
        .map(str::to_owned)
        .collect();

    (!invalid.is_empty()).then(|| SelectionIssue::InvalidPositions {
        product_type: product_type.name.to_owned(),
        invalid,
        allowed: owned(product_type.allowed_positions),
    })
}

fn check_max_count(product_type: &ProductType, selected: usize) -> Option<SelectionIssue> {
    let max = product_type.max_positions()?;
    (selected > max).then(|| SelectionIssue::TooManyPositions {
        product_type: product_type.name.to_owned(),
        max,
        selected,
    })
}

fn check_required(product_type: &ProductType, chosen: &FxHashSet<String>) -> Option<SelectionIssue> {
    let missing: Vec<String> = product_type
        .required_positions()?
        .iter()
        .filter(|position| !chosen.contains(&position.to_lowercase()))
        .map(|&position| position.to_owned())
        .collect();

    (!missing.is_empty()).then(|| SelectionIssue::MissingRequired {
        product_type: product_type.name.to_owned(),
        missing,
    })
}

fn check_exclusive(
    product_type: &ProductType,
    chosen: &FxHashSet<String>,
    selected: usize,
    mode: ExclusivityMode,
) -> Option<SelectionIssue> {
    let mut seen = FxHashSet::default();
    let present: Vec<String> = product_type
        .exclusive_positions()?
        .iter()
        .map(|position| (position, position.to_lowercase()))
        .filter(|(_, lower)| chosen.contains(lower) && seen.insert(lower.clone()))
        .map(|(&position, _)| position.to_owned())
        .collect();

    let fires = match mode {
        ExclusivityMode::Standalone => !present.is_empty() && selected > 1,
        ExclusivityMode::Mutual => present.len() > 1,
    };

    fires.then_some(SelectionIssue::ExclusiveSelection { exclusive: present, mode })
}

fn owned(positions: &[&str]) -> Vec<String> {
    positions.iter().map(|&p| p.to_owned()).collect()
}
