//! Position narrowing and constraint projection for pickers.

use super::registry::{get_allowed_positions, get_product_type};
use whub_derive::api_model;

/// Constraint fields of a product type, shaped for display.
#[api_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct PositionConstraintInfo {
    /// Maximum number of positions, absent when unlimited
    pub max_positions: Option<usize>,
    /// Positions that must be selected, absent when none are required
    pub required_positions: Option<Vec<String>>,
    /// Allowed positions in registry order (empty for unknown product types)
    pub allowed_positions: Vec<String>,
}

/// Whether `position` case-insensitively matches an allowed position of `product_type_id`.
#[must_use]
pub fn is_position_allowed(product_type_id: &str, position: &str) -> bool {
    let position = position.to_lowercase();
    get_allowed_positions(product_type_id).iter().any(|allowed| allowed.to_lowercase() == position)
}

/// Keeps the entries of `all_positions` allowed for `product_type_id`.
///
/// Input order and duplicates are preserved; an unknown product type yields nothing.
#[must_use]
pub fn filter_positions_by_product_type<S: AsRef<str>>(
    all_positions: &[S],
    product_type_id: &str,
) -> Vec<String> {
    all_positions
        .iter()
        .map(S::as_ref)
        .filter(|position| is_position_allowed(product_type_id, position))
        .map(str::to_owned)
        .collect()
}

/// Max count, required positions and allowed positions of `product_type_id`; empty for unknown ids.
#[must_use]
pub fn get_position_constraint_info(product_type_id: &str) -> PositionConstraintInfo {
    let Some(product_type) = get_product_type(product_type_id) else {
        return PositionConstraintInfo::default();
    };

    PositionConstraintInfo {
        max_positions: product_type.max_positions(),
        required_positions: product_type
            .required_positions()
            .map(|positions| positions.iter().map(|&p| p.to_owned()).collect()),
        allowed_positions: product_type.allowed_positions.iter().map(|&p| p.to_owned()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_check_ignores_case() {
        assert!(is_position_allowed("hoodie", "hOOD"));
        assert!(!is_position_allowed("hoodie", "Neck Label"));
        assert!(!is_position_allowed("spaceship", "Front"));
    }

    #[test]
    fn filter_keeps_order_and_duplicates() {
        let all = ["Pocket", "Neck Label", "front", "Pocket", "Left Chest"];
        assert_eq!(filter_positions_by_product_type(&all, "hoodie"), vec!["Pocket", "front", "Pocket"]);
    }

    #[test]
    fn constraint_info_for_required_positions() {
        let info = get_position_constraint_info("tote-bag");
        assert_eq!(info.max_positions, Some(1));
        assert_eq!(info.required_positions, Some(vec!["Front".to_owned()]));
        assert_eq!(info.allowed_positions, vec!["Front".to_owned()]);
    }

    #[test]
    fn constraint_info_without_constraints() {
        let info = get_position_constraint_info("poster");
        assert_eq!(info.max_positions, None);
        assert_eq!(info.required_positions, None);
        assert_eq!(info.allowed_positions, vec!["Front".to_owned()]);
    }

    #[test]
    fn constraint_info_serializes_camel_case() {
        let json = serde_json::to_value(get_position_constraint_info("cap")).expect("serializes");
        assert_eq!(json["maxPositions"], 2);
        assert!(json["requiredPositions"].is_null());
        assert_eq!(json["allowedPositions"][3], "Right Side");
    }
}
