//! Serializable views of registry entries, shared by the REST handlers and the CLI.

use crate::domain::{PositionConstraints, ProductType};
use whub_derive::api_model;

#[api_model]
/// Product type with its print-position policy
pub struct ProductTypeResponse {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub description: String,
    /// Allowed positions in registry order
    pub allowed_positions: Vec<String>,
    /// Selection rules, absent when the product type has none
    pub constraints: Option<ConstraintsResponse>,
}

#[api_model]
/// Selection rules of a product type
pub struct ConstraintsResponse {
    pub max_positions: Option<usize>,
    pub required_positions: Option<Vec<String>>,
    /// Positions that should not be combined with others
    pub exclusive_positions: Option<Vec<String>>,
}

fn owned(positions: &[&str]) -> Vec<String> {
    positions.iter().map(|&p| p.to_owned()).collect()
}

impl From<&ProductType> for ProductTypeResponse {
    fn from(product_type: &ProductType) -> Self {
        Self {
            id: product_type.id.to_owned(),
            name: product_type.name.to_owned(),
            description: product_type.description.to_owned(),
            allowed_positions: owned(product_type.allowed_positions),
            constraints: product_type.constraints.as_ref().map(ConstraintsResponse::from),
        }
    }
}

impl From<&PositionConstraints> for ConstraintsResponse {
    fn from(constraints: &PositionConstraints) -> Self {
        Self {
            max_positions: constraints.max_positions,
            required_positions: constraints.required_positions.map(owned),
            exclusive_positions: constraints.exclusive_positions.map(owned),
        }
    }
}
