use whub_derive::api_model;

pub use crate::dto::{ConstraintsResponse, ProductTypeResponse};

#[api_model]
/// Candidate print positions
pub struct PositionsRequest {
    pub positions: Vec<String>,
}

#[api_model]
/// Result of a single position check
pub struct PositionAllowedResponse {
    pub allowed: bool,
}

#[api_model]
/// Validation options
pub struct ValidateQuery {
    /// `standalone` (default from config) or `mutual`
    pub exclusivity: Option<String>,
}
