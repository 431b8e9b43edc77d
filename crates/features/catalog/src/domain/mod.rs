//! Pure catalog logic: no I/O, no logging, no shared mutable state.

pub mod filter;
pub mod registry;
pub mod validator;

pub use filter::{
    PositionConstraintInfo, filter_positions_by_product_type, get_position_constraint_info,
    is_position_allowed,
};
pub use registry::{
    FindingKind, PositionConstraints, ProductType, ProductTypeOption, RegistryFinding,
    audit_product_types, audit_registry, get_allowed_positions, get_product_type,
    get_product_type_options, product_types,
};
pub use validator::{
    SelectionIssue, SelectionReport, validate_position_selection, validate_position_selection_with,
    validate_product_type_selection,
};
