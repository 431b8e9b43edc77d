use super::dto::{PositionAllowedResponse, PositionsRequest, ProductTypeResponse, ValidateQuery};
use crate::domain::{
    PositionConstraintInfo, ProductTypeOption, SelectionReport, filter_positions_by_product_type,
    get_allowed_positions, get_position_constraint_info, get_product_type, get_product_type_options,
    is_position_allowed,
};
use crate::{Catalog, CatalogError};
use axum::Json;
use axum::extract::{Path, Query, State};
use whub_derive::api_handler;
use whub_kernel::domain::config::ExclusivityMode;
use whub_kernel::domain::constants::CATALOG_TAG;
use whub_kernel::server::ApiState;

#[api_handler(
    get,
    path = "/catalog/product-types",
    responses((status = OK, description = "Product types in registry order", body = Vec<ProductTypeOption>)),
    tag = CATALOG_TAG,
)]
pub(super) async fn list_product_types() -> Json<Vec<ProductTypeOption>> {
    Json(get_product_type_options())
}

#[api_handler(
    get,
    path = "/catalog/product-types/{id}",
    params(("id" = String, Path, description = "Product type id")),
    responses(
        (status = OK, description = "Product type", body = ProductTypeResponse),
        (status = NOT_FOUND, description = "Unknown product type"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn get_product_type_handler(
    Path(id): Path<String>,
) -> Result<Json<ProductTypeResponse>, CatalogError> {
    get_product_type(&id).map(|product_type| Json(product_type.into())).ok_or_else(|| {
        CatalogError::NotFound { message: id.into(), context: Some("product type".into()) }
    })
}

#[api_handler(
    get,
    path = "/catalog/product-types/{id}/positions",
    params(("id" = String, Path, description = "Product type id")),
    responses((status = OK, description = "Allowed positions, empty for unknown product types", body = Vec<String>)),
    tag = CATALOG_TAG,
)]
pub(super) async fn allowed_positions(Path(id): Path<String>) -> Json<Vec<String>> {
    Json(get_allowed_positions(&id).iter().map(|&p| p.to_owned()).collect())
}

#[api_handler(
    get,
    path = "/catalog/product-types/{id}/constraints",
    params(("id" = String, Path, description = "Product type id")),
    responses((status = OK, description = "Constraint summary", body = PositionConstraintInfo)),
    tag = CATALOG_TAG,
)]
pub(super) async fn constraint_info(Path(id): Path<String>) -> Json<PositionConstraintInfo> {
    Json(get_position_constraint_info(&id))
}

#[api_handler(
    get,
    path = "/catalog/product-types/{id}/positions/{position}",
    params(
        ("id" = String, Path, description = "Product type id"),
        ("position" = String, Path, description = "Position name, case-insensitive"),
    ),
    responses((status = OK, description = "Whether the position is allowed", body = PositionAllowedResponse)),
    tag = CATALOG_TAG,
)]
pub(super) async fn position_allowed(
    Path((id, position)): Path<(String, String)>,
) -> Json<PositionAllowedResponse> {
    Json(PositionAllowedResponse { allowed: is_position_allowed(&id, &position) })
}

#[api_handler(
    post,
    path = "/catalog/product-types/{id}/positions/filter",
    params(("id" = String, Path, description = "Product type id")),
    request_body = PositionsRequest,
    responses((status = OK, description = "Allowed subset in input order", body = Vec<String>)),
    tag = CATALOG_TAG,
)]
pub(super) async fn filter_positions(
    Path(id): Path<String>,
    Json(request): Json<PositionsRequest>,
) -> Json<Vec<String>> {
    Json(filter_positions_by_product_type(&request.positions, &id))
}

#[api_handler(
    post,
    path = "/catalog/product-types/{id}/positions/validate",
    params(
        ("id" = String, Path, description = "Product type id"),
        ("exclusivity" = Option<String>, Query, description = "`standalone` or `mutual`; defaults to the configured mode"),
    ),
    request_body = PositionsRequest,
    responses(
        (status = OK, description = "Validation report; invalid selections are not HTTP errors", body = SelectionReport),
        (status = BAD_REQUEST, description = "Unknown exclusivity mode"),
    ),
    tag = CATALOG_TAG,
)]
pub(super) async fn validate_selection(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Query(query): Query<ValidateQuery>,
    Json(request): Json<PositionsRequest>,
) -> Result<Json<SelectionReport>, CatalogError> {
    let catalog = state.try_get_slice::<Catalog>().map_err(|e| CatalogError::Internal {
        message: e.to_string().into(),
        context: Some("Catalog slice is not registered".into()),
    })?;

    let mode = query
        .exclusivity
        .as_deref()
        .map(str::parse::<ExclusivityMode>)
        .transpose()
        .map_err(|e| CatalogError::InvalidInput { message: e.to_string().into(), context: None })?;

    let report = catalog.validate(&id, &request.positions, mode);
    tracing::debug!(
        product_type = %id,
        selected = request.positions.len(),
        valid = report.is_valid,
        warnings = report.warnings.len(),
        "Validated position selection"
    );

    Ok(Json(report))
}
