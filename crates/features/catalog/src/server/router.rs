use super::handlers;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use whub_kernel::server::ApiState;

/// `/catalog` routes; validation requires the [`crate::Catalog`] slice in the state.
pub fn catalog_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_product_types))
        .routes(routes!(handlers::get_product_type_handler))
        .routes(routes!(handlers::allowed_positions))
        .routes(routes!(handlers::constraint_info))
        .routes(routes!(handlers::position_allowed))
        .routes(routes!(handlers::filter_positions))
        .routes(routes!(handlers::validate_selection))
}
