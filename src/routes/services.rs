use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::Service,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/featured", get(list_featured_services))
        .route("/category/{category_id}", get(list_services_by_category))
        .route("/{id}", get(get_service))
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "List services", body = [Service])
    ),
    tag = "Services"
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = catalog_service::services(state.store.as_ref()).await?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/services/featured",
    responses(
        (status = 200, description = "List featured services", body = [Service])
    ),
    tag = "Services"
)]
pub async fn list_featured_services(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Service>>> {
    let services = catalog_service::featured_services(state.store.as_ref()).await?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/services/category/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "List services in a category", body = [Service]),
        (status = 400, description = "Invalid category ID"),
    ),
    tag = "Services"
)]
pub async fn list_services_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Vec<Service>>> {
    let services =
        catalog_service::services_by_category(state.store.as_ref(), category_id).await?;
    Ok(Json(services))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Get service", body = Service),
        (status = 404, description = "Service not found"),
    ),
    tag = "Services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Service>> {
    let service = catalog_service::service_by_id(state.store.as_ref(), id).await?;
    Ok(Json(service))
}
