use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::{AppError, AppResult},
    models::ContactInfo,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_contact_info))
}

#[utoipa::path(
    get,
    path = "/api/contact-info",
    responses(
        (status = 200, description = "Business contact details, or an empty object when none are configured", body = ContactInfo)
    ),
    tag = "Contact Info"
)]
pub async fn get_contact_info(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let info = catalog_service::contact_info(state.store.as_ref()).await?;
    let body = match info {
        Some(info) => serde_json::to_value(info).map_err(|e| AppError::Internal(e.into()))?,
        None => serde_json::json!({}),
    };
    Ok(Json(body))
}
