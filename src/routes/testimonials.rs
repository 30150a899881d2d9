use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::Testimonial,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_testimonials))
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "List testimonials", body = [Testimonial])
    ),
    tag = "Testimonials"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = catalog_service::testimonials(state.store.as_ref()).await?;
    Ok(Json(testimonials))
}
