use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult,
    models::PaymentMethod,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_payment_methods))
}

#[utoipa::path(
    get,
    path = "/api/payment-methods",
    responses(
        (status = 200, description = "List payment methods", body = [PaymentMethod])
    ),
    tag = "Payment Methods"
)]
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PaymentMethod>>> {
    let methods = catalog_service::payment_methods(state.store.as_ref()).await?;
    Ok(Json(methods))
}
