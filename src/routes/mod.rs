use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod categories;
pub mod contact_info;
pub mod doc;
pub mod health;
pub mod orders;
pub mod payment_methods;
pub mod services;
pub mod testimonials;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/services", services::router())
        .nest("/payment-methods", payment_methods::router())
        .nest("/testimonials", testimonials::router())
        .nest("/contact-info", contact_info::router())
        .nest("/orders", orders::router())
        .nest("/admin", admin::router())
}
