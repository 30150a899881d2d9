//! Admin back office routes. No authentication is enforced anywhere on this
//! router; a production deployment needs an auth layer in front of
//! `/api/admin`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppJson, AppResult},
    models::{
        Category, ContactInfo, InsertCategory, InsertPaymentMethod, InsertService,
        InsertTestimonial, Order, PaymentMethod, Service, Testimonial, UpdateCategory,
        UpdateContactInfo, UpdatePaymentMethod, UpdateService, UpdateTestimonial,
    },
    services::{admin_service, order_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}/status", put(update_order_status))
        .route("/categories", post(create_category))
        .route("/categories/{id}", put(update_category))
        .route("/categories/{id}", delete(delete_category))
        .route("/services", post(create_service))
        .route("/services/{id}", put(update_service))
        .route("/services/{id}", delete(delete_service))
        .route("/payment-methods", post(create_payment_method))
        .route("/payment-methods/{id}", put(update_payment_method))
        .route("/payment-methods/{id}", delete(delete_payment_method))
        .route("/testimonials", post(create_testimonial))
        .route("/testimonials/{id}", put(update_testimonial))
        .route("/testimonials/{id}", delete(delete_testimonial))
        .route("/contact-info/{id}", put(update_contact_info))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "List all orders", body = [Order])
    ),
    tag = "Admin"
)]
pub async fn list_all_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(state.store.as_ref()).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "Admin"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(state.store.as_ref(), id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = Order),
        (status = 400, description = "Invalid status value"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let order =
        order_service::set_order_status(state.store.as_ref(), id, &payload.status).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/api/admin/categories",
    request_body = InsertCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid category data"),
    ),
    tag = "Admin"
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InsertCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = admin_service::create_category(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    put,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Invalid category data"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Admin"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = admin_service::update_category(state.store.as_ref(), id, payload).await?;
    Ok(Json(category))
}

#[utoipa::path(
    delete,
    path = "/api/admin/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Admin"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    admin_service::delete_category(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/services",
    request_body = InsertService,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Invalid service data"),
    ),
    tag = "Admin"
)]
pub async fn create_service(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InsertService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    let service = admin_service::create_service(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Invalid service data"),
        (status = 404, description = "Service not found"),
    ),
    tag = "Admin"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateService>,
) -> AppResult<Json<Service>> {
    let service = admin_service::update_service(state.store.as_ref(), id, payload).await?;
    Ok(Json(service))
}

#[utoipa::path(
    delete,
    path = "/api/admin/services/{id}",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found"),
    ),
    tag = "Admin"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    admin_service::delete_service(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/payment-methods",
    request_body = InsertPaymentMethod,
    responses(
        (status = 201, description = "Payment method created", body = PaymentMethod),
        (status = 400, description = "Invalid payment method data"),
    ),
    tag = "Admin"
)]
pub async fn create_payment_method(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InsertPaymentMethod>,
) -> AppResult<(StatusCode, Json<PaymentMethod>)> {
    let method = admin_service::create_payment_method(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(method)))
}

#[utoipa::path(
    put,
    path = "/api/admin/payment-methods/{id}",
    params(
        ("id" = i32, Path, description = "Payment method ID")
    ),
    request_body = UpdatePaymentMethod,
    responses(
        (status = 200, description = "Payment method updated", body = PaymentMethod),
        (status = 400, description = "Invalid payment method data"),
        (status = 404, description = "Payment method not found"),
    ),
    tag = "Admin"
)]
pub async fn update_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePaymentMethod>,
) -> AppResult<Json<PaymentMethod>> {
    let method = admin_service::update_payment_method(state.store.as_ref(), id, payload).await?;
    Ok(Json(method))
}

#[utoipa::path(
    delete,
    path = "/api/admin/payment-methods/{id}",
    params(
        ("id" = i32, Path, description = "Payment method ID")
    ),
    responses(
        (status = 204, description = "Payment method deleted"),
        (status = 404, description = "Payment method not found"),
    ),
    tag = "Admin"
)]
pub async fn delete_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    admin_service::delete_payment_method(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/admin/testimonials",
    request_body = InsertTestimonial,
    responses(
        (status = 201, description = "Testimonial created", body = Testimonial),
        (status = 400, description = "Invalid testimonial data"),
    ),
    tag = "Admin"
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    AppJson(payload): AppJson<InsertTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = admin_service::create_testimonial(state.store.as_ref(), payload).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

#[utoipa::path(
    put,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    request_body = UpdateTestimonial,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial),
        (status = 400, description = "Invalid testimonial data"),
        (status = 404, description = "Testimonial not found"),
    ),
    tag = "Admin"
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = admin_service::update_testimonial(state.store.as_ref(), id, payload).await?;
    Ok(Json(testimonial))
}

#[utoipa::path(
    delete,
    path = "/api/admin/testimonials/{id}",
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 204, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found"),
    ),
    tag = "Admin"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    admin_service::delete_testimonial(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/admin/contact-info/{id}",
    params(
        ("id" = i32, Path, description = "Contact info ID")
    ),
    request_body = UpdateContactInfo,
    responses(
        (status = 200, description = "Contact information updated", body = ContactInfo),
        (status = 400, description = "Invalid contact information data"),
        (status = 404, description = "Contact information not found"),
    ),
    tag = "Admin"
)]
pub async fn update_contact_info(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateContactInfo>,
) -> AppResult<Json<ContactInfo>> {
    let info = admin_service::update_contact_info(state.store.as_ref(), id, payload).await?;
    Ok(Json(info))
}
