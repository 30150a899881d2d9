use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    models::{InsertOrder, Order, OrderStatus},
    services::order_rules::{self, SubmittedFields},
    storage::Storage,
};

/// Validate a checkout submission and persist the resulting order.
///
/// The stored order snapshots the service name, the payment method name and
/// the price at submission time; later catalog edits never touch it. Every
/// call creates a new order row; identical submissions are not merged.
pub async fn submit_order(store: &dyn Storage, payload: CreateOrderRequest) -> AppResult<Order> {
    let service = store
        .service_by_id(payload.service_id)
        .await?
        .ok_or(AppError::NotFound("Service not found"))?;
    let method = store
        .payment_method_by_id(payload.payment_method_id)
        .await?
        .ok_or(AppError::NotFound("Payment method not found"))?;

    let requirements = order_rules::requirements_for(&service.name, service.category_id);
    let missing = order_rules::missing_fields(
        requirements,
        &SubmittedFields {
            customer_phone: &payload.customer_phone,
            screenshot_url: &payload.screenshot_url,
            platform_username: payload.platform_username.as_deref(),
            target_url: payload.target_url.as_deref(),
        },
    );
    if !missing.is_empty() {
        return Err(AppError::validation("Invalid order data", missing));
    }

    let order = store
        .create_order(InsertOrder {
            service_id: service.id,
            service_name: service.name,
            payment_method_id: method.id,
            payment_method: method.name,
            amount: service.price,
            status: OrderStatus::Pending,
            screenshot_url: payload.screenshot_url,
            customer_phone: payload.customer_phone,
            customer_telegram: none_if_blank(payload.customer_telegram),
            platform_username: none_if_blank(payload.platform_username),
            target_url: none_if_blank(payload.target_url),
        })
        .await?;

    tracing::info!(
        order_id = order.id,
        service_id = order.service_id,
        amount = order.amount,
        "order submitted"
    );
    Ok(order)
}

pub async fn list_orders(store: &dyn Storage) -> AppResult<Vec<Order>> {
    store.orders().await
}

pub async fn get_order(store: &dyn Storage, id: i32) -> AppResult<Order> {
    store
        .order_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Order not found"))
}

/// Move an order to a new status. Any status may move to any other status:
/// the admin UI only offers pending -> approved/rejected, but the API keeps
/// the permissive behavior and re-applying the same status is a no-op.
pub async fn set_order_status(store: &dyn Storage, id: i32, status: &str) -> AppResult<Order> {
    let status = OrderStatus::parse(status)
        .ok_or_else(|| AppError::BadRequest("Invalid status value".to_string()))?;
    let order = store
        .update_order_status(id, status)
        .await?
        .ok_or(AppError::NotFound("Order not found"))?;
    tracing::info!(order_id = order.id, status = %order.status, "order status updated");
    Ok(order)
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
