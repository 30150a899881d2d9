use serde::Deserialize;
use utoipa::ToSchema;

/// Checkout submission. Legacy clients also send `serviceName`,
/// `paymentMethod`, `amount` and `status` snapshots; those are accepted for
/// compatibility but ignored: snapshots always derive from the resolved
/// catalog records and a new order always starts `pending`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub service_id: i32,
    pub payment_method_id: i32,
    /// External URL or inline base64 data URL, stored verbatim.
    pub screenshot_url: String,
    pub customer_phone: String,
    #[serde(default)]
    pub customer_telegram: Option<String>,
    #[serde(default)]
    pub platform_username: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}
