use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertCategory {
    pub name: String,
    pub slug: String,
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Price in minor-unit-free currency amounts (ETB).
    pub price: i64,
    pub image: Option<String>,
    pub category_id: i32,
    pub featured: bool,
    pub payment_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertService {
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(default)]
    pub image: Option<String>,
    pub category_id: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub payment_instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category_id: Option<i32>,
    pub featured: Option<bool>,
    pub payment_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertPaymentMethod {
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentMethod {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertTestimonial {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub image: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// Business contact details shown on public pages. The table is treated as a
/// single-row table: reads return the first row or none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub id: i32,
    pub address: String,
    pub phone: String,
    pub telegram_link: String,
    pub telegram_username: String,
    pub facebook_link: String,
    pub instagram_link: String,
    pub twitter_link: String,
    pub show_social_icons: bool,
    pub weekday_hours: String,
    pub weekend_hours: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertContactInfo {
    pub address: String,
    pub phone: String,
    pub telegram_link: String,
    pub telegram_username: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub instagram_link: String,
    #[serde(default)]
    pub twitter_link: String,
    #[serde(default)]
    pub show_social_icons: bool,
    pub weekday_hours: String,
    pub weekend_hours: String,
    pub time_zone: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactInfo {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub telegram_link: Option<String>,
    pub telegram_username: Option<String>,
    pub facebook_link: Option<String>,
    pub instagram_link: Option<String>,
    pub twitter_link: Option<String>,
    pub show_social_icons: Option<bool>,
    pub weekday_hours: Option<String>,
    pub weekend_hours: Option<String>,
    pub time_zone: Option<String>,
}

/// Admin account record. No route authenticates against it today; the seed
/// binary stores an argon2 hash so plaintext never reaches the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Rejected,
}

impl OrderStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A buyer's submission against one service. Name, payment method name and
/// amount are snapshots taken at creation time; later catalog edits never
/// alter historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub service_id: i32,
    pub service_name: String,
    pub payment_method_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub status: OrderStatus,
    pub screenshot_url: String,
    pub customer_phone: String,
    pub customer_telegram: Option<String>,
    pub platform_username: Option<String>,
    pub target_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insertable order shape handed to the persistence port. Built by the order
/// workflow only, never deserialized from the wire.
#[derive(Debug, Clone)]
pub struct InsertOrder {
    pub service_id: i32,
    pub service_name: String,
    pub payment_method_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub status: OrderStatus,
    pub screenshot_url: String,
    pub customer_phone: String,
    pub customer_telegram: Option<String>,
    pub platform_username: Option<String>,
    pub target_url: Option<String>,
}
