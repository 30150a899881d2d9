use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{
    Category, ContactInfo, InsertCategory, InsertContactInfo, InsertOrder, InsertPaymentMethod,
    InsertService, InsertTestimonial, InsertUser, Order, OrderStatus, PaymentMethod, Service,
    Testimonial, UpdateCategory, UpdateContactInfo, UpdatePaymentMethod, UpdateService,
    UpdateTestimonial, User,
};

pub mod database;
pub mod memory;

pub use database::DbStorage;
pub use memory::MemStorage;

/// Persistence port for the storefront. Absence is always signaled through
/// `Option`, never through an error; an `Err` means the storage transport
/// itself failed and maps to HTTP 500 at the boundary.
///
/// Both implementations assign fresh, per-entity monotonically increasing ids
/// on create and list records in id order.
#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn user_by_id(&self, id: i32) -> AppResult<Option<User>>;
    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn create_user(&self, user: InsertUser) -> AppResult<User>;

    // Categories
    async fn categories(&self) -> AppResult<Vec<Category>>;
    async fn category_by_id(&self, id: i32) -> AppResult<Option<Category>>;
    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<Category>>;
    async fn create_category(&self, category: InsertCategory) -> AppResult<Category>;
    async fn update_category(
        &self,
        id: i32,
        update: UpdateCategory,
    ) -> AppResult<Option<Category>>;
    async fn delete_category(&self, id: i32) -> AppResult<bool>;

    // Services
    async fn services(&self) -> AppResult<Vec<Service>>;
    async fn services_by_category(&self, category_id: i32) -> AppResult<Vec<Service>>;
    async fn featured_services(&self) -> AppResult<Vec<Service>>;
    async fn service_by_id(&self, id: i32) -> AppResult<Option<Service>>;
    async fn create_service(&self, service: InsertService) -> AppResult<Service>;
    async fn update_service(&self, id: i32, update: UpdateService) -> AppResult<Option<Service>>;
    async fn delete_service(&self, id: i32) -> AppResult<bool>;

    // Payment methods
    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>>;
    async fn payment_method_by_id(&self, id: i32) -> AppResult<Option<PaymentMethod>>;
    async fn create_payment_method(
        &self,
        method: InsertPaymentMethod,
    ) -> AppResult<PaymentMethod>;
    async fn update_payment_method(
        &self,
        id: i32,
        update: UpdatePaymentMethod,
    ) -> AppResult<Option<PaymentMethod>>;
    async fn delete_payment_method(&self, id: i32) -> AppResult<bool>;

    // Testimonials
    async fn testimonials(&self) -> AppResult<Vec<Testimonial>>;
    async fn testimonial_by_id(&self, id: i32) -> AppResult<Option<Testimonial>>;
    async fn create_testimonial(&self, testimonial: InsertTestimonial) -> AppResult<Testimonial>;
    async fn update_testimonial(
        &self,
        id: i32,
        update: UpdateTestimonial,
    ) -> AppResult<Option<Testimonial>>;
    async fn delete_testimonial(&self, id: i32) -> AppResult<bool>;

    // Contact info (single-row table: reads return the first row or none)
    async fn contact_info(&self) -> AppResult<Option<ContactInfo>>;
    async fn create_contact_info(&self, info: InsertContactInfo) -> AppResult<ContactInfo>;
    async fn update_contact_info(
        &self,
        id: i32,
        update: UpdateContactInfo,
    ) -> AppResult<Option<ContactInfo>>;

    // Orders
    async fn orders(&self) -> AppResult<Vec<Order>>;
    async fn order_by_id(&self, id: i32) -> AppResult<Option<Order>>;
    /// Stamps `created_at` with the current server time.
    async fn create_order(&self, order: InsertOrder) -> AppResult<Order>;
    async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> AppResult<Option<Order>>;
}
