//! Read-only aggregation over the catalog entities. Every call is a direct
//! passthrough to the persistence port; nothing is cached.

use crate::{
    error::{AppError, AppResult},
    models::{Category, ContactInfo, PaymentMethod, Service, Testimonial},
    storage::Storage,
};

pub async fn categories(store: &dyn Storage) -> AppResult<Vec<Category>> {
    store.categories().await
}

pub async fn category_by_slug(store: &dyn Storage, slug: &str) -> AppResult<Category> {
    store
        .category_by_slug(slug)
        .await?
        .ok_or(AppError::NotFound("Category not found"))
}

pub async fn services(store: &dyn Storage) -> AppResult<Vec<Service>> {
    store.services().await
}

pub async fn services_by_category(
    store: &dyn Storage,
    category_id: i32,
) -> AppResult<Vec<Service>> {
    store.services_by_category(category_id).await
}

pub async fn featured_services(store: &dyn Storage) -> AppResult<Vec<Service>> {
    store.featured_services().await
}

pub async fn service_by_id(store: &dyn Storage, id: i32) -> AppResult<Service> {
    store
        .service_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Service not found"))
}

pub async fn payment_methods(store: &dyn Storage) -> AppResult<Vec<PaymentMethod>> {
    store.payment_methods().await
}

pub async fn testimonials(store: &dyn Storage) -> AppResult<Vec<Testimonial>> {
    store.testimonials().await
}

pub async fn contact_info(store: &dyn Storage) -> AppResult<Option<ContactInfo>> {
    store.contact_info().await
}
