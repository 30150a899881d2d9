//! Admin catalog mutations. Payloads are validated here so the workflow is
//! safe to call directly from tests, independent of the HTTP layer.

use crate::{
    error::{AppError, AppResult},
    models::{
        Category, ContactInfo, InsertCategory, InsertPaymentMethod, InsertService,
        InsertTestimonial, PaymentMethod, Service, Testimonial, UpdateCategory,
        UpdateContactInfo, UpdatePaymentMethod, UpdateService, UpdateTestimonial,
    },
    storage::Storage,
};

fn slug_is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

async fn check_slug_free(
    store: &dyn Storage,
    slug: &str,
    allow_id: Option<i32>,
) -> AppResult<Vec<String>> {
    let mut errors = Vec::new();
    if !slug_is_valid(slug) {
        errors.push("slug must contain only lowercase letters, digits and dashes".to_string());
    } else if let Some(existing) = store.category_by_slug(slug).await? {
        if allow_id != Some(existing.id) {
            errors.push("slug is already in use".to_string());
        }
    }
    Ok(errors)
}

pub async fn create_category(
    store: &dyn Storage,
    payload: InsertCategory,
) -> AppResult<Category> {
    let mut errors = Vec::new();
    if payload.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    errors.extend(check_slug_free(store, &payload.slug, None).await?);
    if !errors.is_empty() {
        return Err(AppError::validation("Invalid category data", errors));
    }
    store.create_category(payload).await
}

pub async fn update_category(
    store: &dyn Storage,
    id: i32,
    payload: UpdateCategory,
) -> AppResult<Category> {
    let mut errors = Vec::new();
    if payload.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        errors.push("name must not be empty".to_string());
    }
    if let Some(slug) = payload.slug.as_deref() {
        errors.extend(check_slug_free(store, slug, Some(id)).await?);
    }
    if !errors.is_empty() {
        return Err(AppError::validation("Invalid category data", errors));
    }
    store
        .update_category(id, payload)
        .await?
        .ok_or(AppError::NotFound("Category not found"))
}

/// Deleting a category does not cascade: services keep their dangling
/// category id and stay retrievable by id.
pub async fn delete_category(store: &dyn Storage, id: i32) -> AppResult<()> {
    if store.delete_category(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Category not found"))
    }
}

fn validate_service_fields(name: Option<&str>, price: Option<i64>) -> Vec<String> {
    let mut errors = Vec::new();
    if name.is_some_and(|n| n.trim().is_empty()) {
        errors.push("name must not be empty".to_string());
    }
    if price.is_some_and(|p| p <= 0) {
        errors.push("price must be positive".to_string());
    }
    errors
}

pub async fn create_service(store: &dyn Storage, payload: InsertService) -> AppResult<Service> {
    let errors = validate_service_fields(Some(&payload.name), Some(payload.price));
    if !errors.is_empty() {
        return Err(AppError::validation("Invalid service data", errors));
    }
    store.create_service(payload).await
}

pub async fn update_service(
    store: &dyn Storage,
    id: i32,
    payload: UpdateService,
) -> AppResult<Service> {
    let errors = validate_service_fields(payload.name.as_deref(), payload.price);
    if !errors.is_empty() {
        return Err(AppError::validation("Invalid service data", errors));
    }
    store
        .update_service(id, payload)
        .await?
        .ok_or(AppError::NotFound("Service not found"))
}

pub async fn delete_service(store: &dyn Storage, id: i32) -> AppResult<()> {
    if store.delete_service(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Service not found"))
    }
}

pub async fn create_payment_method(
    store: &dyn Storage,
    payload: InsertPaymentMethod,
) -> AppResult<PaymentMethod> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation(
            "Invalid payment method data",
            vec!["name must not be empty".to_string()],
        ));
    }
    store.create_payment_method(payload).await
}

pub async fn update_payment_method(
    store: &dyn Storage,
    id: i32,
    payload: UpdatePaymentMethod,
) -> AppResult<PaymentMethod> {
    if payload.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::validation(
            "Invalid payment method data",
            vec!["name must not be empty".to_string()],
        ));
    }
    store
        .update_payment_method(id, payload)
        .await?
        .ok_or(AppError::NotFound("Payment method not found"))
}

pub async fn delete_payment_method(store: &dyn Storage, id: i32) -> AppResult<()> {
    if store.delete_payment_method(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Payment method not found"))
    }
}

fn rating_in_range(rating: i32) -> bool {
    (1..=5).contains(&rating)
}

pub async fn create_testimonial(
    store: &dyn Storage,
    payload: InsertTestimonial,
) -> AppResult<Testimonial> {
    if !rating_in_range(payload.rating) {
        return Err(AppError::validation(
            "Invalid testimonial data",
            vec!["rating must be between 1 and 5".to_string()],
        ));
    }
    store.create_testimonial(payload).await
}

pub async fn update_testimonial(
    store: &dyn Storage,
    id: i32,
    payload: UpdateTestimonial,
) -> AppResult<Testimonial> {
    if payload.rating.is_some_and(|r| !rating_in_range(r)) {
        return Err(AppError::validation(
            "Invalid testimonial data",
            vec!["rating must be between 1 and 5".to_string()],
        ));
    }
    store
        .update_testimonial(id, payload)
        .await?
        .ok_or(AppError::NotFound("Testimonial not found"))
}

pub async fn delete_testimonial(store: &dyn Storage, id: i32) -> AppResult<()> {
    if store.delete_testimonial(id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Testimonial not found"))
    }
}

pub async fn update_contact_info(
    store: &dyn Storage,
    id: i32,
    payload: UpdateContactInfo,
) -> AppResult<ContactInfo> {
    store
        .update_contact_info(id, payload)
        .await?
        .ok_or(AppError::NotFound("Contact information not found"))
}
