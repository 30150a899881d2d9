use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::CreateOrderRequest,
    models::{
        Category, ContactInfo, InsertCategory, InsertPaymentMethod, InsertService,
        InsertTestimonial, Order, OrderStatus, PaymentMethod, Service, Testimonial,
        UpdateCategory, UpdateContactInfo, UpdatePaymentMethod, UpdateService, UpdateTestimonial,
    },
    routes::{admin, categories, contact_info, health, orders, payment_methods, services, testimonials},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category_by_slug,
        services::list_services,
        services::list_featured_services,
        services::list_services_by_category,
        services::get_service,
        payment_methods::list_payment_methods,
        testimonials::list_testimonials,
        contact_info::get_contact_info,
        orders::create_order,
        admin::list_all_orders,
        admin::get_order,
        admin::update_order_status,
        admin::create_category,
        admin::update_category,
        admin::delete_category,
        admin::create_service,
        admin::update_service,
        admin::delete_service,
        admin::create_payment_method,
        admin::update_payment_method,
        admin::delete_payment_method,
        admin::create_testimonial,
        admin::update_testimonial,
        admin::delete_testimonial,
        admin::update_contact_info,
    ),
    components(
        schemas(
            Category,
            InsertCategory,
            UpdateCategory,
            Service,
            InsertService,
            UpdateService,
            PaymentMethod,
            InsertPaymentMethod,
            UpdatePaymentMethod,
            Testimonial,
            InsertTestimonial,
            UpdateTestimonial,
            ContactInfo,
            UpdateContactInfo,
            Order,
            OrderStatus,
            CreateOrderRequest,
            admin::UpdateOrderStatusRequest,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category browsing"),
        (name = "Services", description = "Service catalog"),
        (name = "Payment Methods", description = "Manual payment channels"),
        (name = "Testimonials", description = "Customer testimonials"),
        (name = "Contact Info", description = "Business contact details"),
        (name = "Orders", description = "Checkout"),
        (name = "Admin", description = "Admin back office (unauthenticated)"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
