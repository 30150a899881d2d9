use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{
    Category, ContactInfo, InsertCategory, InsertContactInfo, InsertOrder, InsertPaymentMethod,
    InsertService, InsertTestimonial, InsertUser, Order, OrderStatus, PaymentMethod, Service,
    Testimonial, UpdateCategory, UpdateContactInfo, UpdatePaymentMethod, UpdateService,
    UpdateTestimonial, User,
};
use crate::seed;

use super::Storage;

/// Map-backed store. `BTreeMap` keyed by the monotonically increasing id
/// keeps listing in insertion order. Construct one instance per server (or
/// per test); it is never a process-wide singleton.
#[derive(Default)]
pub struct MemStorage {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    categories: BTreeMap<i32, Category>,
    services: BTreeMap<i32, Service>,
    payment_methods: BTreeMap<i32, PaymentMethod>,
    testimonials: BTreeMap<i32, Testimonial>,
    contact_info: BTreeMap<i32, ContactInfo>,
    orders: BTreeMap<i32, Order>,

    next_user_id: i32,
    next_category_id: i32,
    next_service_id: i32,
    next_payment_method_id: i32,
    next_testimonial_id: i32,
    next_contact_info_id: i32,
    next_order_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl Tables {
    fn insert_user(&mut self, user: InsertUser) -> User {
        let id = next_id(&mut self.next_user_id);
        let user = User {
            id,
            username: user.username,
            password: user.password,
            is_admin: user.is_admin,
        };
        self.users.insert(id, user.clone());
        user
    }

    fn insert_category(&mut self, category: InsertCategory) -> Category {
        let id = next_id(&mut self.next_category_id);
        let category = Category {
            id,
            name: category.name,
            slug: category.slug,
            icon: category.icon,
            description: category.description,
        };
        self.categories.insert(id, category.clone());
        category
    }

    fn insert_service(&mut self, service: InsertService) -> Service {
        let id = next_id(&mut self.next_service_id);
        let service = Service {
            id,
            name: service.name,
            description: service.description,
            price: service.price,
            image: service.image,
            category_id: service.category_id,
            featured: service.featured,
            payment_instructions: service.payment_instructions,
        };
        self.services.insert(id, service.clone());
        service
    }

    fn insert_payment_method(&mut self, method: InsertPaymentMethod) -> PaymentMethod {
        let id = next_id(&mut self.next_payment_method_id);
        let method = PaymentMethod {
            id,
            name: method.name,
            icon: method.icon,
            description: method.description,
            instructions: method.instructions,
        };
        self.payment_methods.insert(id, method.clone());
        method
    }

    fn insert_testimonial(&mut self, testimonial: InsertTestimonial) -> Testimonial {
        let id = next_id(&mut self.next_testimonial_id);
        let testimonial = Testimonial {
            id,
            name: testimonial.name,
            image: testimonial.image,
            rating: testimonial.rating,
            comment: testimonial.comment,
        };
        self.testimonials.insert(id, testimonial.clone());
        testimonial
    }

    fn insert_contact_info(&mut self, info: InsertContactInfo) -> ContactInfo {
        let id = next_id(&mut self.next_contact_info_id);
        let info = ContactInfo {
            id,
            address: info.address,
            phone: info.phone,
            telegram_link: info.telegram_link,
            telegram_username: info.telegram_username,
            facebook_link: info.facebook_link,
            instagram_link: info.instagram_link,
            twitter_link: info.twitter_link,
            show_social_icons: info.show_social_icons,
            weekday_hours: info.weekday_hours,
            weekend_hours: info.weekend_hours,
            time_zone: info.time_zone,
        };
        self.contact_info.insert(id, info.clone());
        info
    }

    fn insert_order(&mut self, order: InsertOrder) -> Order {
        let id = next_id(&mut self.next_order_id);
        let order = Order {
            id,
            service_id: order.service_id,
            service_name: order.service_name,
            payment_method_id: order.payment_method_id,
            payment_method: order.payment_method,
            amount: order.amount,
            status: order.status,
            screenshot_url: order.screenshot_url,
            customer_phone: order.customer_phone,
            customer_telegram: order.customer_telegram,
            platform_username: order.platform_username,
            target_url: order.target_url,
            created_at: Utc::now(),
        };
        self.orders.insert(id, order.clone());
        order
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the storefront catalog: categories, services,
    /// payment methods, testimonials, contact details and the admin user.
    pub fn seeded() -> Self {
        let mut tables = Tables::default();
        for category in seed::categories() {
            tables.insert_category(category);
        }
        for method in seed::payment_methods() {
            tables.insert_payment_method(method);
        }
        for service in seed::services() {
            tables.insert_service(service);
        }
        for testimonial in seed::testimonials() {
            tables.insert_testimonial(testimonial);
        }
        tables.insert_contact_info(seed::contact_info());
        tables.insert_user(seed::admin_user());
        Self {
            inner: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.inner.read().await;
        Ok(tables
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: InsertUser) -> AppResult<User> {
        Ok(self.inner.write().await.insert_user(user))
    }

    async fn categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn category_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let tables = self.inner.read().await;
        Ok(tables
            .categories
            .values()
            .find(|category| category.slug == slug)
            .cloned())
    }

    async fn create_category(&self, category: InsertCategory) -> AppResult<Category> {
        Ok(self.inner.write().await.insert_category(category))
    }

    async fn update_category(
        &self,
        id: i32,
        update: UpdateCategory,
    ) -> AppResult<Option<Category>> {
        let mut tables = self.inner.write().await;
        let Some(category) = tables.categories.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            category.name = name;
        }
        if let Some(slug) = update.slug {
            category.slug = slug;
        }
        if let Some(icon) = update.icon {
            category.icon = icon;
        }
        if let Some(description) = update.description {
            category.description = Some(description);
        }
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: i32) -> AppResult<bool> {
        Ok(self.inner.write().await.categories.remove(&id).is_some())
    }

    async fn services(&self) -> AppResult<Vec<Service>> {
        Ok(self.inner.read().await.services.values().cloned().collect())
    }

    async fn services_by_category(&self, category_id: i32) -> AppResult<Vec<Service>> {
        let tables = self.inner.read().await;
        Ok(tables
            .services
            .values()
            .filter(|service| service.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn featured_services(&self) -> AppResult<Vec<Service>> {
        let tables = self.inner.read().await;
        Ok(tables
            .services
            .values()
            .filter(|service| service.featured)
            .cloned()
            .collect())
    }

    async fn service_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        Ok(self.inner.read().await.services.get(&id).cloned())
    }

    async fn create_service(&self, service: InsertService) -> AppResult<Service> {
        Ok(self.inner.write().await.insert_service(service))
    }

    async fn update_service(&self, id: i32, update: UpdateService) -> AppResult<Option<Service>> {
        let mut tables = self.inner.write().await;
        let Some(service) = tables.services.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            service.name = name;
        }
        if let Some(description) = update.description {
            service.description = description;
        }
        if let Some(price) = update.price {
            service.price = price;
        }
        if let Some(image) = update.image {
            service.image = Some(image);
        }
        if let Some(category_id) = update.category_id {
            service.category_id = category_id;
        }
        if let Some(featured) = update.featured {
            service.featured = featured;
        }
        if let Some(payment_instructions) = update.payment_instructions {
            service.payment_instructions = Some(payment_instructions);
        }
        Ok(Some(service.clone()))
    }

    async fn delete_service(&self, id: i32) -> AppResult<bool> {
        Ok(self.inner.write().await.services.remove(&id).is_some())
    }

    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>> {
        Ok(self
            .inner
            .read()
            .await
            .payment_methods
            .values()
            .cloned()
            .collect())
    }

    async fn payment_method_by_id(&self, id: i32) -> AppResult<Option<PaymentMethod>> {
        Ok(self.inner.read().await.payment_methods.get(&id).cloned())
    }

    async fn create_payment_method(
        &self,
        method: InsertPaymentMethod,
    ) -> AppResult<PaymentMethod> {
        Ok(self.inner.write().await.insert_payment_method(method))
    }

    async fn update_payment_method(
        &self,
        id: i32,
        update: UpdatePaymentMethod,
    ) -> AppResult<Option<PaymentMethod>> {
        let mut tables = self.inner.write().await;
        let Some(method) = tables.payment_methods.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            method.name = name;
        }
        if let Some(icon) = update.icon {
            method.icon = icon;
        }
        if let Some(description) = update.description {
            method.description = Some(description);
        }
        if let Some(instructions) = update.instructions {
            method.instructions = Some(instructions);
        }
        Ok(Some(method.clone()))
    }

    async fn delete_payment_method(&self, id: i32) -> AppResult<bool> {
        Ok(self
            .inner
            .write()
            .await
            .payment_methods
            .remove(&id)
            .is_some())
    }

    async fn testimonials(&self) -> AppResult<Vec<Testimonial>> {
        Ok(self
            .inner
            .read()
            .await
            .testimonials
            .values()
            .cloned()
            .collect())
    }

    async fn testimonial_by_id(&self, id: i32) -> AppResult<Option<Testimonial>> {
        Ok(self.inner.read().await.testimonials.get(&id).cloned())
    }

    async fn create_testimonial(&self, testimonial: InsertTestimonial) -> AppResult<Testimonial> {
        Ok(self.inner.write().await.insert_testimonial(testimonial))
    }

    async fn update_testimonial(
        &self,
        id: i32,
        update: UpdateTestimonial,
    ) -> AppResult<Option<Testimonial>> {
        let mut tables = self.inner.write().await;
        let Some(testimonial) = tables.testimonials.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            testimonial.name = name;
        }
        if let Some(image) = update.image {
            testimonial.image = Some(image);
        }
        if let Some(rating) = update.rating {
            testimonial.rating = rating;
        }
        if let Some(comment) = update.comment {
            testimonial.comment = comment;
        }
        Ok(Some(testimonial.clone()))
    }

    async fn delete_testimonial(&self, id: i32) -> AppResult<bool> {
        Ok(self.inner.write().await.testimonials.remove(&id).is_some())
    }

    async fn contact_info(&self) -> AppResult<Option<ContactInfo>> {
        Ok(self
            .inner
            .read()
            .await
            .contact_info
            .values()
            .next()
            .cloned())
    }

    async fn create_contact_info(&self, info: InsertContactInfo) -> AppResult<ContactInfo> {
        Ok(self.inner.write().await.insert_contact_info(info))
    }

    async fn update_contact_info(
        &self,
        id: i32,
        update: UpdateContactInfo,
    ) -> AppResult<Option<ContactInfo>> {
        let mut tables = self.inner.write().await;
        let Some(info) = tables.contact_info.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(address) = update.address {
            info.address = address;
        }
        if let Some(phone) = update.phone {
            info.phone = phone;
        }
        if let Some(telegram_link) = update.telegram_link {
            info.telegram_link = telegram_link;
        }
        if let Some(telegram_username) = update.telegram_username {
            info.telegram_username = telegram_username;
        }
        if let Some(facebook_link) = update.facebook_link {
            info.facebook_link = facebook_link;
        }
        if let Some(instagram_link) = update.instagram_link {
            info.instagram_link = instagram_link;
        }
        if let Some(twitter_link) = update.twitter_link {
            info.twitter_link = twitter_link;
        }
        if let Some(show_social_icons) = update.show_social_icons {
            info.show_social_icons = show_social_icons;
        }
        if let Some(weekday_hours) = update.weekday_hours {
            info.weekday_hours = weekday_hours;
        }
        if let Some(weekend_hours) = update.weekend_hours {
            info.weekend_hours = weekend_hours;
        }
        if let Some(time_zone) = update.time_zone {
            info.time_zone = time_zone;
        }
        Ok(Some(info.clone()))
    }

    async fn orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.inner.read().await.orders.values().cloned().collect())
    }

    async fn order_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        Ok(self.inner.read().await.orders.get(&id).cloned())
    }

    async fn create_order(&self, order: InsertOrder) -> AppResult<Order> {
        Ok(self.inner.write().await.insert_order(order))
    }

    async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> AppResult<Option<Order>> {
        let mut tables = self.inner.write().await;
        let Some(order) = tables.orders.get_mut(&id) else {
            return Ok(None);
        };
        order.status = status;
        Ok(Some(order.clone()))
    }
}
