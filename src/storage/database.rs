use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::db::OrmConn;
use crate::entity::{
    categories, contact_info, orders, payment_methods, services, testimonials, users,
};
use crate::error::{AppError, AppResult};
use crate::models::{
    Category, ContactInfo, InsertCategory, InsertContactInfo, InsertOrder, InsertPaymentMethod,
    InsertService, InsertTestimonial, InsertUser, Order, OrderStatus, PaymentMethod, Service,
    Testimonial, UpdateCategory, UpdateContactInfo, UpdatePaymentMethod, UpdateService,
    UpdateTestimonial, User,
};

use super::Storage;

/// SeaORM-backed store. Fresh ids come from the serial columns; per-record
/// write atomicity comes from the database.
pub struct DbStorage {
    conn: OrmConn,
}

impl DbStorage {
    pub fn new(conn: OrmConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Storage for DbStorage {
    async fn user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = users::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(user.map(user_from_entity))
    }

    async fn user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await?;
        Ok(user.map(user_from_entity))
    }

    async fn create_user(&self, user: InsertUser) -> AppResult<User> {
        let model = users::ActiveModel {
            id: NotSet,
            username: Set(user.username),
            password: Set(user.password),
            is_admin: Set(user.is_admin),
        }
        .insert(&self.conn)
        .await?;
        Ok(user_from_entity(model))
    }

    async fn categories(&self) -> AppResult<Vec<Category>> {
        let rows = categories::Entity::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(category_from_entity).collect())
    }

    async fn category_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let row = categories::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(category_from_entity))
    }

    async fn category_by_slug(&self, slug: &str) -> AppResult<Option<Category>> {
        let row = categories::Entity::find()
            .filter(categories::Column::Slug.eq(slug))
            .one(&self.conn)
            .await?;
        Ok(row.map(category_from_entity))
    }

    async fn create_category(&self, category: InsertCategory) -> AppResult<Category> {
        let model = categories::ActiveModel {
            id: NotSet,
            name: Set(category.name),
            slug: Set(category.slug),
            icon: Set(category.icon),
            description: Set(category.description),
        }
        .insert(&self.conn)
        .await?;
        Ok(category_from_entity(model))
    }

    async fn update_category(
        &self,
        id: i32,
        update: UpdateCategory,
    ) -> AppResult<Option<Category>> {
        let Some(existing) = categories::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: categories::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(slug) = update.slug {
            active.slug = Set(slug);
        }
        if let Some(icon) = update.icon {
            active.icon = Set(icon);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        let model = active.update(&self.conn).await?;
        Ok(Some(category_from_entity(model)))
    }

    async fn delete_category(&self, id: i32) -> AppResult<bool> {
        let result = categories::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    async fn services(&self) -> AppResult<Vec<Service>> {
        let rows = services::Entity::find()
            .order_by_asc(services::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(service_from_entity).collect())
    }

    async fn services_by_category(&self, category_id: i32) -> AppResult<Vec<Service>> {
        let rows = services::Entity::find()
            .filter(services::Column::CategoryId.eq(category_id))
            .order_by_asc(services::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(service_from_entity).collect())
    }

    async fn featured_services(&self) -> AppResult<Vec<Service>> {
        let rows = services::Entity::find()
            .filter(services::Column::Featured.eq(true))
            .order_by_asc(services::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(service_from_entity).collect())
    }

    async fn service_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        let row = services::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(service_from_entity))
    }

    async fn create_service(&self, service: InsertService) -> AppResult<Service> {
        let model = services::ActiveModel {
            id: NotSet,
            name: Set(service.name),
            description: Set(service.description),
            price: Set(service.price),
            image: Set(service.image),
            category_id: Set(service.category_id),
            featured: Set(service.featured),
            payment_instructions: Set(service.payment_instructions),
        }
        .insert(&self.conn)
        .await?;
        Ok(service_from_entity(model))
    }

    async fn update_service(&self, id: i32, update: UpdateService) -> AppResult<Option<Service>> {
        let Some(existing) = services::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: services::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(price) = update.price {
            active.price = Set(price);
        }
        if let Some(image) = update.image {
            active.image = Set(Some(image));
        }
        if let Some(category_id) = update.category_id {
            active.category_id = Set(category_id);
        }
        if let Some(featured) = update.featured {
            active.featured = Set(featured);
        }
        if let Some(payment_instructions) = update.payment_instructions {
            active.payment_instructions = Set(Some(payment_instructions));
        }
        let model = active.update(&self.conn).await?;
        Ok(Some(service_from_entity(model)))
    }

    async fn delete_service(&self, id: i32) -> AppResult<bool> {
        let result = services::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }

    async fn payment_methods(&self) -> AppResult<Vec<PaymentMethod>> {
        let rows = payment_methods::Entity::find()
            .order_by_asc(payment_methods::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(payment_method_from_entity).collect())
    }

    async fn payment_method_by_id(&self, id: i32) -> AppResult<Option<PaymentMethod>> {
        let row = payment_methods::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(payment_method_from_entity))
    }

    async fn create_payment_method(
        &self,
        method: InsertPaymentMethod,
    ) -> AppResult<PaymentMethod> {
        let model = payment_methods::ActiveModel {
            id: NotSet,
            name: Set(method.name),
            icon: Set(method.icon),
            description: Set(method.description),
            instructions: Set(method.instructions),
        }
        .insert(&self.conn)
        .await?;
        Ok(payment_method_from_entity(model))
    }

    async fn update_payment_method(
        &self,
        id: i32,
        update: UpdatePaymentMethod,
    ) -> AppResult<Option<PaymentMethod>> {
        let Some(existing) = payment_methods::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: payment_methods::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(icon) = update.icon {
            active.icon = Set(icon);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(instructions) = update.instructions {
            active.instructions = Set(Some(instructions));
        }
        let model = active.update(&self.conn).await?;
        Ok(Some(payment_method_from_entity(model)))
    }

    async fn delete_payment_method(&self, id: i32) -> AppResult<bool> {
        let result = payment_methods::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn testimonials(&self) -> AppResult<Vec<Testimonial>> {
        let rows = testimonials::Entity::find()
            .order_by_asc(testimonials::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(testimonial_from_entity).collect())
    }

    async fn testimonial_by_id(&self, id: i32) -> AppResult<Option<Testimonial>> {
        let row = testimonials::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(testimonial_from_entity))
    }

    async fn create_testimonial(&self, testimonial: InsertTestimonial) -> AppResult<Testimonial> {
        let model = testimonials::ActiveModel {
            id: NotSet,
            name: Set(testimonial.name),
            image: Set(testimonial.image),
            rating: Set(testimonial.rating),
            comment: Set(testimonial.comment),
        }
        .insert(&self.conn)
        .await?;
        Ok(testimonial_from_entity(model))
    }

    async fn update_testimonial(
        &self,
        id: i32,
        update: UpdateTestimonial,
    ) -> AppResult<Option<Testimonial>> {
        let Some(existing) = testimonials::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: testimonials::ActiveModel = existing.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(image) = update.image {
            active.image = Set(Some(image));
        }
        if let Some(rating) = update.rating {
            active.rating = Set(rating);
        }
        if let Some(comment) = update.comment {
            active.comment = Set(comment);
        }
        let model = active.update(&self.conn).await?;
        Ok(Some(testimonial_from_entity(model)))
    }

    async fn delete_testimonial(&self, id: i32) -> AppResult<bool> {
        let result = testimonials::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn contact_info(&self) -> AppResult<Option<ContactInfo>> {
        let row = contact_info::Entity::find()
            .order_by_asc(contact_info::Column::Id)
            .one(&self.conn)
            .await?;
        Ok(row.map(contact_info_from_entity))
    }

    async fn create_contact_info(&self, info: InsertContactInfo) -> AppResult<ContactInfo> {
        let model = contact_info::ActiveModel {
            id: NotSet,
            address: Set(info.address),
            phone: Set(info.phone),
            telegram_link: Set(info.telegram_link),
            telegram_username: Set(info.telegram_username),
            facebook_link: Set(info.facebook_link),
            instagram_link: Set(info.instagram_link),
            twitter_link: Set(info.twitter_link),
            show_social_icons: Set(info.show_social_icons),
            weekday_hours: Set(info.weekday_hours),
            weekend_hours: Set(info.weekend_hours),
            time_zone: Set(info.time_zone),
        }
        .insert(&self.conn)
        .await?;
        Ok(contact_info_from_entity(model))
    }

    async fn update_contact_info(
        &self,
        id: i32,
        update: UpdateContactInfo,
    ) -> AppResult<Option<ContactInfo>> {
        let Some(existing) = contact_info::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: contact_info::ActiveModel = existing.into();
        if let Some(address) = update.address {
            active.address = Set(address);
        }
        if let Some(phone) = update.phone {
            active.phone = Set(phone);
        }
        if let Some(telegram_link) = update.telegram_link {
            active.telegram_link = Set(telegram_link);
        }
        if let Some(telegram_username) = update.telegram_username {
            active.telegram_username = Set(telegram_username);
        }
        if let Some(facebook_link) = update.facebook_link {
            active.facebook_link = Set(facebook_link);
        }
        if let Some(instagram_link) = update.instagram_link {
            active.instagram_link = Set(instagram_link);
        }
        if let Some(twitter_link) = update.twitter_link {
            active.twitter_link = Set(twitter_link);
        }
        if let Some(show_social_icons) = update.show_social_icons {
            active.show_social_icons = Set(show_social_icons);
        }
        if let Some(weekday_hours) = update.weekday_hours {
            active.weekday_hours = Set(weekday_hours);
        }
        if let Some(weekend_hours) = update.weekend_hours {
            active.weekend_hours = Set(weekend_hours);
        }
        if let Some(time_zone) = update.time_zone {
            active.time_zone = Set(time_zone);
        }
        let model = active.update(&self.conn).await?;
        Ok(Some(contact_info_from_entity(model)))
    }

    async fn orders(&self) -> AppResult<Vec<Order>> {
        let rows = orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(&self.conn)
            .await?;
        rows.into_iter().map(order_from_entity).collect()
    }

    async fn order_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let row = orders::Entity::find_by_id(id).one(&self.conn).await?;
        row.map(order_from_entity).transpose()
    }

    async fn create_order(&self, order: InsertOrder) -> AppResult<Order> {
        let model = orders::ActiveModel {
            id: NotSet,
            service_id: Set(order.service_id),
            service_name: Set(order.service_name),
            payment_method_id: Set(order.payment_method_id),
            payment_method: Set(order.payment_method),
            amount: Set(order.amount),
            status: Set(order.status.as_str().to_string()),
            screenshot_url: Set(order.screenshot_url),
            customer_phone: Set(order.customer_phone),
            customer_telegram: Set(order.customer_telegram),
            platform_username: Set(order.platform_username),
            target_url: Set(order.target_url),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.conn)
        .await?;
        order_from_entity(model)
    }

    async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> AppResult<Option<Order>> {
        let Some(existing) = orders::Entity::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };
        let mut active: orders::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        let model = active.update(&self.conn).await?;
        Ok(Some(order_from_entity(model)?))
    }
}

fn user_from_entity(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
        is_admin: model.is_admin,
    }
}

fn category_from_entity(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        slug: model.slug,
        icon: model.icon,
        description: model.description,
    }
}

fn service_from_entity(model: services::Model) -> Service {
    Service {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        image: model.image,
        category_id: model.category_id,
        featured: model.featured,
        payment_instructions: model.payment_instructions,
    }
}

fn payment_method_from_entity(model: payment_methods::Model) -> PaymentMethod {
    PaymentMethod {
        id: model.id,
        name: model.name,
        icon: model.icon,
        description: model.description,
        instructions: model.instructions,
    }
}

fn testimonial_from_entity(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        name: model.name,
        image: model.image,
        rating: model.rating,
        comment: model.comment,
    }
}

fn contact_info_from_entity(model: contact_info::Model) -> ContactInfo {
    ContactInfo {
        id: model.id,
        address: model.address,
        phone: model.phone,
        telegram_link: model.telegram_link,
        telegram_username: model.telegram_username,
        facebook_link: model.facebook_link,
        instagram_link: model.instagram_link,
        twitter_link: model.twitter_link,
        show_social_icons: model.show_social_icons,
        weekday_hours: model.weekday_hours,
        weekend_hours: model.weekend_hours,
        time_zone: model.time_zone,
    }
}

fn order_from_entity(model: orders::Model) -> AppResult<Order> {
    let status = OrderStatus::parse(&model.status).ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!("unknown order status: {}", model.status))
    })?;
    Ok(Order {
        id: model.id,
        service_id: model.service_id,
        service_name: model.service_name,
        payment_method_id: model.payment_method_id,
        payment_method: model.payment_method,
        amount: model.amount,
        status,
        screenshot_url: model.screenshot_url,
        customer_phone: model.customer_phone,
        customer_telegram: model.customer_telegram,
        platform_username: model.platform_username,
        target_url: model.target_url,
        created_at: model.created_at.with_timezone(&Utc),
    })
}
