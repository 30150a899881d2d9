use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use storefront_api::{config::AppConfig, db::create_pool, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to seed the database"))?;

    let pool = create_pool(&database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    ensure_admin(&pool, seed::ADMIN_USERNAME, seed::ADMIN_PASSWORD).await?;
    seed_catalog(&pool).await?;

    println!("Seed completed");
    Ok(())
}

/// The admin password is stored as an argon2 hash; nothing authenticates
/// against it yet, but plaintext never reaches the database.
async fn ensure_admin(pool: &sqlx::PgPool, username: &str, password: &str) -> anyhow::Result<()> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    sqlx::query(
        r#"
        INSERT INTO users (username, password, is_admin)
        VALUES ($1, $2, TRUE)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    println!("Ensured admin user {username}");
    Ok(())
}

async fn seed_catalog(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Catalog already seeded, skipping");
        return Ok(());
    }

    // Services reference categories 1..=7 by position, so the catalog is only
    // ever seeded into an empty database where serial ids line up.
    for category in seed::categories() {
        sqlx::query(
            r#"
            INSERT INTO categories (name, slug, icon, description)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(category.name)
        .bind(category.slug)
        .bind(category.icon)
        .bind(category.description)
        .execute(pool)
        .await?;
    }

    for method in seed::payment_methods() {
        sqlx::query(
            r#"
            INSERT INTO payment_methods (name, icon, description, instructions)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(method.name)
        .bind(method.icon)
        .bind(method.description)
        .bind(method.instructions)
        .execute(pool)
        .await?;
    }

    for service in seed::services() {
        sqlx::query(
            r#"
            INSERT INTO services (name, description, price, image, category_id, featured, payment_instructions)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(service.name)
        .bind(service.description)
        .bind(service.price)
        .bind(service.image)
        .bind(service.category_id)
        .bind(service.featured)
        .bind(service.payment_instructions)
        .execute(pool)
        .await?;
    }

    for testimonial in seed::testimonials() {
        sqlx::query(
            r#"
            INSERT INTO testimonials (name, image, rating, comment)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(testimonial.name)
        .bind(testimonial.image)
        .bind(testimonial.rating)
        .bind(testimonial.comment)
        .execute(pool)
        .await?;
    }

    let info = seed::contact_info();
    sqlx::query(
        r#"
        INSERT INTO contact_info (
            address, phone, telegram_link, telegram_username,
            facebook_link, instagram_link, twitter_link, show_social_icons,
            weekday_hours, weekend_hours, time_zone
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(info.address)
    .bind(info.phone)
    .bind(info.telegram_link)
    .bind(info.telegram_username)
    .bind(info.facebook_link)
    .bind(info.instagram_link)
    .bind(info.twitter_link)
    .bind(info.show_social_icons)
    .bind(info.weekday_hours)
    .bind(info.weekend_hours)
    .bind(info.time_zone)
    .execute(pool)
    .await?;

    println!("Seeded catalog");
    Ok(())
}
