use storefront_api::{
    error::AppError,
    models::{InsertCategory, InsertContactInfo, InsertService, InsertTestimonial, UpdateCategory, UpdateTestimonial},
    services::{admin_service, catalog_service},
    storage::{MemStorage, Storage},
};

fn tiktok_category() -> InsertCategory {
    InsertCategory {
        name: "TikTok".to_string(),
        slug: "tiktok".to_string(),
        icon: "hashtag".to_string(),
        description: Some("TikTok followers, likes, views and more".to_string()),
    }
}

fn service_in_category(name: &str, category_id: i32, featured: bool) -> InsertService {
    InsertService {
        name: name.to_string(),
        description: format!("{name} description"),
        price: 100,
        image: None,
        category_id,
        featured,
        payment_instructions: None,
    }
}

#[tokio::test]
async fn category_round_trips_by_id_and_slug() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let created = admin_service::create_category(&store, tiktok_category()).await?;

    let by_id = store.category_by_id(created.id).await?.expect("by id");
    let by_slug = catalog_service::category_by_slug(&store, "tiktok").await?;

    assert_eq!(by_id, created);
    assert_eq!(by_slug, created);
    Ok(())
}

#[tokio::test]
async fn duplicate_slugs_are_rejected() -> anyhow::Result<()> {
    let store = MemStorage::new();
    admin_service::create_category(&store, tiktok_category()).await?;

    let err = admin_service::create_category(&store, tiktok_category())
        .await
        .unwrap_err();
    match err {
        AppError::Validation { errors, .. } => {
            assert_eq!(errors, vec!["slug is already in use"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn malformed_slugs_are_rejected() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let err = admin_service::create_category(
        &store,
        InsertCategory {
            slug: "Gift Cards".to_string(),
            ..tiktok_category()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    Ok(())
}

#[tokio::test]
async fn updating_a_category_keeps_its_own_slug_usable() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let created = admin_service::create_category(&store, tiktok_category()).await?;

    // Renaming without changing the slug must not trip the uniqueness check.
    let updated = admin_service::update_category(
        &store,
        created.id,
        UpdateCategory {
            name: Some("TikTok Growth".to_string()),
            slug: Some("tiktok".to_string()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(updated.name, "TikTok Growth");
    assert_eq!(updated.slug, "tiktok");
    Ok(())
}

#[tokio::test]
async fn deleting_a_category_orphans_its_services() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let category = admin_service::create_category(&store, tiktok_category()).await?;
    let first = admin_service::create_service(
        &store,
        service_in_category("TikTok Followers (1000)", category.id, false),
    )
    .await?;
    admin_service::create_service(
        &store,
        service_in_category("TikTok Likes (1000)", category.id, false),
    )
    .await?;

    admin_service::delete_category(&store, category.id).await?;

    assert!(store.category_by_id(category.id).await?.is_none());
    // Services keep their dangling category id and stay retrievable.
    let orphans = catalog_service::services_by_category(&store, category.id).await?;
    assert_eq!(orphans.len(), 2);
    let fetched = catalog_service::service_by_id(&store, first.id).await?;
    assert_eq!(fetched.category_id, category.id);
    Ok(())
}

#[tokio::test]
async fn featured_listing_only_returns_flagged_services() -> anyhow::Result<()> {
    let store = MemStorage::new();
    admin_service::create_service(&store, service_in_category("Featured One", 1, true)).await?;
    admin_service::create_service(&store, service_in_category("Plain One", 1, false)).await?;
    admin_service::create_service(&store, service_in_category("Featured Two", 2, true)).await?;

    let featured = catalog_service::featured_services(&store).await?;
    let names: Vec<_> = featured.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Featured One", "Featured Two"]);
    Ok(())
}

#[tokio::test]
async fn nonpositive_prices_are_rejected() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let err = admin_service::create_service(
        &store,
        InsertService {
            price: 0,
            ..service_in_category("Free Followers", 1, false)
        },
    )
    .await
    .unwrap_err();
    match err {
        AppError::Validation { errors, .. } => {
            assert_eq!(errors, vec!["price must be positive"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn testimonial_ratings_are_clamped_to_the_scale() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let testimonial = InsertTestimonial {
        name: "Sara Abebe".to_string(),
        image: None,
        rating: 6,
        comment: "Great service".to_string(),
    };

    let err = admin_service::create_testimonial(&store, testimonial.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let created = admin_service::create_testimonial(
        &store,
        InsertTestimonial {
            rating: 5,
            ..testimonial
        },
    )
    .await?;

    let err = admin_service::update_testimonial(
        &store,
        created.id,
        UpdateTestimonial {
            rating: Some(0),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
    Ok(())
}

#[tokio::test]
async fn updates_to_missing_records_are_not_found() -> anyhow::Result<()> {
    let store = MemStorage::new();
    let err = admin_service::update_category(
        &store,
        99,
        UpdateCategory {
            name: Some("Ghost".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = admin_service::delete_category(&store, 99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn contact_info_reads_return_the_first_row() -> anyhow::Result<()> {
    let store = MemStorage::new();
    assert!(catalog_service::contact_info(&store).await?.is_none());

    let info = InsertContactInfo {
        address: "Bole, Addis Ababa, Ethiopia".to_string(),
        phone: "+251 91 234 5678".to_string(),
        telegram_link: "https://t.me/example".to_string(),
        telegram_username: "@example".to_string(),
        facebook_link: String::new(),
        instagram_link: String::new(),
        twitter_link: String::new(),
        show_social_icons: false,
        weekday_hours: "Monday - Saturday: 9:00 AM - 8:00 PM".to_string(),
        weekend_hours: "Sunday: 10:00 AM - 6:00 PM".to_string(),
        time_zone: "East Africa Time (EAT)".to_string(),
    };
    let first = store.create_contact_info(info.clone()).await?;
    store
        .create_contact_info(InsertContactInfo {
            address: "Second row".to_string(),
            ..info
        })
        .await?;

    let fetched = catalog_service::contact_info(&store).await?.expect("row");
    assert_eq!(fetched, first);
    Ok(())
}

#[tokio::test]
async fn seeded_store_carries_the_full_catalog() -> anyhow::Result<()> {
    let store = MemStorage::seeded();

    assert_eq!(catalog_service::categories(&store).await?.len(), 7);
    assert_eq!(catalog_service::services(&store).await?.len(), 21);
    assert_eq!(catalog_service::payment_methods(&store).await?.len(), 3);
    assert_eq!(catalog_service::testimonials(&store).await?.len(), 3);
    assert!(catalog_service::contact_info(&store).await?.is_some());

    let giftcards = catalog_service::category_by_slug(&store, "giftcards").await?;
    let gift_services = catalog_service::services_by_category(&store, giftcards.id).await?;
    assert_eq!(gift_services.len(), 3);

    let admin = store.user_by_username("admin").await?.expect("admin user");
    assert!(admin.is_admin);
    Ok(())
}
