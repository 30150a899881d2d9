use sea_orm::{ConnectionTrait, Statement};

use storefront_api::{
    db::{create_orm_conn, run_migrations},
    dto::orders::CreateOrderRequest,
    models::{InsertCategory, InsertPaymentMethod, InsertService, OrderStatus},
    services::{admin_service, order_service},
    storage::{DbStorage, Storage},
};

// Integration flow against Postgres: seed a minimal catalog, submit an
// order, approve it as admin.
#[tokio::test]
async fn checkout_and_approval_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let orm = create_orm_conn(&database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE orders, services, payment_methods, categories, testimonials, contact_info, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    let store = DbStorage::new(orm);

    let category = admin_service::create_category(
        &store,
        InsertCategory {
            name: "TikTok".to_string(),
            slug: "tiktok".to_string(),
            icon: "hashtag".to_string(),
            description: None,
        },
    )
    .await?;
    let service = admin_service::create_service(
        &store,
        InsertService {
            name: "TikTok Followers (1000)".to_string(),
            description: "Get 1000 high-quality TikTok followers.".to_string(),
            price: 450,
            image: None,
            category_id: category.id,
            featured: true,
            payment_instructions: None,
        },
    )
    .await?;
    let method = admin_service::create_payment_method(
        &store,
        InsertPaymentMethod {
            name: "Telebirr".to_string(),
            icon: "mobile-alt".to_string(),
            description: None,
            instructions: None,
        },
    )
    .await?;

    let order = order_service::submit_order(
        &store,
        CreateOrderRequest {
            service_id: service.id,
            payment_method_id: method.id,
            screenshot_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            customer_phone: "0911111111".to_string(),
            customer_telegram: Some("@buyer".to_string()),
            platform_username: Some("myhandle".to_string()),
            target_url: None,
            service_name: None,
            payment_method: None,
            amount: None,
            status: None,
        },
    )
    .await?;
    assert_eq!(order.amount, 450);
    assert_eq!(order.status, OrderStatus::Pending);

    let approved = order_service::set_order_status(&store, order.id, "approved").await?;
    assert_eq!(approved.status, OrderStatus::Approved);

    // Snapshot survives a catalog edit.
    admin_service::update_service(
        &store,
        service.id,
        storefront_api::models::UpdateService {
            price: Some(999),
            ..Default::default()
        },
    )
    .await?;
    let stored = store.order_by_id(order.id).await?.expect("order row");
    assert_eq!(stored.amount, 450);

    Ok(())
}
