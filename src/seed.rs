//! Demo-data seeding for first-run bootstrap.
//!
//! Recreates the sample back office (an admin user, a handful of products and
//! clients, and a few orders in different states) through the real core
//! operations, so the seeded store has gone through the same stock decrements
//! and activity logging as live traffic. Skipped entirely when products
//! already exist.

use crate::{
    core::{activity, client, order, product, user},
    entities::order::OrderStatus,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::info;

/// Seeds the demo fixture unless the store already has products.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    if !product::get_all_products(db).await?.is_empty() {
        info!("Store already has products, skipping demo seed");
        return Ok(());
    }

    user::create_user(
        db,
        "admin".to_string(),
        "password".to_string(),
        "Admin User".to_string(),
        "admin@example.com".to_string(),
        None,
    )
    .await?;

    let tshirt = product::create_product(
        db,
        "Blue T-Shirt (Medium)".to_string(),
        "Comfortable cotton t-shirt in blue color, medium size".to_string(),
        19.99,
        3,
        Some(5),
        None,
    )
    .await?;

    let headphones = product::create_product(
        db,
        "Wireless Headphones".to_string(),
        "High-quality wireless headphones with noise cancellation".to_string(),
        89.99,
        5,
        Some(5),
        None,
    )
    .await?;

    let phone_case = product::create_product(
        db,
        "Smartphone Case".to_string(),
        "Protective case for latest smartphone models".to_string(),
        24.99,
        2,
        Some(10),
        None,
    )
    .await?;

    product::create_product(
        db,
        "Leather Wallet".to_string(),
        "Genuine leather wallet with multiple card slots".to_string(),
        49.99,
        4,
        Some(5),
        None,
    )
    .await?;

    let john = client::create_client(
        db,
        "John Smith".to_string(),
        "john@example.com".to_string(),
        Some("555-1234".to_string()),
        None,
    )
    .await?;

    let sarah = client::create_client(
        db,
        "Sarah Johnson".to_string(),
        "sarah@example.com".to_string(),
        Some("555-5678".to_string()),
        None,
    )
    .await?;

    let michael = client::create_client(
        db,
        "Michael Brown".to_string(),
        "michael@example.com".to_string(),
        Some("555-9012".to_string()),
        None,
    )
    .await?;

    order::create_order(
        db,
        order::OrderDraft {
            order_number: "ORD-2305".to_string(),
            client_id: john.id,
            order_date: chrono::Utc::now(),
            status: OrderStatus::Completed,
        },
        &[order::OrderItemDraft {
            product_id: headphones.id,
            quantity: 1,
            unit_price: 89.99,
        }],
    )
    .await?;

    order::create_order(
        db,
        order::OrderDraft {
            order_number: "ORD-2304".to_string(),
            client_id: sarah.id,
            order_date: chrono::Utc::now(),
            status: OrderStatus::Processing,
        },
        &[order::OrderItemDraft {
            product_id: tshirt.id,
            quantity: 2,
            unit_price: 19.99,
        }],
    )
    .await?;

    order::create_order(
        db,
        order::OrderDraft {
            order_number: "ORD-2303".to_string(),
            client_id: michael.id,
            order_date: chrono::Utc::now(),
            status: OrderStatus::Pending,
        },
        &[order::OrderItemDraft {
            product_id: phone_case.id,
            quantity: 1,
            unit_price: 24.99,
        }],
    )
    .await?;

    activity::record_activity(
        db,
        sarah.id,
        "profile",
        "Updated their profile information".to_string(),
        None,
    )
    .await?;

    activity::record_activity(
        db,
        michael.id,
        "review",
        "Left a review for product Wireless Headphones".to_string(),
        None,
    )
    .await?;

    info!("Seeded demo data");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::settings::Settings;
    use crate::core::analytics;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_seed_populates_store() -> Result<()> {
        let db = setup_test_db().await?;

        seed_demo_data(&db).await?;

        let products = product::get_all_products(&db).await?;
        assert_eq!(products.len(), 4);
        let clients = client::get_all_clients(&db).await?;
        assert_eq!(clients.len(), 3);
        let orders = order::get_all_orders(&db).await?;
        assert_eq!(orders.len(), 3);

        // Orders flowed through the workflow engine: stock was decremented
        let headphones = products
            .iter()
            .find(|p| p.name == "Wireless Headphones")
            .unwrap();
        assert_eq!(headphones.stock_quantity, 4);
        let tshirt = products
            .iter()
            .find(|p| p.name == "Blue T-Shirt (Medium)")
            .unwrap();
        assert_eq!(tshirt.stock_quantity, 1);

        // The dashboard has something to show
        let analytics = analytics::get_analytics(&db, &Settings::default()).await?;
        assert_eq!(analytics.orders_today, 3);
        assert!(analytics.low_stock_items >= 3);
        assert_eq!(analytics.new_clients, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;

        seed_demo_data(&db).await?;
        seed_demo_data(&db).await?;

        assert_eq!(product::get_all_products(&db).await?.len(), 4);
        assert_eq!(order::get_all_orders(&db).await?.len(), 3);

        Ok(())
    }
}
