//! Shared test utilities for `orderdesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{client, order, product},
    entities,
    entities::order::OrderStatus,
    errors::Result,
};
use sea_orm::{ConnectOptions, DatabaseConnection};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
///
/// The pool is capped at one connection: every checkout must see the same
/// in-memory database, and concurrent test tasks must serialize against it.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = sea_orm::Database::connect(options).await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `description`: "Test product"
/// * `price`: 10.0
/// * `stock_quantity`: 10
/// * `low_stock_threshold`: default (5)
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Test product".to_string(),
        10.0,
        10,
        None,
        None,
    )
    .await
}

/// Creates a test product with custom price, stock, and threshold.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    stock_quantity: i32,
    low_stock_threshold: i32,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "Test product".to_string(),
        price,
        stock_quantity,
        Some(low_stock_threshold),
        None,
    )
    .await
}

/// Creates a test client with a unique email derived from the name.
pub async fn create_test_client(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::client::Model> {
    let email = format!(
        "{}@example.com",
        name.to_lowercase().replace(char::is_whitespace, ".")
    );
    client::create_client(db, name.to_string(), email, None, None).await
}

/// Builds an order draft dated now with pending status.
#[must_use]
pub fn test_order_draft(order_number: &str, client_id: i64) -> order::OrderDraft {
    order::OrderDraft {
        order_number: order_number.to_string(),
        client_id,
        order_date: chrono::Utc::now(),
        status: OrderStatus::Pending,
    }
}

/// Sets up a complete test environment with a client.
/// Returns (db, client) for common test scenarios.
pub async fn setup_with_client() -> Result<(DatabaseConnection, entities::client::Model)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Test Client").await?;
    Ok((db, client))
}

/// Sets up a complete test environment with a client and a product.
/// Returns (db, client, product) for order-related tests.
pub async fn setup_with_client_and_product() -> Result<(
    DatabaseConnection,
    entities::client::Model,
    entities::product::Model,
)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "Test Client").await?;
    let product = create_test_product(&db, "Test Product").await?;
    Ok((db, client, product))
}
