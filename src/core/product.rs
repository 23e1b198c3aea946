//! Product and inventory business logic.
//!
//! This module provides functions for creating, retrieving, and updating products,
//! together with the inventory ledger rules: atomic restocks, clamped stock
//! decrements, and the derived low-stock view. Stock adjustments are issued as
//! single UPDATE statements so concurrent restocks and sales never lose updates.
//! All functions are async and return Result types for proper error handling
//! throughout the system.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use serde::Serialize;

/// Low-stock threshold applied when a product is created without one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

/// Partial update to a product; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock quantity. Bypasses restock/order accounting; callers that
    /// need auditable stock changes must use `restock_product`/`create_order`.
    pub stock_quantity: Option<i32>,
    /// New low-stock threshold
    pub low_stock_threshold: Option<i32>,
    /// New image URL
    pub image_url: Option<String>,
}

/// One row of the low-stock view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockItem {
    /// Product id
    pub id: i64,
    /// Product name
    pub name: String,
    /// Units currently in stock
    pub current_stock: i32,
    /// The product's configured threshold
    pub threshold: i32,
}

/// Retrieves all products from the database, ordered alphabetically by name.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// Returns None if the product doesn't exist, allowing callers to handle
/// missing products gracefully without throwing errors.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new product with the specified parameters, performing input validation.
///
/// The name must be non-blank, the price finite and non-negative, and the stock
/// quantity and threshold non-negative. When no threshold is supplied, the
/// default of 5 applies.
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    stock_quantity: i32,
    low_stock_threshold: Option<i32>,
    image_url: Option<String>,
) -> Result<product::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidAmount { amount: price });
    }

    if stock_quantity < 0 {
        return Err(Error::InvalidQuantity {
            quantity: stock_quantity,
        });
    }

    let threshold = low_stock_threshold.unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);
    if threshold < 0 {
        return Err(Error::InvalidQuantity {
            quantity: threshold,
        });
    }

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        description: Set(description),
        price: Set(price),
        stock_quantity: Set(stock_quantity),
        low_stock_threshold: Set(threshold),
        image_url: Set(image_url),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    product.insert(db).await.map_err(Into::into)
}

/// Applies an arbitrary partial update to a product.
///
/// Provided fields are validated with the same range checks as creation; the
/// rest of the row is left untouched. Direct `stock_quantity` edits through
/// this path bypass the restock/order accounting semantics.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    patch: ProductPatch,
) -> Result<product::Model> {
    // Validate inputs before touching the store
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "Product name cannot be empty".to_string(),
            });
        }
    }

    if let Some(price) = patch.price {
        if price < 0.0 || !price.is_finite() {
            return Err(Error::InvalidAmount { amount: price });
        }
    }

    if let Some(quantity) = patch.stock_quantity {
        if quantity < 0 {
            return Err(Error::InvalidQuantity { quantity });
        }
    }

    if let Some(threshold) = patch.low_stock_threshold {
        if threshold < 0 {
            return Err(Error::InvalidQuantity {
                quantity: threshold,
            });
        }
    }

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    if let Some(name) = patch.name {
        product.name = Set(name.trim().to_string());
    }
    if let Some(description) = patch.description {
        product.description = Set(description);
    }
    if let Some(price) = patch.price {
        product.price = Set(price);
    }
    if let Some(quantity) = patch.stock_quantity {
        product.stock_quantity = Set(quantity);
    }
    if let Some(threshold) = patch.low_stock_threshold {
        product.low_stock_threshold = Set(threshold);
    }
    if let Some(image_url) = patch.image_url {
        product.image_url = Set(Some(image_url));
    }

    product.update(db).await.map_err(Into::into)
}

/// Adds stock to a product by atomically incrementing its quantity.
///
/// This function performs an atomic database-level update to prevent race conditions.
/// Instead of reading the current quantity, modifying it, and writing it back (which
/// can lose updates in concurrent scenarios), this uses a single SQL UPDATE statement:
/// `UPDATE products SET stock_quantity = stock_quantity + quantity WHERE id = ?`
///
/// # Arguments
/// * `db` - Database connection or transaction
/// * `product_id` - ID of the product to restock
/// * `quantity` - Units to add, must be positive; the increase is unbounded
///
/// # Returns
/// The updated product model
pub async fn restock_product<C>(db: &C, product_id: i64, quantity: i32) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    // First verify the product exists
    let _product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    // Perform atomic update: stock_quantity = stock_quantity + quantity
    Product::update_many()
        .col_expr(
            product::Column::StockQuantity,
            Expr::col(product::Column::StockQuantity).add(quantity),
        )
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await?;

    // Return the updated product
    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })
}

/// Removes stock from a product, flooring the quantity at zero.
///
/// Like [`restock_product`] this is a single UPDATE statement, but the new
/// value is wrapped in a CASE so a decrement larger than the available stock
/// drives the product to exactly 0 instead of going negative:
/// `stock_quantity = CASE WHEN stock_quantity >= qty THEN stock_quantity - qty ELSE 0 END`
///
/// Used by the order workflow for line-item fulfillment.
pub async fn deduct_stock<C>(db: &C, product_id: i64, quantity: i32) -> Result<product::Model>
where
    C: ConnectionTrait,
{
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let _product = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?;

    let clamped = Expr::case(
        Expr::col(product::Column::StockQuantity).gte(quantity),
        Expr::col(product::Column::StockQuantity).sub(quantity),
    )
    .finally(Expr::value(0));

    Product::update_many()
        .col_expr(product::Column::StockQuantity, clamped.into())
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await?;

    Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })
}

/// Pure low-stock predicate: at or below the configured threshold.
#[must_use]
pub const fn is_low_stock(product: &product::Model) -> bool {
    product.stock_quantity <= product.low_stock_threshold
}

/// Returns the low-stock view, most urgent (lowest stock) first.
///
/// Recomputed from current store state on every call; there is no persisted
/// "is low stock" flag to go stale after concurrent restocks or orders.
pub async fn get_low_stock_items(db: &DatabaseConnection) -> Result<Vec<LowStockItem>> {
    let mut items: Vec<LowStockItem> = Product::find()
        .all(db)
        .await?
        .into_iter()
        .filter(is_low_stock)
        .map(|product| LowStockItem {
            id: product.id,
            name: product.name,
            current_stock: product.stock_quantity,
            threshold: product.low_stock_threshold,
        })
        .collect();

    items.sort_by_key(|item| item.current_stock);
    Ok(items)
}
