//! Product entity - Represents items sold through the store.
//!
//! Each product carries a price, the current stock quantity, and the threshold
//! at or below which it counts as low stock. The stock quantity is only ever
//! mutated through the restock and order-fulfillment operations and is never
//! persisted negative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the product (e.g., "Wireless Headphones")
    pub name: String,
    /// Longer description shown in the catalog
    pub description: String,
    /// Unit price in dollars
    pub price: f64,
    /// Units currently in stock; floored at 0, never negative
    pub stock_quantity: i32,
    /// Stock level at or below which the product counts as low stock
    pub low_stock_threshold: i32,
    /// Optional catalog image
    pub image_url: Option<String>,
    /// When the product was created
    pub created_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product appears on many order line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
