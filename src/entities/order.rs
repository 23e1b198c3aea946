//! Order entity - The order header owned by the fulfillment workflow.
//!
//! An order is created atomically with its line items; its `total` equals the
//! sum of `unit_price * quantity` over those items at creation time. Orders
//! are never deleted; only the status field is mutated after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The four allowed order statuses.
///
/// The set of labels is closed, but the transition graph between them is a
/// configurable policy (see `core::order::TransitionPolicy`), not part of the
/// schema.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Received but not yet being worked on
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Being picked/packed
    #[sea_orm(string_value = "processing")]
    Processing,
    /// Fulfilled
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Abandoned
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{label}")
    }
}

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-facing order identifier (e.g., "ORD-2305"), unique
    #[sea_orm(unique)]
    pub order_number: String,
    /// ID of the client who placed the order
    pub client_id: i64,
    /// When the order was placed
    pub order_date: DateTimeUtc,
    /// Current fulfillment status
    pub status: OrderStatus,
    /// Sum of `unit_price * quantity` over the order's items at creation time
    pub total: f64,
    /// When the row was created
    pub created_at: DateTime,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each order belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
    /// One order owns many line items
    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
