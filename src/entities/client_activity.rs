//! Client activity entity - Append-only audit log of client-related events.
//!
//! Activities are never mutated or deleted. `activity_type` is a free-form tag
//! ("order", "order_status", "registration", "profile", "review", ...);
//! `related_id` optionally correlates the entry to an order number.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client activity database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_activities")]
pub struct Model {
    /// Unique identifier for the activity entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the client the activity belongs to
    pub client_id: i64,
    /// Free-form event tag, e.g. `"order"` or `"order_status"`
    pub activity_type: String,
    /// Human-readable description of the event
    pub description: String,
    /// When the event happened
    pub timestamp: DateTimeUtc,
    /// Optional correlation id, e.g. the order number for order events
    pub related_id: Option<String>,
    /// When the row was created
    pub created_at: DateTime,
}

/// Defines relationships between ClientActivity and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each activity belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
