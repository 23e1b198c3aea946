//! Client entity - Represents the customers the back office manages.
//!
//! Clients are referenced (not owned) by orders and by the activity log;
//! deleting a client is out of scope. `last_active` is touched whenever an
//! activity is recorded for the client.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email, unique across clients
    #[sea_orm(unique)]
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional avatar image
    pub avatar_url: Option<String>,
    /// Last time any activity was recorded for this client
    pub last_active: Option<DateTimeUtc>,
    /// When the client was created
    pub created_at: DateTime,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client places many orders
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    /// One client accumulates many activity entries
    #[sea_orm(has_many = "super::client_activity::Entity")]
    Activities,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::client_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
