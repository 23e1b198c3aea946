//! User entity - Back-office user accounts.
//!
//! The core only owns the rows and the username uniqueness constraint;
//! authentication itself (password verification, token issuance) lives in the
//! boundary layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique across users
    #[sea_orm(unique)]
    pub username: String,
    /// Credential material, opaque to the core
    pub password: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Optional avatar image
    pub avatar_url: Option<String>,
    /// When the account was created
    pub created_at: DateTime,
}

/// `User` has no relationships the core navigates
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
