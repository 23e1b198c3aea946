//! Back-office user account logic.
//!
//! Only row management lives here; password verification and token issuance
//! belong to the access gate at the boundary.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Retrieves a specific user by its unique ID.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by login name.
pub async fn get_user_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new user account. The username must be unique.
pub async fn create_user(
    db: &DatabaseConnection,
    username: String,
    password: String,
    name: String,
    email: String,
    avatar_url: Option<String>,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Username cannot be empty".to_string(),
        });
    }

    let username = username.trim().to_string();

    if get_user_by_username(db, &username).await?.is_some() {
        return Err(Error::DuplicateUsername { username });
    }

    let user = user::ActiveModel {
        username: Set(username),
        password: Set(password),
        name: Set(name),
        email: Set(email),
        avatar_url: Set(avatar_url),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    user.insert(db).await.map_err(Into::into)
}
