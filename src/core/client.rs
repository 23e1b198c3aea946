//! Client business logic.
//!
//! Provides functions for creating and retrieving clients. Registration is a
//! two-step write (client row + "registration" activity) and therefore runs
//! inside a transaction. Client email is unique; a duplicate registers as a
//! conflict, not a store error.

use crate::{
    core::activity,
    entities::{Client, client},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Retrieves all clients from the database, ordered alphabetically by name.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific client by its unique ID.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<client::Model>> {
    Client::find_by_id(client_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a client by email address.
pub async fn get_client_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<client::Model>> {
    Client::find()
        .filter(client::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Registers a new client, appending a "registration" activity entry.
///
/// Both writes happen in one transaction: a client row without its
/// registration entry (or vice versa) is never observable. The email must be
/// unique; a duplicate fails with a conflict before anything is persisted.
pub async fn create_client(
    db: &DatabaseConnection,
    name: String,
    email: String,
    phone: Option<String>,
    avatar_url: Option<String>,
) -> Result<client::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Client name cannot be empty".to_string(),
        });
    }

    if email.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Client email cannot be empty".to_string(),
        });
    }

    let email = email.trim().to_string();

    let txn = db.begin().await?;

    let existing = Client::find()
        .filter(client::Column::Email.eq(&email))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(Error::DuplicateEmail { email });
    }

    let client = client::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email),
        phone: Set(phone),
        avatar_url: Set(avatar_url),
        last_active: Set(None),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    let client = client.insert(&txn).await?;

    activity::record_activity(
        &txn,
        client.id,
        "registration",
        "Registered as a new client".to_string(),
        None,
    )
    .await?;

    // Re-read so the returned model carries the last_active touch
    let client = Client::find_by_id(client.id)
        .one(&txn)
        .await?
        .ok_or(Error::ClientNotFound { id: client.id })?;

    txn.commit().await?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{ClientActivity, client_activity};
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_client_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result =
            create_client(&db, String::new(), "a@example.com".to_string(), None, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput { message: _ }
        ));

        let result = create_client(&db, "Ann".to_string(), "   ".to_string(), None, None).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_appends_registration_activity() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_client(
            &db,
            "John Smith".to_string(),
            "john@example.com".to_string(),
            Some("555-1234".to_string()),
            None,
        )
        .await?;

        assert_eq!(client.name, "John Smith");
        assert_eq!(client.email, "john@example.com");
        assert_eq!(client.phone, Some("555-1234".to_string()));
        // Registration counts as activity
        assert!(client.last_active.is_some());

        let activities = ClientActivity::find()
            .filter(client_activity::Column::ClientId.eq(client.id))
            .all(&db)
            .await?;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, "registration");
        assert_eq!(activities[0].description, "Registered as a new client");
        assert_eq!(activities[0].related_id, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_client_duplicate_email() -> Result<()> {
        let db = setup_test_db().await?;

        create_client(
            &db,
            "John Smith".to_string(),
            "john@example.com".to_string(),
            None,
            None,
        )
        .await?;

        let result = create_client(
            &db,
            "John Impostor".to_string(),
            "john@example.com".to_string(),
            None,
            None,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::DuplicateEmail { .. }));

        // The duplicate attempt left no partial writes behind
        assert_eq!(get_all_clients(&db).await?.len(), 1);
        assert_eq!(ClientActivity::find().all(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_client_by_email() -> Result<()> {
        let db = setup_test_db().await?;

        let client = create_test_client(&db, "Sarah Johnson").await?;

        let found = get_client_by_email(&db, &client.email).await?;
        assert_eq!(found.unwrap().id, client.id);

        let not_found = get_client_by_email(&db, "nobody@example.com").await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_clients_ordered_by_name() -> Result<()> {
        let db = setup_test_db().await?;

        let bob = create_test_client(&db, "Bob").await?;
        let alice = create_test_client(&db, "Alice").await?;

        let clients = get_all_clients(&db).await?;
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].id, alice.id);
        assert_eq!(clients[1].id, bob.id);

        Ok(())
    }
}
