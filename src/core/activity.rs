//! Client activity log business logic.
//!
//! The activity log is append-only: entries are never mutated or deleted.
//! Recording an activity also touches the client's `last_active`, which is
//! what the "new clients" analytics window is measured against. The feed
//! projection annotates each entry with a client summary and substitutes a
//! placeholder when the referenced client no longer resolves.

use crate::{
    entities::{Client, ClientActivity, client, client_activity},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*, sea_query::Expr};
use serde::Serialize;

/// Feed size applied when the caller does not ask for a specific limit.
const DEFAULT_FEED_LIMIT: u64 = 10;

/// Minimal client annotation carried by feed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSummary {
    /// Client id, 0 for the placeholder
    pub id: i64,
    /// Client display name, "Unknown Client" for the placeholder
    pub name: String,
    /// Optional avatar image
    pub avatar_url: Option<String>,
}

impl ClientSummary {
    fn from_client(client: client::Model) -> Self {
        Self {
            id: client.id,
            name: client.name,
            avatar_url: client.avatar_url,
        }
    }

    /// Placeholder used when an activity's client reference no longer
    /// resolves. A documented degradation, not an error.
    fn unknown() -> Self {
        Self {
            id: 0,
            name: "Unknown Client".to_string(),
            avatar_url: None,
        }
    }
}

/// One entry of the activity feed projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityWithClient {
    /// Activity id
    pub id: i64,
    /// Summary of the client the activity belongs to
    pub client: ClientSummary,
    /// Free-form event tag
    pub activity_type: String,
    /// Human-readable description
    pub description: String,
    /// When the event happened
    pub timestamp: DateTimeUtc,
    /// Optional correlation id (e.g. an order number)
    pub related_id: Option<String>,
}

/// Appends an activity entry for a client and touches the client's
/// `last_active` in the same statement batch.
///
/// Generic over the connection so workflow transactions can record activities
/// as part of their atomic unit. The client reference is resolved first; an
/// unresolved client is a hard `ClientNotFound` at write time.
pub async fn record_activity<C>(
    db: &C,
    client_id: i64,
    activity_type: &str,
    description: String,
    related_id: Option<String>,
) -> Result<client_activity::Model>
where
    C: ConnectionTrait,
{
    let _client = Client::find_by_id(client_id)
        .one(db)
        .await?
        .ok_or(Error::ClientNotFound { id: client_id })?;

    let now = chrono::Utc::now();
    let activity = client_activity::ActiveModel {
        client_id: Set(client_id),
        activity_type: Set(activity_type.to_string()),
        description: Set(description),
        timestamp: Set(now),
        related_id: Set(related_id),
        created_at: Set(now.naive_utc()),
        ..Default::default()
    };

    let result = activity.insert(db).await?;

    // Activity implies liveness
    Client::update_many()
        .col_expr(client::Column::LastActive, Expr::value(Some(now)))
        .filter(client::Column::Id.eq(client_id))
        .exec(db)
        .await?;

    Ok(result)
}

/// Retrieves a specific activity entry by its unique ID.
pub async fn get_activity_by_id(
    db: &DatabaseConnection,
    activity_id: i64,
) -> Result<Option<client_activity::Model>> {
    ClientActivity::find_by_id(activity_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the activity feed, newest first, each entry annotated with a
/// client summary.
///
/// Entries whose client reference no longer resolves get the "Unknown Client"
/// placeholder instead of failing the whole feed.
pub async fn get_client_activities(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<ActivityWithClient>> {
    let rows = ClientActivity::find()
        .find_also_related(Client)
        .order_by_desc(client_activity::Column::Timestamp)
        .limit(limit.unwrap_or(DEFAULT_FEED_LIMIT))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(activity, client)| ActivityWithClient {
            id: activity.id,
            client: client.map_or_else(ClientSummary::unknown, ClientSummary::from_client),
            activity_type: activity.activity_type,
            description: activity.description,
            timestamp: activity.timestamp,
            related_id: activity.related_id,
        })
        .collect())
}
