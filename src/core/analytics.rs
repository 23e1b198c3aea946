//! Dashboard analytics and recent-orders projection.
//!
//! Everything here is a read-only view recomputed from current entity-store
//! state on every call; nothing is cached or persisted, so the numbers can
//! never go stale after concurrent restocks and orders. Counts and sums are
//! folded in Rust over the fetched rows, which is deliberate at back-office
//! scale.

use crate::{
    config::settings::Settings,
    core::product as inventory,
    entities::{Client, Order, order, order::OrderStatus},
    errors::Result,
};
use chrono::{NaiveTime, Utc};
use sea_orm::{QueryOrder, QuerySelect, prelude::*};
use serde::Serialize;

/// Rows returned by the recent-orders projection when the caller does not ask
/// for a specific limit.
const DEFAULT_RECENT_LIMIT: u64 = 10;

/// One row of the recent-orders projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentOrder {
    /// Order id
    pub id: i64,
    /// Human-facing order identifier
    pub order_number: String,
    /// Display name of the client, "Unknown Client" when the reference no
    /// longer resolves
    pub client_name: String,
    /// Current fulfillment status
    pub status: OrderStatus,
    /// When the order was placed
    pub order_date: DateTimeUtc,
}

/// The dashboard headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    /// Orders whose `order_date` falls on or after midnight (UTC) today
    pub orders_today: usize,
    /// All-time sum of order totals
    pub revenue: f64,
    /// Products currently at or below their low-stock threshold
    pub low_stock_items: usize,
    /// Clients whose `last_active` falls within the configured trailing window
    pub new_clients: usize,
}

/// Returns the most recent orders, newest first, annotated with the client's
/// display name.
///
/// A dangling client reference degrades to "Unknown Client" instead of
/// failing the projection.
pub async fn get_recent_orders(
    db: &DatabaseConnection,
    limit: Option<u64>,
) -> Result<Vec<RecentOrder>> {
    let rows = Order::find()
        .find_also_related(Client)
        .order_by_desc(order::Column::OrderDate)
        .limit(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(order_row, client_row)| RecentOrder {
            id: order_row.id,
            order_number: order_row.order_number,
            client_name: client_row
                .map_or_else(|| "Unknown Client".to_string(), |client| client.name),
            status: order_row.status,
            order_date: order_row.order_date,
        })
        .collect())
}

/// Computes the dashboard analytics from current store state.
///
/// Calling this twice with no intervening mutation yields identical results;
/// there is no cache to invalidate. The "new clients" window comes from
/// [`Settings::new_client_window_days`] rather than a hidden constant.
pub async fn get_analytics(db: &DatabaseConnection, settings: &Settings) -> Result<Analytics> {
    let now = Utc::now();
    let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let window_start = now - chrono::Duration::days(settings.new_client_window_days);

    let orders = Order::find().all(db).await?;
    let orders_today = orders
        .iter()
        .filter(|order_row| order_row.order_date >= midnight)
        .count();
    let revenue: f64 = orders.iter().map(|order_row| order_row.total).sum();

    let low_stock_items = crate::entities::Product::find()
        .all(db)
        .await?
        .iter()
        .filter(|product_row| inventory::is_low_stock(product_row))
        .count();

    let new_clients = Client::find()
        .all(db)
        .await?
        .iter()
        .filter(|client_row| {
            client_row
                .last_active
                .is_some_and(|last_active| last_active >= window_start)
        })
        .count();

    Ok(Analytics {
        orders_today,
        revenue,
        low_stock_items,
        new_clients,
    })
}
