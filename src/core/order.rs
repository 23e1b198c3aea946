//! Order fulfillment business logic.
//!
//! `create_order` is the one multi-entity workflow in the system: persist the
//! order header, persist its line items, decrement stock per line, and append
//! an activity entry, as a single transaction that either fully applies or
//! fully fails. Status updates and their activity entries are transactional
//! for the same reason. Line items capture the unit price at submission time;
//! later product price edits never change historical totals.

use crate::{
    core::{activity, product as inventory},
    entities::{Client, Order, client, order, order::OrderStatus, order_item, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Caller-supplied order header fields.
///
/// The total is deliberately absent: it is computed from the line items inside
/// `create_order`, so `order.total == sum(unit_price * quantity)` holds by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Human-facing order identifier, unique
    pub order_number: String,
    /// The client placing the order
    pub client_id: i64,
    /// When the order was placed
    pub order_date: DateTimeUtc,
    /// Initial status
    pub status: OrderStatus,
}

/// One caller-supplied line item.
///
/// `unit_price` is the price at submission time, not re-derived from the
/// current product price.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemDraft {
    /// The product being ordered
    pub product_id: i64,
    /// Units ordered, at least 1
    pub quantity: i32,
    /// Price-per-unit snapshot
    pub unit_price: f64,
}

/// A persisted line item joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemWithProduct {
    /// The persisted line item
    pub item: order_item::Model,
    /// The referenced product (post-decrement state at hydration time)
    pub product: product::Model,
}

/// A fully hydrated order: header, resolved client, and line items with
/// resolved product details.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithDetails {
    /// The order header
    pub order: order::Model,
    /// The client who placed the order
    pub client: client::Model,
    /// Line items in the order they were supplied
    pub items: Vec<OrderItemWithProduct>,
}

/// Order-status transition policy.
///
/// The reference system imposes no transition graph, so `Unrestricted` is the
/// default; `Strict` is the optional hardening where cancelled and completed
/// are terminal and work moves pending -> processing -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may follow any status
    #[default]
    Unrestricted,
    /// pending -> processing -> completed, cancel from any live status,
    /// cancelled/completed terminal
    Strict,
}

impl TransitionPolicy {
    /// Builds the policy from the settings toggle.
    #[must_use]
    pub const fn from_strict_flag(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Unrestricted }
    }

    /// Whether this policy permits moving `from` -> `to`.
    #[must_use]
    pub const fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Strict => matches!(
                (from, to),
                (
                    OrderStatus::Pending,
                    OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Cancelled
                ) | (
                    OrderStatus::Processing,
                    OrderStatus::Processing | OrderStatus::Completed | OrderStatus::Cancelled
                ) | (OrderStatus::Completed, OrderStatus::Completed)
                    | (OrderStatus::Cancelled, OrderStatus::Cancelled)
            ),
        }
    }
}

/// Creates an order with its line items, decrementing stock and logging the
/// activity, as one atomic unit.
///
/// Preconditions checked before any persistence: a non-empty item list, every
/// quantity at least 1, every unit price finite and non-negative. Inside the
/// transaction the client and every product must resolve (`NotFound`
/// otherwise) and the order number must be unused (`Conflict`); any failure
/// rolls the whole workflow back, leaving no order header, no items, no stock
/// change, and no activity entry.
///
/// Per line item the referenced product's stock is decremented by the item
/// quantity, floored at 0: a quantity exceeding available stock drives the
/// product to exactly 0 rather than rejecting the order.
///
/// # Returns
/// The fully hydrated order, including resolved client and line items with
/// resolved product details.
pub async fn create_order(
    db: &DatabaseConnection,
    draft: OrderDraft,
    items: &[OrderItemDraft],
) -> Result<OrderWithDetails> {
    if items.is_empty() {
        return Err(Error::EmptyOrder);
    }

    if draft.order_number.trim().is_empty() {
        return Err(Error::InvalidInput {
            message: "Order number cannot be empty".to_string(),
        });
    }

    for item in items {
        if item.quantity < 1 {
            return Err(Error::InvalidQuantity {
                quantity: item.quantity,
            });
        }
        if item.unit_price < 0.0 || !item.unit_price.is_finite() {
            return Err(Error::InvalidAmount {
                amount: item.unit_price,
            });
        }
    }

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let _client = Client::find_by_id(draft.client_id)
        .one(&txn)
        .await?
        .ok_or(Error::ClientNotFound {
            id: draft.client_id,
        })?;

    let duplicate = Order::find()
        .filter(order::Column::OrderNumber.eq(draft.order_number.as_str()))
        .one(&txn)
        .await?;
    if duplicate.is_some() {
        return Err(Error::DuplicateOrderNumber {
            order_number: draft.order_number,
        });
    }

    // Every product must resolve before anything is written
    for item in items {
        let _product = product::Entity::find_by_id(item.product_id)
            .one(&txn)
            .await?
            .ok_or(Error::ProductNotFound {
                id: item.product_id,
            })?;
    }

    let total: f64 = items
        .iter()
        .map(|item| item.unit_price * f64::from(item.quantity))
        .sum();

    let now = chrono::Utc::now();
    let order_row = order::ActiveModel {
        order_number: Set(draft.order_number.clone()),
        client_id: Set(draft.client_id),
        order_date: Set(draft.order_date),
        status: Set(draft.status),
        total: Set(total),
        created_at: Set(now.naive_utc()),
        ..Default::default()
    };
    let order_row = order_row.insert(&txn).await?;

    // Line items in caller-supplied order, each followed by its stock decrement
    let mut hydrated_items = Vec::with_capacity(items.len());
    for item in items {
        let item_row = order_item::ActiveModel {
            order_id: Set(order_row.id),
            product_id: Set(item.product_id),
            quantity: Set(item.quantity),
            unit_price: Set(item.unit_price),
            created_at: Set(now.naive_utc()),
            ..Default::default()
        };
        let item_row = item_row.insert(&txn).await?;

        let updated_product = inventory::deduct_stock(&txn, item.product_id, item.quantity).await?;

        hydrated_items.push(OrderItemWithProduct {
            item: item_row,
            product: updated_product,
        });
    }

    activity::record_activity(
        &txn,
        draft.client_id,
        "order",
        format!("Placed order #{}", order_row.order_number),
        Some(order_row.order_number.clone()),
    )
    .await?;

    // Re-read the client so the hydrated order reflects the last_active touch
    let client = Client::find_by_id(draft.client_id)
        .one(&txn)
        .await?
        .ok_or(Error::ClientNotFound {
            id: draft.client_id,
        })?;

    txn.commit().await?;

    Ok(OrderWithDetails {
        order: order_row,
        client,
        items: hydrated_items,
    })
}

/// Updates an order's status, appending an "order_status" activity entry in
/// the same transaction.
///
/// The transition is checked against the supplied policy; with
/// `TransitionPolicy::Unrestricted` (the default) any status may follow any
/// status.
pub async fn update_order_status(
    db: &DatabaseConnection,
    order_id: i64,
    new_status: OrderStatus,
    policy: TransitionPolicy,
) -> Result<order::Model> {
    let txn = db.begin().await?;

    let existing = Order::find_by_id(order_id)
        .one(&txn)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;

    if !policy.allows(existing.status, new_status) {
        return Err(Error::InvalidStatusTransition {
            from: existing.status,
            to: new_status,
        });
    }

    let order_number = existing.order_number.clone();
    let client_id = existing.client_id;

    let mut active: order::ActiveModel = existing.into();
    active.status = Set(new_status);
    let updated = active.update(&txn).await?;

    activity::record_activity(
        &txn,
        client_id,
        "order_status",
        format!("Order #{order_number} status changed to {new_status}"),
        Some(order_number),
    )
    .await?;

    txn.commit().await?;

    Ok(updated)
}

/// Retrieves a specific order by its unique ID.
pub async fn get_order_by_id(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<order::Model>> {
    Order::find_by_id(order_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all orders, newest first.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>> {
    Order::find()
        .order_by_desc(order::Column::OrderDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Hydrates an order with its client and line items for display.
///
/// This is a projection read: a dangling client or product reference is
/// papered over with an "Unknown Client"/"Unknown Product" placeholder rather
/// than failing (the workflow writes above still treat unresolved references
/// as hard errors). Returns `None` when the order itself does not exist.
pub async fn get_order_details(
    db: &DatabaseConnection,
    order_id: i64,
) -> Result<Option<OrderWithDetails>> {
    let Some(order_row) = Order::find_by_id(order_id).one(db).await? else {
        return Ok(None);
    };

    let client = Client::find_by_id(order_row.client_id)
        .one(db)
        .await?
        .unwrap_or_else(unknown_client);

    let item_rows = order_item::Entity::find()
        .filter(order_item::Column::OrderId.eq(order_id))
        .order_by_asc(order_item::Column::Id)
        .all(db)
        .await?;

    let mut items = Vec::with_capacity(item_rows.len());
    for item in item_rows {
        let resolved = product::Entity::find_by_id(item.product_id)
            .one(db)
            .await?
            .unwrap_or_else(unknown_product);
        items.push(OrderItemWithProduct {
            item,
            product: resolved,
        });
    }

    Ok(Some(OrderWithDetails {
        order: order_row,
        client,
        items,
    }))
}

fn unknown_client() -> client::Model {
    client::Model {
        id: 0,
        name: "Unknown Client".to_string(),
        email: String::new(),
        phone: None,
        avatar_url: None,
        last_active: None,
        created_at: chrono::NaiveDateTime::default(),
    }
}

fn unknown_product() -> product::Model {
    product::Model {
        id: 0,
        name: "Unknown Product".to_string(),
        description: String::new(),
        price: 0.0,
        stock_quantity: 0,
        low_stock_threshold: 0,
        image_url: None,
        created_at: chrono::NaiveDateTime::default(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::{ClientActivity, client_activity};
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_order_rejects_empty_item_list() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_order(&db, test_order_draft("ORD-0001", 1), &[]).await;
        assert!(matches!(result.unwrap_err(), Error::EmptyOrder));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_rejects_bad_line_items() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_order(
            &db,
            test_order_draft("ORD-0001", 1),
            &[OrderItemDraft {
                product_id: 1,
                quantity: 0,
                unit_price: 10.0,
            }],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidQuantity { quantity: 0 }
        ));

        let result = create_order(
            &db,
            test_order_draft("ORD-0001", 1),
            &[OrderItemDraft {
                product_id: 1,
                quantity: 1,
                unit_price: -1.0,
            }],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1.0 }
        ));

        let result = create_order(
            &db,
            test_order_draft("   ", 1),
            &[OrderItemDraft {
                product_id: 1,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidInput { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_unknown_client() -> Result<()> {
        let db = setup_test_db().await?;
        let product = create_test_product(&db, "Widget").await?;

        let result = create_order(
            &db,
            test_order_draft("ORD-0001", 999),
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ClientNotFound { id: 999 }
        ));

        // Nothing persisted
        assert!(get_all_orders(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_unknown_product_rolls_back_everything() -> Result<()> {
        let (db, client) = setup_with_client().await?;
        let product = create_custom_product(&db, "Widget", 10.0, 8, 5).await?;

        // Second line item references a product that does not exist
        let result = create_order(
            &db,
            test_order_draft("ORD-0001", client.id),
            &[
                OrderItemDraft {
                    product_id: product.id,
                    quantity: 2,
                    unit_price: 10.0,
                },
                OrderItemDraft {
                    product_id: 999,
                    quantity: 1,
                    unit_price: 5.0,
                },
            ],
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::ProductNotFound { id: 999 }
        ));

        // All-or-nothing: no header, no items, no stock change, no activity
        assert!(get_all_orders(&db).await?.is_empty());
        let untouched = crate::core::product::get_product_by_id(&db, product.id)
            .await?
            .unwrap();
        assert_eq!(untouched.stock_quantity, 8);
        let order_activities = ClientActivity::find()
            .filter(client_activity::Column::ActivityType.eq("order"))
            .all(&db)
            .await?;
        assert!(order_activities.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_duplicate_order_number() -> Result<()> {
        let (db, client, product) = setup_with_client_and_product().await?;

        let items = [OrderItemDraft {
            product_id: product.id,
            quantity: 1,
            unit_price: 10.0,
        }];
        create_order(&db, test_order_draft("ORD-0001", client.id), &items).await?;

        let result = create_order(&db, test_order_draft("ORD-0001", client.id), &items).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::DuplicateOrderNumber { .. }
        ));

        assert_eq!(get_all_orders(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_happy_path() -> Result<()> {
        // Scenario: product starts at 3 with threshold 5, so it is already low
        // stock; ordering 2 leaves 1
        let (db, client) = setup_with_client().await?;
        let product = create_custom_product(&db, "Blue T-Shirt", 19.99, 3, 5).await?;

        let low_stock = crate::core::product::get_low_stock_items(&db).await?;
        assert_eq!(low_stock.len(), 1);

        let details = create_order(
            &db,
            test_order_draft("ORD-2305", client.id),
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 2,
                unit_price: 19.99,
            }],
        )
        .await?;

        assert_eq!(details.order.order_number, "ORD-2305");
        assert_eq!(details.order.total, 2.0 * 19.99);
        assert_eq!(details.client.id, client.id);
        assert_eq!(details.items.len(), 1);
        assert_eq!(details.items[0].item.quantity, 2);
        assert_eq!(details.items[0].item.unit_price, 19.99);
        // Hydrated product reflects the decrement
        assert_eq!(details.items[0].product.stock_quantity, 1);

        // Exactly one "order" activity, correlated by order number
        let activities = ClientActivity::find()
            .filter(client_activity::Column::ActivityType.eq("order"))
            .all(&db)
            .await?;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].client_id, client.id);
        assert_eq!(activities[0].description, "Placed order #ORD-2305");
        assert_eq!(activities[0].related_id, Some("ORD-2305".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_total_sums_all_lines() -> Result<()> {
        let (db, client) = setup_with_client().await?;
        let shirt = create_custom_product(&db, "Shirt", 19.99, 10, 5).await?;
        let case = create_custom_product(&db, "Case", 24.99, 10, 5).await?;

        let details = create_order(
            &db,
            test_order_draft("ORD-0001", client.id),
            &[
                OrderItemDraft {
                    product_id: shirt.id,
                    quantity: 3,
                    unit_price: 19.99,
                },
                OrderItemDraft {
                    product_id: case.id,
                    quantity: 2,
                    unit_price: 24.99,
                },
            ],
        )
        .await?;

        let expected: f64 = 3.0 * 19.99 + 2.0 * 24.99;
        assert_eq!(details.order.total, expected);

        // The invariant holds over the persisted items too
        let persisted_sum: f64 = details
            .items
            .iter()
            .map(|line| line.item.unit_price * f64::from(line.item.quantity))
            .sum();
        assert_eq!(details.order.total, persisted_sum);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_floors_stock_at_zero() -> Result<()> {
        // Scenario: stock 2, ordered quantity 5: stock driven to exactly 0,
        // order still created
        let (db, client) = setup_with_client().await?;
        let product = create_custom_product(&db, "Widget", 10.0, 2, 5).await?;

        let details = create_order(
            &db,
            test_order_draft("ORD-0001", client.id),
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 5,
                unit_price: 10.0,
            }],
        )
        .await?;

        assert_eq!(details.items[0].product.stock_quantity, 0);
        assert_eq!(details.order.total, 50.0);

        let persisted = crate::core::product::get_product_by_id(&db, product.id)
            .await?
            .unwrap();
        assert_eq!(persisted.stock_quantity, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_order_price_snapshot_survives_price_edit() -> Result<()> {
        let (db, client, product) = setup_with_client_and_product().await?;

        let details = create_order(
            &db,
            test_order_draft("ORD-0001", client.id),
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await?;

        // Later price edit must not retroactively change the line or total
        crate::core::product::update_product(
            &db,
            product.id,
            crate::core::product::ProductPatch {
                price: Some(99.0),
                ..Default::default()
            },
        )
        .await?;

        let hydrated = get_order_details(&db, details.order.id).await?.unwrap();
        assert_eq!(hydrated.items[0].item.unit_price, 10.0);
        assert_eq!(hydrated.order.total, 10.0);
        assert_eq!(hydrated.items[0].product.price, 99.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_status_unrestricted() -> Result<()> {
        // Scenario: completed -> cancelled succeeds without restriction and
        // appends an "order_status" activity
        let (db, client, product) = setup_with_client_and_product().await?;

        let details = create_order(
            &db,
            OrderDraft {
                order_number: "ORD-0001".to_string(),
                client_id: client.id,
                order_date: chrono::Utc::now(),
                status: OrderStatus::Completed,
            },
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await?;

        let updated = update_order_status(
            &db,
            details.order.id,
            OrderStatus::Cancelled,
            TransitionPolicy::Unrestricted,
        )
        .await?;
        assert_eq!(updated.status, OrderStatus::Cancelled);

        let activities = ClientActivity::find()
            .filter(client_activity::Column::ActivityType.eq("order_status"))
            .all(&db)
            .await?;
        assert_eq!(activities.len(), 1);
        assert_eq!(
            activities[0].description,
            "Order #ORD-0001 status changed to cancelled"
        );
        assert_eq!(activities[0].related_id, Some("ORD-0001".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_status_strict_rejects_leaving_cancelled() -> Result<()> {
        let (db, client, product) = setup_with_client_and_product().await?;

        let details = create_order(
            &db,
            OrderDraft {
                order_number: "ORD-0001".to_string(),
                client_id: client.id,
                order_date: chrono::Utc::now(),
                status: OrderStatus::Cancelled,
            },
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await?;

        let result = update_order_status(
            &db,
            details.order.id,
            OrderStatus::Processing,
            TransitionPolicy::from_strict_flag(true),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidStatusTransition {
                from: OrderStatus::Cancelled,
                to: OrderStatus::Processing
            }
        ));

        // Rejection left no status change and no activity
        let unchanged = get_order_by_id(&db, details.order.id).await?.unwrap();
        assert_eq!(unchanged.status, OrderStatus::Cancelled);
        let activities = ClientActivity::find()
            .filter(client_activity::Column::ActivityType.eq("order_status"))
            .all(&db)
            .await?;
        assert!(activities.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_order_status_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_order_status(
            &db,
            999,
            OrderStatus::Completed,
            TransitionPolicy::Unrestricted,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::OrderNotFound { id: 999 }
        ));

        Ok(())
    }

    #[test]
    fn test_strict_policy_transition_table() {
        let policy = TransitionPolicy::Strict;

        assert!(policy.allows(OrderStatus::Pending, OrderStatus::Processing));
        assert!(policy.allows(OrderStatus::Processing, OrderStatus::Completed));
        assert!(policy.allows(OrderStatus::Pending, OrderStatus::Cancelled));
        assert!(policy.allows(OrderStatus::Processing, OrderStatus::Cancelled));
        // Same-status updates are always permitted
        assert!(policy.allows(OrderStatus::Completed, OrderStatus::Completed));

        assert!(!policy.allows(OrderStatus::Pending, OrderStatus::Completed));
        assert!(!policy.allows(OrderStatus::Completed, OrderStatus::Pending));
        assert!(!policy.allows(OrderStatus::Completed, OrderStatus::Cancelled));
        assert!(!policy.allows(OrderStatus::Cancelled, OrderStatus::Pending));
    }

    #[test]
    fn test_unrestricted_policy_allows_everything() {
        let policy = TransitionPolicy::Unrestricted;
        let all = [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ];
        for from in all {
            for to in all {
                assert!(policy.allows(from, to));
            }
        }
    }

    #[tokio::test]
    async fn test_get_order_details_missing_order() -> Result<()> {
        let db = setup_test_db().await?;

        let details = get_order_details(&db, 999).await?;
        assert!(details.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_orders_newest_first() -> Result<()> {
        let (db, client, product) = setup_with_client_and_product().await?;

        let older = create_order(
            &db,
            OrderDraft {
                order_number: "ORD-0001".to_string(),
                client_id: client.id,
                order_date: chrono::Utc::now() - chrono::Duration::days(1),
                status: OrderStatus::Completed,
            },
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await?;
        let newer = create_order(
            &db,
            test_order_draft("ORD-0002", client.id),
            &[OrderItemDraft {
                product_id: product.id,
                quantity: 1,
                unit_price: 10.0,
            }],
        )
        .await?;

        let orders = get_all_orders(&db).await?;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, newer.order.id);
        assert_eq!(orders[1].id, older.order.id);

        Ok(())
    }
}
