//! Core business logic - framework-agnostic operations over the entity store.
//!
//! Every function takes the database connection (or an open transaction) as an
//! explicit argument; there is no process-wide storage singleton. The modules
//! mirror the back office's domains: inventory, clients, orders, the activity
//! log, and the derived dashboard analytics.

/// Append-only client activity log and activity feed projection
pub mod activity;
/// Derived dashboard analytics and recent-orders projection
pub mod analytics;
/// Client management
pub mod client;
/// Order fulfillment workflow and status transitions
pub mod order;
/// Product catalog and inventory ledger
pub mod product;
/// Back-office user accounts
pub mod user;
