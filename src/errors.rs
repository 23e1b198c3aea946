//! Unified error handling for `orderdesk`.
//!
//! Every fallible operation in the crate returns [`Result`]. Expected,
//! recoverable-by-caller failures (missing entities, bad input, unique-key
//! conflicts) get their own variants so the boundary layer can map them onto
//! client-facing responses via [`Error::kind`]; store failures propagate
//! unmodified as [`Error::Database`].

use crate::entities::order::OrderStatus;
use thiserror::Error;

/// Unified error type for all `orderdesk` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment problem
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Malformed input that is not a quantity or amount, e.g. a blank name
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// Referenced client id does not resolve
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The client id that failed to resolve
        id: i64,
    },

    /// Referenced product id does not resolve
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that failed to resolve
        id: i64,
    },

    /// Referenced order id does not resolve
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// The order id that failed to resolve
        id: i64,
    },

    /// An order draft arrived with no line items
    #[error("Order must contain at least one line item")]
    EmptyOrder,

    /// A quantity that must be a positive integer was not
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The offending quantity
        quantity: i32,
    },

    /// A currency amount that must be finite and non-negative was not
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: f64,
    },

    /// The configured transition policy forbids this status change
    #[error("Invalid order status transition: {from} -> {to}")]
    InvalidStatusTransition {
        /// Status the order currently has
        from: OrderStatus,
        /// Status the caller asked for
        to: OrderStatus,
    },

    /// The order number is already taken
    #[error("Order number already exists: {order_number}")]
    DuplicateOrderNumber {
        /// The conflicting order number
        order_number: String,
    },

    /// The client email is already registered
    #[error("Client email already exists: {email}")]
    DuplicateEmail {
        /// The conflicting email address
        email: String,
    },

    /// The username is already taken
    #[error("Username already exists: {username}")]
    DuplicateUsername {
        /// The conflicting username
        username: String,
    },

    /// Store-level failure, propagated unmodified
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Coarse error categories for the boundary layer.
///
/// The HTTP layer (an external collaborator) maps these onto status codes:
/// `NotFound` -> 404, `InvalidArgument` -> 400, `Conflict` -> 409,
/// `Unexpected` -> 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced entity id does not resolve
    NotFound,
    /// Malformed or out-of-range input
    InvalidArgument,
    /// Duplicate unique key
    Conflict,
    /// Store/connectivity failure or misconfiguration
    Unexpected,
}

impl Error {
    /// Returns the coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ClientNotFound { .. }
            | Self::ProductNotFound { .. }
            | Self::OrderNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput { .. }
            | Self::EmptyOrder
            | Self::InvalidQuantity { .. }
            | Self::InvalidAmount { .. }
            | Self::InvalidStatusTransition { .. } => ErrorKind::InvalidArgument,
            Self::DuplicateOrderNumber { .. }
            | Self::DuplicateEmail { .. }
            | Self::DuplicateUsername { .. } => ErrorKind::Conflict,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
