//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use betslip::domain::error::DomainError;
//! use betslip::domain::{Market, MarketKey, Outcome};
//! use rust_decimal_macros::dec;
//!
//! let result = Market::try_new(
//!     MarketKey::new("h2h"),
//!     vec![Outcome::new("Arsenal", dec!(2.10)), Outcome::new("Arsenal", dec!(2.20))],
//! );
//!
//! assert!(matches!(result, Err(DomainError::DuplicateOutcome { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Outcome prices are decimal odds and must be positive.
    #[error("price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Outcome names are unique within a market.
    #[error("duplicate outcome '{name}' in market {market}")]
    DuplicateOutcome {
        /// Market key.
        market: String,
        /// The repeated outcome name.
        name: String,
    },

    /// Markets must have at least one outcome.
    #[error("outcomes cannot be empty")]
    EmptyOutcomes,
}
