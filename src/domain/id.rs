//! String-backed identifiers.
//!
//! Each id is its own type so an event id can never be passed where a
//! selection id is expected. All of them serialize as a bare string.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_id!(
    /// Event id issued by the odds provider.
    EventId
);

string_id!(
    /// Market key: `h2h`, `totals`, `spreads`.
    MarketKey
);

string_id!(
    /// Bookmaker key, e.g. `unibet`.
    BookmakerKey
);

string_id!(
    /// Confirmation id handed back once a bet is stored.
    BetId
);

string_id!(
    /// Opaque tag for whoever places the bet.
    UserId
);

/// Id of one leg on the slip.
///
/// Fresh legs get a random v4 UUID; restored legs keep the id they were saved with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SelectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SelectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SelectionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
