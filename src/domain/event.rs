//! Read-only sporting data supplied by the odds provider.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{BookmakerKey, EventId, MarketKey, Price};

/// A sporting event as seen by the slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportEvent {
    pub id: EventId,
    pub sport_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport_title: Option<String>,
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub completed: bool,
}

impl SportEvent {
    /// Create an upcoming event.
    pub fn new(
        id: impl Into<EventId>,
        sport_key: impl Into<String>,
        commence_time: DateTime<Utc>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sport_key: sport_key.into(),
            sport_title: None,
            commence_time,
            home_team: home_team.into(),
            away_team: away_team.into(),
            completed: false,
        }
    }

    /// Attach a human-readable sport title.
    #[must_use]
    pub fn with_sport_title(mut self, title: impl Into<String>) -> Self {
        self.sport_title = Some(title.into());
        self
    }

    /// "Home vs Away".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}

/// A wagering option with its decimal price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: Price,
    /// Handicap or total line, e.g. `2.5` for "Over 2.5".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Outcome {
    /// Create an outcome without validating the price.
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
            point: None,
            description: None,
        }
    }

    /// Create an outcome, rejecting non-positive prices.
    pub fn try_new(name: impl Into<String>, price: Price) -> Result<Self, DomainError> {
        if price <= Decimal::ZERO {
            return Err(DomainError::NonPositivePrice { price });
        }
        Ok(Self::new(name, price))
    }

    #[must_use]
    pub fn with_point(mut self, point: Decimal) -> Self {
        self.point = Some(point);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A betting category on one bookmaker, holding uniquely-named outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    key: MarketKey,
    outcomes: Vec<Outcome>,
}

impl Market {
    /// Create a market, validating that outcome names are unique.
    pub fn try_new(key: MarketKey, outcomes: Vec<Outcome>) -> Result<Self, DomainError> {
        if outcomes.is_empty() {
            return Err(DomainError::EmptyOutcomes);
        }
        let mut seen = HashSet::new();
        for outcome in &outcomes {
            if !seen.insert(outcome.name.as_str()) {
                return Err(DomainError::DuplicateOutcome {
                    market: key.to_string(),
                    name: outcome.name.clone(),
                });
            }
        }
        Ok(Self { key, outcomes })
    }

    #[must_use]
    pub fn key(&self) -> &MarketKey {
        &self.key
    }

    /// Outcomes in provider order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Look up an outcome by name.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

/// A bookmaker and the markets it prices for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmaker {
    pub key: BookmakerKey,
    pub title: String,
    pub markets: Vec<Market>,
}

impl Bookmaker {
    /// Look up a market by key.
    #[must_use]
    pub fn market(&self, key: &MarketKey) -> Option<&Market> {
        self.markets.iter().find(|m| m.key() == key)
    }

    /// The outcome this bookmaker prices under `market`, if offered.
    #[must_use]
    pub fn quote(&self, market: &MarketKey, outcome: &str) -> Option<&Outcome> {
        self.market(market)?.outcome(outcome)
    }
}
