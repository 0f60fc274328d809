//! Trade domain: trades opened by traders and their open → closed lifecycle.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::TradePayload;

/// Number of trades requested by `top_performers` when no limit is given.
pub const DEFAULT_TOP_PERFORMERS_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

/// Trade lifecycle status. Only the backend moves a trade to `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Pending,
    Open,
    Closed,
}

impl TradeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trade as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: i64,
    /// Owning trader id.
    pub trader: i64,
    #[serde(default)]
    pub trader_name: Option<String>,
    pub currency_pair: String,
    pub direction: Direction,
    pub entry_price: f64,
    #[serde(default)]
    pub exit_price: Option<f64>,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub lot_size: f64,
    #[serde(default)]
    pub profit_loss: f64,
    #[serde(default)]
    pub roi_percentage: f64,
    pub status: TradeStatus,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub risk_reward_ratio: f64,
}

impl Trade {
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }
}

/// Query filters for GET /trades/.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeFilters {
    /// Owning trader id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_pair: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeStatus>,
    /// Free-text search over currency pair and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    /// Pass-through keys sent verbatim. A key that names a typed field
    /// overrides it.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl TradeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trader(mut self, trader_id: i64) -> Self {
        self.trader = Some(trader_id);
        self
    }

    pub fn with_currency_pair(mut self, pair: impl Into<String>) -> Self {
        self.currency_pair = Some(pair.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_status(mut self, status: TradeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Add a query key the SDK has no typed field for. Using a typed field's
    /// key replaces that field's value in the query.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
