//! Follower domain: copy-trading relationships between an account and a trader.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use wire::FollowTraderRequest;

/// A following relationship with its copy parameters and running balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Follower {
    pub id: i64,
    /// Followed trader id.
    pub trader: i64,
    #[serde(default)]
    pub trader_name: Option<String>,
    /// Following account (user id).
    pub follower_user: i64,
    #[serde(default)]
    pub follower_name: Option<String>,
    pub auto_copy_trades: bool,
    pub copy_percentage: f64,
    #[serde(default)]
    pub initial_investment: f64,
    #[serde(default)]
    pub current_balance: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub commission_paid: f64,
    #[serde(default)]
    pub followed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregated copy performance for one follower (read-only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowerPerformance {
    pub total_copied_trades: i64,
    pub closed_trades: i64,
    pub winning_trades: i64,
    pub total_profit: f64,
    pub commission_paid: f64,
    pub current_balance: f64,
    /// Only reported once the follower has closed trades.
    #[serde(default)]
    pub win_rate: Option<f64>,
}

/// Response for POST /followers/unfollow_trader/.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnfollowResponse {
    pub status: String,
}

/// Query filters for GET /followers/.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FollowerFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_user: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_copy_trades: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    /// Pass-through keys sent verbatim. A key that names a typed field
    /// overrides it.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FollowerFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trader(mut self, trader_id: i64) -> Self {
        self.trader = Some(trader_id);
        self
    }

    pub fn with_follower_user(mut self, user_id: i64) -> Self {
        self.follower_user = Some(user_id);
        self
    }

    pub fn with_auto_copy(mut self, auto_copy_trades: bool) -> Self {
        self.auto_copy_trades = Some(auto_copy_trades);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_without_win_rate() {
        let json = r#"{
            "total_copied_trades": 0,
            "closed_trades": 0,
            "winning_trades": 0,
            "total_profit": 0.0,
            "commission_paid": 0.0,
            "current_balance": 500.0
        }"#;
        let perf: FollowerPerformance = serde_json::from_str(json).unwrap();
        assert!(perf.win_rate.is_none());
        assert_eq!(perf.current_balance, 500.0);
    }

    #[test]
    fn test_follower_filters_auto_copy_false_is_sent() {
        let value = serde_json::to_value(FollowerFilters::new().with_auto_copy(false)).unwrap();
        assert_eq!(value, serde_json::json!({"auto_copy_trades": false}));
    }
}
