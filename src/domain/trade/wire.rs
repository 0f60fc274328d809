//! Request bodies for trade endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::trade::Direction;

/// Body for POST /trades/ and PUT /trades/{id}/.
///
/// There is deliberately no `status` field: the only way to close a trade is
/// the dedicated close endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePayload {
    /// Owning trader id.
    pub trader: i64,
    /// Instrument, e.g. `EURUSD`.
    pub currency_pair: String,
    pub direction: Direction,
    pub entry_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<f64>,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub lot_size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<f64>,
    /// Ask the backend to replicate the new trade to auto-copy followers.
    /// Backend default is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_copy: Option<bool>,
}

impl TradePayload {
    pub fn new(
        trader: i64,
        currency_pair: impl Into<String>,
        direction: Direction,
        entry_price: f64,
        lot_size: f64,
    ) -> Self {
        Self {
            trader,
            currency_pair: currency_pair.into(),
            direction,
            entry_price,
            exit_price: None,
            stop_loss: 0.0,
            take_profit: 0.0,
            lot_size,
            description: None,
            risk_reward_ratio: None,
            auto_copy: None,
        }
    }

    /// Set stop-loss and take-profit levels.
    pub fn with_levels(mut self, stop_loss: f64, take_profit: f64) -> Self {
        self.stop_loss = stop_loss;
        self.take_profit = take_profit;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_risk_reward_ratio(mut self, ratio: f64) -> Self {
        self.risk_reward_ratio = Some(ratio);
        self
    }

    pub fn with_auto_copy(mut self, auto_copy: bool) -> Self {
        self.auto_copy = Some(auto_copy);
        self
    }
}

/// Body for POST /trades/{id}/close_trade/.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloseTradeRequest {
    pub exit_price: f64,
}
