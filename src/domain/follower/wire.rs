//! Request bodies for follower endpoints.

use serde::{Deserialize, Serialize};

/// Body for POST /followers/follow_trader/.
///
/// [`FollowTraderRequest::new`] fills in the defaults: auto-copy on, 100 %
/// copy size, no initial investment. Bounds are checked by the backend only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowTraderRequest {
    pub trader_id: i64,
    pub auto_copy_trades: bool,
    pub copy_percentage: f64,
    pub initial_investment: f64,
}

impl FollowTraderRequest {
    pub const DEFAULT_AUTO_COPY: bool = true;
    pub const DEFAULT_COPY_PERCENTAGE: f64 = 100.0;
    pub const DEFAULT_INITIAL_INVESTMENT: f64 = 0.0;

    pub fn new(trader_id: i64) -> Self {
        Self {
            trader_id,
            auto_copy_trades: Self::DEFAULT_AUTO_COPY,
            copy_percentage: Self::DEFAULT_COPY_PERCENTAGE,
            initial_investment: Self::DEFAULT_INITIAL_INVESTMENT,
        }
    }

    pub fn with_auto_copy(mut self, auto_copy_trades: bool) -> Self {
        self.auto_copy_trades = auto_copy_trades;
        self
    }

    pub fn with_copy_percentage(mut self, copy_percentage: f64) -> Self {
        self.copy_percentage = copy_percentage;
        self
    }

    pub fn with_initial_investment(mut self, initial_investment: f64) -> Self {
        self.initial_investment = initial_investment;
        self
    }
}

/// Body for POST /followers/unfollow_trader/.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnfollowTraderRequest {
    pub trader_id: i64,
}
