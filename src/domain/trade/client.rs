//! Trades sub-client: trade queries, creation, updates and closing.

use crate::client::CopyTradeClient;
use crate::domain::trade::wire::{CloseTradeRequest, TradePayload};
use crate::domain::trade::{Trade, TradeFilters, TradeStatus, DEFAULT_TOP_PERFORMERS_LIMIT};
use crate::domain::Listing;
use crate::error::ApiResult;
use crate::http::sparse_query;

pub struct Trades<'a> {
    pub(crate) client: &'a CopyTradeClient,
}

impl<'a> Trades<'a> {
    /// List trades, optionally filtered.
    pub async fn list(&self, filters: Option<TradeFilters>) -> ApiResult<Listing<Trade>> {
        let query = sparse_query(&filters)?;
        Ok(self.client.http.get("/trades/", &query).await?)
    }

    pub async fn get(&self, trade_id: i64) -> ApiResult<Trade> {
        let path = format!("/trades/{}/", trade_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }

    /// Create a trade. The payload is not validated client-side; a malformed
    /// one comes back as a 400 status error with the backend's field errors.
    pub async fn create(&self, payload: &TradePayload) -> ApiResult<Trade> {
        Ok(self.client.http.post("/trades/", payload).await?)
    }

    /// Full-replacement update.
    pub async fn update(&self, trade_id: i64, payload: &TradePayload) -> ApiResult<Trade> {
        let path = format!("/trades/{}/", trade_id);
        Ok(self.client.http.put(&path, payload).await?)
    }

    /// Close an open trade at `exit_price` (open → closed).
    pub async fn close(&self, trade_id: i64, exit_price: f64) -> ApiResult<Trade> {
        let path = format!("/trades/{}/close_trade/", trade_id);
        let body = CloseTradeRequest { exit_price };
        Ok(self.client.http.post(&path, &body).await?)
    }

    pub async fn by_status(&self, status: TradeStatus) -> ApiResult<Vec<Trade>> {
        let query = [("status".to_string(), status.as_str().to_string())];
        Ok(self.client.http.get("/trades/by_status/", &query).await?)
    }

    /// Best closed trades, ranked by the backend. `None` asks for 10.
    pub async fn top_performers(&self, limit: Option<u32>) -> ApiResult<Vec<Trade>> {
        let limit = limit.unwrap_or(DEFAULT_TOP_PERFORMERS_LIMIT);
        let query = [("limit".to_string(), limit.to_string())];
        Ok(self.client.http.get("/trades/top_performers/", &query).await?)
    }
}
