//! Traders sub-client: trader profiles, stats, and their trades/followers.

use crate::client::CopyTradeClient;
use crate::domain::follower::Follower;
use crate::domain::trade::Trade;
use crate::domain::trader::{Trader, TraderFilters, TraderStats};
use crate::domain::Listing;
use crate::error::ApiResult;
use crate::http::sparse_query;

pub struct Traders<'a> {
    pub(crate) client: &'a CopyTradeClient,
}

impl<'a> Traders<'a> {
    /// List traders, optionally filtered.
    pub async fn list(&self, filters: Option<TraderFilters>) -> ApiResult<Listing<Trader>> {
        let query = sparse_query(&filters)?;
        Ok(self.client.http.get("/traders/", &query).await?)
    }

    /// Get one trader. A missing id surfaces as a 404 status error.
    pub async fn get(&self, trader_id: i64) -> ApiResult<Trader> {
        let path = format!("/traders/{}/", trader_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }

    pub async fn stats(&self, trader_id: i64) -> ApiResult<TraderStats> {
        let path = format!("/traders/{}/stats/", trader_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }

    /// All trades opened by a trader.
    pub async fn trades(&self, trader_id: i64) -> ApiResult<Vec<Trade>> {
        let path = format!("/traders/{}/trades/", trader_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }

    /// Everyone following a trader.
    pub async fn followers(&self, trader_id: i64) -> ApiResult<Vec<Follower>> {
        let path = format!("/traders/{}/followers_list/", trader_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }
}
