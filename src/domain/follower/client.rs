//! Followers sub-client: follow/unfollow and copy performance.

use crate::client::CopyTradeClient;
use crate::domain::follower::wire::{FollowTraderRequest, UnfollowTraderRequest};
use crate::domain::follower::{Follower, FollowerFilters, FollowerPerformance, UnfollowResponse};
use crate::domain::Listing;
use crate::error::ApiResult;
use crate::http::sparse_query;

pub struct Followers<'a> {
    pub(crate) client: &'a CopyTradeClient,
}

impl<'a> Followers<'a> {
    /// List following relationships, optionally filtered.
    pub async fn list(&self, filters: Option<FollowerFilters>) -> ApiResult<Listing<Follower>> {
        let query = sparse_query(&filters)?;
        Ok(self.client.http.get("/followers/", &query).await?)
    }

    /// Start following a trader.
    ///
    /// A duplicate follow or an out-of-range percentage is rejected by the
    /// backend and returned as a status error with its message intact.
    pub async fn follow(&self, request: FollowTraderRequest) -> ApiResult<Follower> {
        Ok(self
            .client
            .http
            .post("/followers/follow_trader/", &request)
            .await?)
    }

    pub async fn unfollow(&self, trader_id: i64) -> ApiResult<UnfollowResponse> {
        let body = UnfollowTraderRequest { trader_id };
        Ok(self
            .client
            .http
            .post("/followers/unfollow_trader/", &body)
            .await?)
    }

    pub async fn performance(&self, follower_id: i64) -> ApiResult<FollowerPerformance> {
        let path = format!("/followers/{}/performance/", follower_id);
        Ok(self.client.http.get(&path, &[]).await?)
    }
}
