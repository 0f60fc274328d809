//! Auth sub-client: login, token refresh, registration, profile.

use serde::Serialize;

use crate::auth::{
    AuthMessage, ChangePasswordRequest, ProfileUpdate, RefreshedToken, RegisterRequest,
    RegisteredUser, TokenPair, TokenVerification, UpdateProfileRequest, UserProfile,
};
use crate::client::CopyTradeClient;
use crate::error::ApiResult;

/// Body for POST /token/.
#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Body for POST /token/refresh/.
#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a CopyTradeClient,
}

impl<'a> Auth<'a> {
    /// Exchange credentials for an access/refresh token pair.
    ///
    /// Bad credentials come back as a 401 status error. The tokens are not
    /// stored; attach the access token with `CopyTradeClient::set_access_token`.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<TokenPair> {
        let body = LoginRequest { username, password };
        Ok(self.client.http.post("/token/", &body).await?)
    }

    /// Get a new access token. An invalid or expired refresh token comes back
    /// as a 401 status error.
    pub async fn refresh_token(&self, refresh: &str) -> ApiResult<RefreshedToken> {
        let body = RefreshRequest { refresh };
        Ok(self.client.http.post("/token/refresh/", &body).await?)
    }

    /// Create an account (and its trader profile). Returns fresh tokens.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisteredUser> {
        Ok(self
            .client
            .http
            .post("/auth/register/register/", request)
            .await?)
    }

    /// Profile of the account owning the attached access token.
    pub async fn profile(&self) -> ApiResult<UserProfile> {
        Ok(self.client.http.get("/auth/profile/profile/", &[]).await?)
    }

    /// Partially update the current account. A wrong `old_password` or a
    /// mismatched confirmation comes back as a 400 status error.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<ProfileUpdate> {
        Ok(self
            .client
            .http
            .put("/auth/profile/update_profile/", request)
            .await?)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<AuthMessage> {
        Ok(self
            .client
            .http
            .post("/auth/profile/change_password/", request)
            .await?)
    }

    /// Tell the backend the session is over. Tokens stay valid until they
    /// expire, so the caller should also drop them.
    pub async fn logout(&self) -> ApiResult<AuthMessage> {
        Ok(self
            .client
            .http
            .post("/auth/profile/logout/", &serde_json::json!({}))
            .await?)
    }

    /// Ask the backend whether the attached access token is still valid.
    pub async fn verify_token(&self) -> ApiResult<TokenVerification> {
        Ok(self
            .client
            .http
            .post("/auth/verify/verify_token/", &serde_json::json!({}))
            .await?)
    }
}
