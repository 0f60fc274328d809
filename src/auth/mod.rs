//! Authentication: JWT token pairs, login/refresh, registration, profile.
//!
//! ## Token Model
//!
//! The SDK never keeps tokens on its own. `login` and `refresh_token` return
//! them to the caller, who decides where they live and attaches the access
//! token to a client with `CopyTradeClient::set_access_token` or
//! `CopyTradeClient::with_access_token`. Requests then carry
//! `Authorization: Bearer <access>`.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::trader::Trader;
use crate::domain::UserSummary;

/// Tokens returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    /// Account details, when the backend includes them.
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// Tokens returned by a refresh. `refresh` is only present when the backend
/// rotates refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshedToken {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body for POST /auth/register/register/.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Confirmation; the backend rejects the request if it differs from `password`.
    pub password2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            email: email.into(),
            password2: password.clone(),
            password,
            first_name: None,
            last_name: None,
        }
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish_non_exhaustive()
    }
}

/// Response for POST /auth/register/register/.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisteredUser {
    #[serde(default)]
    pub message: String,
    pub user: UserSummary,
    pub tokens: TokenPair,
}

/// The authenticated account, with its trader profile if it has one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trader_profile: Option<Trader>,
}

/// Response for POST /auth/verify/verify_token/.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenVerification {
    pub valid: bool,
    pub user: UserSummary,
}

/// Partial body for PUT /auth/profile/update_profile/. Only set fields are sent.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password2: Option<String>,
}

impl UpdateProfileRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Change the password as part of the update. The backend checks
    /// `old_password` against the current one.
    pub fn with_password_change(
        mut self,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        let new_password = new_password.into();
        self.old_password = Some(old_password.into());
        self.new_password2 = Some(new_password.clone());
        self.new_password = Some(new_password);
        self
    }
}

impl std::fmt::Debug for UpdateProfileRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateProfileRequest")
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("changes_password", &self.new_password.is_some())
            .finish_non_exhaustive()
    }
}

/// Response for PUT /auth/profile/update_profile/.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub message: String,
    pub user: UserProfile,
}

/// Body for POST /auth/profile/change_password/.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub new_password2: String,
}

impl ChangePasswordRequest {
    pub fn new(old_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        let new_password = new_password.into();
        Self {
            old_password: old_password.into(),
            new_password2: new_password.clone(),
            new_password,
        }
    }
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordRequest").finish_non_exhaustive()
    }
}

/// Plain `{message}` acknowledgement from change-password and logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_confirms_password() {
        let request = RegisterRequest::new("alice", "alice@example.com", "s3cret!pass");
        assert_eq!(request.password, request.password2);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("first_name").is_none());
    }

    #[test]
    fn test_register_request_debug_hides_password() {
        let request = RegisterRequest::new("alice", "alice@example.com", "s3cret!pass");
        assert!(!format!("{:?}", request).contains("s3cret"));
    }

    #[test]
    fn test_update_profile_request_is_partial() {
        let body = serde_json::to_value(UpdateProfileRequest::new().with_email("new@x.io")).unwrap();
        assert_eq!(body, serde_json::json!({"email": "new@x.io"}));

        let request = UpdateProfileRequest::new().with_password_change("old-pass", "n3w!pass");
        assert_eq!(request.new_password, request.new_password2);
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("old-pass"));
        assert!(!rendered.contains("n3w!pass"));
    }

    #[test]
    fn test_change_password_request() {
        let request = ChangePasswordRequest::new("old-pass", "n3w!pass");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "old_password": "old-pass",
                "new_password": "n3w!pass",
                "new_password2": "n3w!pass"
            })
        );
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("old-pass"));
        assert!(!rendered.contains("n3w!pass"));
    }

    #[test]
    fn test_token_pair_with_user() {
        let json = r#"{
            "refresh": "ref",
            "access": "acc",
            "user": {"id": 1, "username": "u", "email": "u@x.io", "first_name": "", "last_name": ""}
        }"#;
        let tokens: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.access, "acc");
        assert_eq!(tokens.refresh, "ref");
        assert_eq!(tokens.user.map(|u| u.id), Some(1));
    }
}
