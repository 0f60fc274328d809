//! # Copy-trading SDK
//!
//! A Rust client for the copy-trading REST API: traders, trades, followers and auth.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Error taxonomy, network defaults, domain types, filters, request bodies
//! 2. **Auth**: Token types and the auth sub-client
//! 3. **HTTP API**: `CopyTradeHttp`, one request per call, no retries or caching
//! 4. **High-Level Client**: `CopyTradeClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use copytrade_sdk::prelude::*;
//!
//! let client = CopyTradeClient::builder()
//!     .base_url("http://localhost:8000/api")
//!     .build()?;
//!
//! let tokens = client.auth().login("alice", "hunter2").await?;
//! let client = client.with_access_token(&tokens.access);
//!
//! let open = client
//!     .trades()
//!     .list(Some(TradeFilters::new().with_status(TradeStatus::Open)))
//!     .await?;
//! client.followers().follow(FollowTraderRequest::new(7)).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): entities, filters, request bodies, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: token pairs, login/refresh, registration, profile.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and the sparse query builder.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CopyTradeClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types: traders
    pub use crate::domain::trader::{ExperienceLevel, Trader, TraderFilters, TraderStats};

    // Domain types: trades
    pub use crate::domain::trade::{Direction, Trade, TradeFilters, TradePayload, TradeStatus};

    // Domain types: followers
    pub use crate::domain::follower::{
        FollowTraderRequest, Follower, FollowerFilters, FollowerPerformance, UnfollowResponse,
    };

    // Shared response shapes
    pub use crate::domain::{Listing, UserSummary};

    // Auth types
    pub use crate::auth::{
        AuthMessage, ChangePasswordRequest, ProfileUpdate, RefreshedToken, RegisterRequest,
        RegisteredUser, TokenPair, UpdateProfileRequest,
    };

    // Errors
    pub use crate::error::{ApiResult, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, CopyTradeClient, CopyTradeClientBuilder, FollowersClient, TradersClient,
        TradesClient,
    };
}
