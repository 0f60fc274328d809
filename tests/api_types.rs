//! Integration tests for the copy-trading wire types.
//!
//! Payloads mirror what the backend actually sends, including optional and
//! null fields.

use copytrade_sdk::auth::{RefreshedToken, RegisteredUser, TokenPair, TokenVerification, UserProfile};
use copytrade_sdk::domain::follower::{Follower, FollowerPerformance, UnfollowResponse};
use copytrade_sdk::domain::trade::{Direction, Trade, TradeStatus};
use copytrade_sdk::domain::trader::{ExperienceLevel, Trader, TraderStats};
use copytrade_sdk::domain::Listing;

// =============================================================================
// Trader types
// =============================================================================

mod trader_types {
    use super::*;

    #[test]
    fn test_trader_deserialize() {
        let json = r#"{
            "id": 4,
            "user": {"id": 11, "username": "pipsmith", "email": "p@fx.io", "first_name": "Pip", "last_name": "Smith"},
            "bio": "Swing trader, majors only",
            "experience_level": "expert",
            "total_followers": 120,
            "total_trades": 340,
            "win_rate": 61.5,
            "total_profit": 18250.75,
            "avg_roi": 3.2,
            "monthly_return": 4.1,
            "rating": 4.8,
            "profile_image": null,
            "broker": "Pepperstone",
            "account_size": 50000.0,
            "is_verified": true,
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2024-06-01T08:00:00.123456Z"
        }"#;
        let trader: Trader = serde_json::from_str(json).unwrap();
        assert_eq!(trader.id, 4);
        assert_eq!(trader.experience_level, ExperienceLevel::Expert);
        assert_eq!(trader.total_followers, 120);
        assert!(trader.is_verified);
        assert!(trader.profile_image.is_none());
        assert!(trader.created_at.is_some());
        assert_eq!(trader.display_name().as_deref(), Some("Pip Smith"));
    }

    #[test]
    fn test_trader_minimal() {
        let trader: Trader = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(trader.experience_level, ExperienceLevel::Beginner);
        assert_eq!(trader.rating, 0.0);
        assert!(trader.user.is_none());
    }

    #[test]
    fn test_trader_stats_deserialize() {
        let json = r#"{
            "total_followers": 12,
            "total_trades": 80,
            "win_rate": 55.0,
            "total_profit": 1200.5,
            "avg_roi": 1.5,
            "monthly_return": 2.25,
            "rating": 4.1
        }"#;
        let stats: TraderStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_trades, 80);
        assert_eq!(stats.monthly_return, 2.25);
    }
}

// =============================================================================
// Trade types
// =============================================================================

mod trade_types {
    use super::*;

    #[test]
    fn test_open_trade_deserialize() {
        let json = r#"{
            "id": 42,
            "trader": 4,
            "trader_name": "Pip Smith",
            "currency_pair": "EURUSD",
            "direction": "buy",
            "entry_price": 1.085,
            "exit_price": null,
            "stop_loss": 1.08,
            "take_profit": 1.095,
            "lot_size": 0.5,
            "profit_loss": 0.0,
            "roi_percentage": 0.0,
            "status": "open",
            "opened_at": "2024-03-01T12:00:00Z",
            "closed_at": null,
            "description": "",
            "risk_reward_ratio": 2.0
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert_eq!(trade.id, 42);
        assert_eq!(trade.direction, Direction::Buy);
        assert_eq!(trade.status, TradeStatus::Open);
        assert!(trade.exit_price.is_none());
        assert!(!trade.is_closed());
    }

    #[test]
    fn test_closed_trade_deserialize() {
        let json = r#"{
            "id": 43,
            "trader": 4,
            "currency_pair": "USDJPY",
            "direction": "sell",
            "entry_price": 151.2,
            "exit_price": 150.1,
            "stop_loss": 152.0,
            "take_profit": 149.5,
            "lot_size": 1.0,
            "profit_loss": 1.1,
            "roi_percentage": 0.73,
            "status": "closed",
            "closed_at": "2024-03-02T09:15:00+00:00"
        }"#;
        let trade: Trade = serde_json::from_str(json).unwrap();
        assert!(trade.is_closed());
        assert_eq!(trade.exit_price, Some(150.1));
        assert!(trade.closed_at.is_some());
        assert!(trade.trader_name.is_none());
    }

    #[test]
    fn test_unknown_status_is_decode_failure() {
        let json = r#"{
            "id": 1, "trader": 1, "currency_pair": "EURUSD", "direction": "buy",
            "entry_price": 1.0, "stop_loss": 0.9, "take_profit": 1.1, "lot_size": 1.0,
            "status": "cancelled"
        }"#;
        assert!(serde_json::from_str::<Trade>(json).is_err());
    }
}

// =============================================================================
// Follower types
// =============================================================================

mod follower_types {
    use super::*;

    #[test]
    fn test_follower_deserialize() {
        let json = r#"{
            "id": 9,
            "trader": 4,
            "trader_name": "Pip Smith",
            "follower_user": 21,
            "follower_name": "Bea Chen",
            "auto_copy_trades": true,
            "copy_percentage": 50.0,
            "initial_investment": 1000.0,
            "current_balance": 1040.0,
            "total_profit": 40.0,
            "commission_paid": 4.0,
            "followed_at": "2024-02-10T00:00:00Z",
            "updated_at": "2024-02-11T00:00:00Z"
        }"#;
        let follower: Follower = serde_json::from_str(json).unwrap();
        assert_eq!(follower.trader, 4);
        assert_eq!(follower.follower_user, 21);
        assert_eq!(follower.copy_percentage, 50.0);
        assert!(follower.auto_copy_trades);
    }

    #[test]
    fn test_follower_performance_with_win_rate() {
        let json = r#"{
            "total_copied_trades": 10,
            "closed_trades": 8,
            "winning_trades": 6,
            "total_profit": 310.0,
            "commission_paid": 31.0,
            "current_balance": 1279.0,
            "win_rate": 75.0
        }"#;
        let perf: FollowerPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.win_rate, Some(75.0));
    }

    #[test]
    fn test_unfollow_response() {
        let resp: UnfollowResponse = serde_json::from_str(r#"{"status": "unfollowed"}"#).unwrap();
        assert_eq!(resp.status, "unfollowed");
    }
}

// =============================================================================
// Listing envelope
// =============================================================================

mod listing_types {
    use super::*;

    #[test]
    fn test_paginated_followers() {
        let json = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "id": 9, "trader": 4, "follower_user": 21,
                "auto_copy_trades": false, "copy_percentage": 25.0
            }]
        }"#;
        let listing: Listing<Follower> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.total(), 1);
        assert!(!listing.items()[0].auto_copy_trades);
    }

    #[test]
    fn test_empty_array() {
        let listing: Listing<Trader> = serde_json::from_str("[]").unwrap();
        assert!(listing.is_empty());
        assert_eq!(listing.total(), 0);
    }
}

// =============================================================================
// Auth types
// =============================================================================

mod auth_types {
    use super::*;

    #[test]
    fn test_token_pair_without_user() {
        let tokens: TokenPair =
            serde_json::from_str(r#"{"refresh": "r", "access": "a"}"#).unwrap();
        assert_eq!(tokens.access, "a");
        assert!(tokens.user.is_none());
    }

    #[test]
    fn test_refreshed_token_rotation() {
        let plain: RefreshedToken = serde_json::from_str(r#"{"access": "a2"}"#).unwrap();
        assert!(plain.refresh.is_none());

        let rotated: RefreshedToken =
            serde_json::from_str(r#"{"access": "a2", "refresh": "r2"}"#).unwrap();
        assert_eq!(rotated.refresh.as_deref(), Some("r2"));
    }

    #[test]
    fn test_registered_user() {
        let json = r#"{
            "message": "User registered successfully",
            "user": {"id": 30, "username": "newbie", "email": "n@x.io", "first_name": "", "last_name": ""},
            "tokens": {"refresh": "r", "access": "a"}
        }"#;
        let registered: RegisteredUser = serde_json::from_str(json).unwrap();
        assert_eq!(registered.user.id, 30);
        assert_eq!(registered.tokens.access, "a");
    }

    #[test]
    fn test_profile_with_trader() {
        let json = r#"{
            "id": 11,
            "username": "pipsmith",
            "email": "p@fx.io",
            "first_name": "Pip",
            "last_name": "Smith",
            "date_joined": "2023-12-01T00:00:00Z",
            "trader_profile": {"id": 4, "experience_level": "intermediate"}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        let trader = profile.trader_profile.unwrap();
        assert_eq!(trader.id, 4);
        assert_eq!(trader.experience_level, ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_token_verification() {
        let json = r#"{"valid": true, "user": {"id": 11, "username": "pipsmith", "email": "p@fx.io"}}"#;
        let verification: TokenVerification = serde_json::from_str(json).unwrap();
        assert!(verification.valid);
        assert_eq!(verification.user.username, "pipsmith");
    }
}
