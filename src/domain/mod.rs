//! Domain modules organized as vertical slices.
//!
//! A sub-module is laid out as:
//! - `mod.rs`: Entity types decoded from backend responses, plus list filters
//! - `wire.rs`: Request bodies sent to the backend (where the domain has any)
//! - `client.rs`: Sub-client with one HTTP method per endpoint

pub mod follower;
pub mod trade;
pub mod trader;

use serde::{Deserialize, Serialize};

/// Public account fields embedded in traders and auth responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A collection response.
///
/// The backend returns either a bare array or, when pagination is enabled, a
/// `{count, next, previous, results}` envelope. Both decode here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    Page {
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        results: Vec<T>,
    },
    All(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Page { results, .. } => results,
            Self::All(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page { results, .. } => results,
            Self::All(items) => items,
        }
    }

    /// Total count across pages when the backend reports one, else the local length.
    pub fn total(&self) -> u64 {
        match self {
            Self::Page { count, .. } => *count,
            Self::All(items) => items.len() as u64,
        }
    }

    pub fn next_page(&self) -> Option<&str> {
        match self {
            Self::Page { next, .. } => next.as_deref(),
            Self::All(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_bare_array() {
        let listing: Listing<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(listing.items(), &[1, 2, 3]);
        assert_eq!(listing.total(), 3);
        assert!(listing.next_page().is_none());
    }

    #[test]
    fn test_listing_paginated() {
        let json = r#"{
            "count": 42,
            "next": "http://localhost:8000/api/trades/?page=2",
            "previous": null,
            "results": [7]
        }"#;
        let listing: Listing<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(listing.total(), 42);
        assert_eq!(listing.len(), 1);
        assert_eq!(
            listing.next_page(),
            Some("http://localhost:8000/api/trades/?page=2")
        );
        assert_eq!(listing.into_items(), vec![7]);
    }

    #[test]
    fn test_user_summary_optional_fields() {
        let json = r#"{"id": 3, "username": "alice"}"#;
        let user: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.email.is_empty());
    }
}
