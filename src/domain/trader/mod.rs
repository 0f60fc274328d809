//! Trader domain: followable accounts and their performance.

#[cfg(feature = "http")]
pub mod client;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserSummary;

/// Self-declared trading experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    /// A level this SDK version does not know about. Decode-only: the
    /// backend has no such choice, so serializing it is an error.
    #[serde(other, skip_serializing)]
    Other,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
            Self::Other => "other",
        }
    }
}

/// A trader profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trader {
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub total_followers: i64,
    #[serde(default)]
    pub total_trades: i64,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub avg_roi: f64,
    #[serde(default)]
    pub monthly_return: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub broker: String,
    #[serde(default)]
    pub account_size: f64,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trader {
    /// "First Last", falling back to the username.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let full = format!("{} {}", user.first_name, user.last_name);
        let full = full.trim();
        if full.is_empty() {
            Some(user.username.clone())
        } else {
            Some(full.to_string())
        }
    }
}

/// Aggregated statistics for one trader (read-only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraderStats {
    pub total_followers: i64,
    pub total_trades: i64,
    pub win_rate: f64,
    pub total_profit: f64,
    pub avg_roi: f64,
    pub monthly_return: f64,
    pub rating: f64,
}

/// Query filters for GET /traders/.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraderFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// Free-text search over username and names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Ordering field, `-` prefix for descending (e.g. `-rating`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    /// Pass-through keys sent verbatim. A key that names a typed field
    /// overrides it.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl TraderFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn with_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = Some(is_verified);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    /// Add a query key the SDK has no typed field for. Using a typed field's
    /// key (e.g. `"search"`) replaces that field's value in the query.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
