//! User data models: preferences, favorites, recently-used.
//!
//! `UserData` is the single unit of persistence. On the wire it is camelCase
//! JSON with ISO 8601 timestamps; `chrono`'s serde support handles the
//! string round-trip.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the recently-used list.
pub const MAX_RECENTLY_USED: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub font_size: FontSize,
    pub dark_mode: bool,
    pub language: Language,
    pub auto_play: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            font_size: FontSize::Medium,
            dark_mode: true,
            language: Language::En,
            auto_play: false,
        }
    }
}

impl UserPreferences {
    /// Merges the supplied fields, last write wins per field.
    pub fn apply(&mut self, update: &PreferencesUpdate) {
        if let Some(font_size) = update.font_size {
            self.font_size = font_size;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(auto_play) = update.auto_play {
            self.auto_play = auto_play;
        }
    }
}

/// Partial preferences update; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_play: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSymbol {
    pub symbol_id: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyUsedSymbol {
    pub symbol_id: String,
    pub used_at: DateTime<Utc>,
}

/// The persisted aggregate. Every mutation writes the whole record back;
/// there is no partial-field persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(default)]
    pub favorites: Vec<FavoriteSymbol>,
    #[serde(default)]
    pub recently_used: Vec<RecentlyUsedSymbol>,
}

impl UserData {
    /// Repairs a freshly decoded payload: duplicate ids collapse to their
    /// first occurrence and the recently-used list is clamped to its bound.
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.favorites
            .retain(|favorite| seen.insert(favorite.symbol_id.clone()));

        let mut seen = HashSet::new();
        self.recently_used
            .retain(|recent| seen.insert(recent.symbol_id.clone()));
        self.recently_used.truncate(MAX_RECENTLY_USED);
        self
    }
}
