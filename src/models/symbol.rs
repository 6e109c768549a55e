//! Catalog entry data models.
//!
//! Symbols and category metadata are supplied as read-only data at startup
//! and never mutated; everything here is plain serde types plus a few
//! display helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::user::Language;

/// The closed set of catalog categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SymbolCategory {
    #[serde(rename = "Love & Romance")]
    LoveRomance,
    #[serde(rename = "Family & Relationships")]
    FamilyRelationships,
    #[serde(rename = "Animals")]
    Animals,
    #[serde(rename = "Birds")]
    Birds,
    #[serde(rename = "Colors")]
    Colors,
    #[serde(rename = "Nature Elements")]
    NatureElements,
    #[serde(rename = "Fruits & Flowers")]
    FruitsFlowers,
    #[serde(rename = "Objects & Tools")]
    ObjectsTools,
    #[serde(rename = "Strength & Power")]
    StrengthPower,
    #[serde(rename = "Luck & Fortune")]
    LuckFortune,
    #[serde(rename = "Tattoo Designs")]
    TattooDesigns,
    #[serde(rename = "Chinese Zodiac")]
    ChineseZodiac,
    #[serde(rename = "Wisdom & Knowledge")]
    WisdomKnowledge,
    #[serde(rename = "Emotions & Feelings")]
    EmotionsFeelings,
    #[serde(rename = "Chinese Idioms")]
    ChineseIdioms,
}

impl SymbolCategory {
    /// All recognised categories, in display order.
    pub const ALL: &'static [SymbolCategory] = &[
        SymbolCategory::LoveRomance,
        SymbolCategory::FamilyRelationships,
        SymbolCategory::Animals,
        SymbolCategory::Birds,
        SymbolCategory::Colors,
        SymbolCategory::NatureElements,
        SymbolCategory::FruitsFlowers,
        SymbolCategory::ObjectsTools,
        SymbolCategory::StrengthPower,
        SymbolCategory::LuckFortune,
        SymbolCategory::TattooDesigns,
        SymbolCategory::ChineseZodiac,
        SymbolCategory::WisdomKnowledge,
        SymbolCategory::EmotionsFeelings,
        SymbolCategory::ChineseIdioms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolCategory::LoveRomance => "Love & Romance",
            SymbolCategory::FamilyRelationships => "Family & Relationships",
            SymbolCategory::Animals => "Animals",
            SymbolCategory::Birds => "Birds",
            SymbolCategory::Colors => "Colors",
            SymbolCategory::NatureElements => "Nature Elements",
            SymbolCategory::FruitsFlowers => "Fruits & Flowers",
            SymbolCategory::ObjectsTools => "Objects & Tools",
            SymbolCategory::StrengthPower => "Strength & Power",
            SymbolCategory::LuckFortune => "Luck & Fortune",
            SymbolCategory::TattooDesigns => "Tattoo Designs",
            SymbolCategory::ChineseZodiac => "Chinese Zodiac",
            SymbolCategory::WisdomKnowledge => "Wisdom & Knowledge",
            SymbolCategory::EmotionsFeelings => "Emotions & Feelings",
            SymbolCategory::ChineseIdioms => "Chinese Idioms",
        }
    }
}

/// Per-language override for a symbol's text fields. Missing fields fall
/// back to the base `meaning`/`description`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One catalog entry. `id` is the stable key favorites and recently-used
/// entries reference across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub id: String,
    pub symbol: String,
    pub pinyin: String,
    pub meaning: String,
    pub description: String,
    /// Ordered; the first entry is the primary category used for key
    /// derivation.
    pub categories: Vec<SymbolCategory>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i18n: Option<BTreeMap<Language, SymbolText>>,
}

impl Symbol {
    pub fn primary_category(&self) -> Option<SymbolCategory> {
        self.categories.first().copied()
    }

    pub fn meaning_in(&self, lang: Language) -> &str {
        self.i18n
            .as_ref()
            .and_then(|overrides| overrides.get(&lang))
            .and_then(|text| text.meaning.as_deref())
            .unwrap_or(&self.meaning)
    }

    pub fn description_in(&self, lang: Language) -> &str {
        self.i18n
            .as_ref()
            .and_then(|overrides| overrides.get(&lang))
            .and_then(|text| text.description.as_deref())
            .unwrap_or(&self.description)
    }
}

/// Display metadata for a category, supplied alongside the symbols.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: SymbolCategory,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_with_i18n() -> Symbol {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            Language::Zh,
            SymbolText {
                meaning: Some("爱情".to_string()),
                description: None,
            },
        );
        Symbol {
            id: "heart".to_string(),
            symbol: "爱".to_string(),
            pinyin: "ài".to_string(),
            meaning: "love".to_string(),
            description: "Deep affection".to_string(),
            categories: vec![SymbolCategory::LoveRomance],
            tags: vec!["love".to_string()],
            is_popular: Some(true),
            i18n: Some(overrides),
        }
    }

    #[test]
    fn category_serializes_as_display_string() {
        let json = serde_json::to_string(&SymbolCategory::LoveRomance).unwrap();
        assert_eq!(json, "\"Love & Romance\"");

        let parsed: SymbolCategory = serde_json::from_str("\"Chinese Zodiac\"").unwrap();
        assert_eq!(parsed, SymbolCategory::ChineseZodiac);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(serde_json::from_str::<SymbolCategory>("\"Weather\"").is_err());
    }

    #[test]
    fn meaning_prefers_language_override() {
        let symbol = symbol_with_i18n();
        assert_eq!(symbol.meaning_in(Language::Zh), "爱情");
        assert_eq!(symbol.meaning_in(Language::En), "love");
    }

    #[test]
    fn description_falls_back_when_override_is_partial() {
        let symbol = symbol_with_i18n();
        assert_eq!(symbol.description_in(Language::Zh), "Deep affection");
    }

    #[test]
    fn symbol_uses_camel_case_on_the_wire() {
        let symbol = symbol_with_i18n();
        let value = serde_json::to_value(&symbol).unwrap();
        assert!(value.get("isPopular").is_some());
        assert!(value.get("is_popular").is_none());
    }
}
