//! Stable keys for rendered catalog items.
//!
//! A symbol can appear in several lists at once (the filtered grid,
//! favorites, recently-used), and symbols share categories, so list keys
//! combine the primary category with the symbol id. Derivation is pure and
//! deterministic: the same symbol keeps the same key across re-renders and
//! filtered views.

use crate::models::symbol::{Symbol, SymbolCategory};

/// Stands in for a category prefix that cannot be derived.
const FALLBACK_PREFIX: &str = "default";

/// Key for a symbol list item: `{primary-category}-{symbol-id}`, e.g.
/// `loveromance-heart`. Symbols without categories fall back to
/// `default-{symbol-id}`.
pub fn symbol_key(symbol: &Symbol) -> String {
    let prefix = match symbol.categories.first() {
        Some(category) => normalize(category.as_str()),
        None => FALLBACK_PREFIX.to_string(),
    };
    format!("{prefix}-{}", symbol.id)
}

/// Key for one entry of a symbol's category tag list:
/// `{symbol-id}-category-{index}`, e.g. `heart-category-0`.
pub fn category_tag_key(symbol_id: &str, index: usize) -> String {
    format!("{symbol_id}-category-{index}")
}

/// Key for a quick-access category shortcut: `quick-category-{category}`,
/// e.g. `quick-category-chinesezodiac`.
pub fn quick_category_key(category: SymbolCategory) -> String {
    format!("quick-category-{}", normalize(category.as_str()))
}

/// Lower-cased ASCII alphanumerics only. Never returns an empty string:
/// all-punctuation input collapses to the fallback token.
fn normalize(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if cleaned.is_empty() {
        FALLBACK_PREFIX.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(id: &str, categories: Vec<SymbolCategory>) -> Symbol {
        Symbol {
            id: id.to_string(),
            symbol: String::new(),
            pinyin: String::new(),
            meaning: String::new(),
            description: String::new(),
            categories,
            tags: vec![],
            is_popular: None,
            i18n: None,
        }
    }

    #[test]
    fn symbol_key_strips_punctuation_and_lowercases() {
        let key = symbol_key(&symbol("heart", vec![SymbolCategory::LoveRomance]));
        assert_eq!(key, "loveromance-heart");
    }

    #[test]
    fn symbol_key_uses_the_first_category_only() {
        let key = symbol_key(&symbol(
            "monkey",
            vec![SymbolCategory::ChineseZodiac, SymbolCategory::Animals],
        ));
        assert_eq!(key, "chinesezodiac-monkey");
    }

    #[test]
    fn symbol_key_falls_back_without_categories() {
        assert_eq!(symbol_key(&symbol("x", vec![])), "default-x");
    }

    #[test]
    fn symbol_key_is_deterministic() {
        let s = symbol("heart", vec![SymbolCategory::LoveRomance]);
        assert_eq!(symbol_key(&s), symbol_key(&s));
    }

    #[test]
    fn distinct_ids_never_collide_within_a_category() {
        let a = symbol_key(&symbol("a", vec![SymbolCategory::Animals]));
        let b = symbol_key(&symbol("b", vec![SymbolCategory::Animals]));
        assert_ne!(a, b);
    }

    #[test]
    fn category_tag_keys_differ_per_index() {
        assert_eq!(category_tag_key("heart", 0), "heart-category-0");
        assert_eq!(category_tag_key("heart", 1), "heart-category-1");
    }

    #[test]
    fn quick_category_key_uses_the_normalized_id() {
        assert_eq!(
            quick_category_key(SymbolCategory::LuckFortune),
            "quick-category-luckfortune"
        );
    }

    #[test]
    fn normalize_guards_against_all_punctuation_input() {
        assert_eq!(normalize("&&& !!!"), "default");
        assert_eq!(normalize(""), "default");
    }
}
