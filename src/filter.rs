//! Pure search/filter over the symbol catalog.

use crate::models::symbol::{Symbol, SymbolCategory};

/// Returns the symbols visible under the active category and search term,
/// in catalog order. `None` means no category filter and an empty term
/// means no text filter; the two predicates are independent and both must
/// hold.
///
/// Recomputed per query; a linear scan is fine at catalog scale.
pub fn filter_symbols<'a>(
    symbols: &'a [Symbol],
    selected_category: Option<SymbolCategory>,
    search_term: &str,
) -> Vec<&'a Symbol> {
    let needle = search_term.to_lowercase();
    symbols
        .iter()
        .filter(|symbol| {
            matches_category(symbol, selected_category)
                && matches_search(symbol, search_term, &needle)
        })
        .collect()
}

fn matches_category(symbol: &Symbol, selected: Option<SymbolCategory>) -> bool {
    match selected {
        None => true,
        Some(category) => symbol.categories.contains(&category),
    }
}

/// Glyph containment is case-sensitive; pinyin, meaning and description
/// fold case.
fn matches_search(symbol: &Symbol, term: &str, needle: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    symbol.symbol.contains(term)
        || symbol.pinyin.to_lowercase().contains(needle)
        || symbol.meaning.to_lowercase().contains(needle)
        || symbol.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Symbol> {
        vec![
            Symbol {
                id: "x1".to_string(),
                symbol: "爱".to_string(),
                pinyin: "ai".to_string(),
                meaning: "love".to_string(),
                description: "Deep affection between people".to_string(),
                categories: vec![SymbolCategory::LoveRomance],
                tags: vec![],
                is_popular: None,
                i18n: None,
            },
            Symbol {
                id: "x2".to_string(),
                symbol: "龙".to_string(),
                pinyin: "long".to_string(),
                meaning: "dragon".to_string(),
                description: "Mythical creature of power".to_string(),
                categories: vec![SymbolCategory::ChineseZodiac, SymbolCategory::Animals],
                tags: vec![],
                is_popular: Some(true),
                i18n: None,
            },
        ]
    }

    #[test]
    fn no_filters_returns_everything_in_order() {
        let symbols = catalog();
        let visible = filter_symbols(&symbols, None, "");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "x1");
        assert_eq!(visible[1].id, "x2");
    }

    #[test]
    fn category_filter_keeps_only_members() {
        let symbols = catalog();
        let visible = filter_symbols(&symbols, Some(SymbolCategory::LoveRomance), "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "x1");
    }

    #[test]
    fn category_without_members_returns_empty() {
        let symbols = catalog();
        assert!(filter_symbols(&symbols, Some(SymbolCategory::FamilyRelationships), "").is_empty());
    }

    #[test]
    fn secondary_category_membership_counts() {
        let symbols = catalog();
        let visible = filter_symbols(&symbols, Some(SymbolCategory::Animals), "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "x2");
    }

    #[test]
    fn pinyin_matches_case_insensitively() {
        let symbols = catalog();
        assert_eq!(filter_symbols(&symbols, None, "ai").len(), 1);
        assert_eq!(filter_symbols(&symbols, None, "AI").len(), 1);
    }

    #[test]
    fn glyph_matches_exactly() {
        let symbols = catalog();
        let visible = filter_symbols(&symbols, None, "龙");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "x2");
    }

    #[test]
    fn meaning_and_description_match() {
        let symbols = catalog();
        assert_eq!(filter_symbols(&symbols, None, "Dragon").len(), 1);
        assert_eq!(filter_symbols(&symbols, None, "affection").len(), 1);
    }

    #[test]
    fn both_predicates_must_hold() {
        let symbols = catalog();
        assert!(filter_symbols(&symbols, Some(SymbolCategory::LoveRomance), "dragon").is_empty());
    }

    #[test]
    fn unmatched_term_returns_empty() {
        let symbols = catalog();
        assert!(filter_symbols(&symbols, None, "zzz").is_empty());
    }
}
