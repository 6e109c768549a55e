//! Ephemeral browse state: the active category filter and search term.
//!
//! Lives for a single view and is never persisted; the durable side of
//! personalization is `store::UserDataStore`.

use crate::catalog::Catalog;
use crate::filter::filter_symbols;
use crate::models::symbol::{Symbol, SymbolCategory};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    selected_category: Option<SymbolCategory>,
    search_term: String,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> Option<SymbolCategory> {
        self.selected_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Selecting the category that is already active clears the filter;
    /// `None` is the explicit "all symbols" selection.
    pub fn select_category(&mut self, category: Option<SymbolCategory>) {
        self.selected_category = if category == self.selected_category {
            None
        } else {
            category
        };
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Symbol> {
        filter_symbols(catalog.symbols(), self.selected_category, &self.search_term)
    }
}
