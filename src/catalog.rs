//! The read-only symbol catalog supplied at startup.

use std::collections::HashSet;

use anyhow::{Context, Result};
use log::warn;

use crate::models::symbol::{CategoryInfo, Symbol, SymbolCategory};

pub struct Catalog {
    symbols: Vec<Symbol>,
    categories: Vec<CategoryInfo>,
}

impl Catalog {
    /// Builds the catalog from externally supplied data. Entries with a
    /// duplicate id are dropped (first occurrence wins) so favorites and
    /// recently-used references stay unambiguous.
    pub fn new(symbols: Vec<Symbol>, categories: Vec<CategoryInfo>) -> Self {
        let mut seen = HashSet::new();
        let mut deduped = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if seen.insert(symbol.id.clone()) {
                deduped.push(symbol);
            } else {
                warn!("Dropping duplicate catalog entry '{}'", symbol.id);
            }
        }
        Self {
            symbols: deduped,
            categories,
        }
    }

    pub fn from_json(symbols_json: &str, categories_json: &str) -> Result<Self> {
        let symbols = serde_json::from_str(symbols_json).context("Failed to parse symbol data")?;
        let categories =
            serde_json::from_str(categories_json).context("Failed to parse category data")?;
        Ok(Self::new(symbols, categories))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    /// Detail lookup; `None` is the explicit not-found state.
    pub fn symbol(&self, id: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.id == id)
    }

    pub fn category_info(&self, id: SymbolCategory) -> Option<&CategoryInfo> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Metadata for every category the symbol belongs to, in catalog
    /// metadata order.
    pub fn categories_for(&self, symbol: &Symbol) -> Vec<&CategoryInfo> {
        self.categories
            .iter()
            .filter(|category| symbol.categories.contains(&category.id))
            .collect()
    }
}
