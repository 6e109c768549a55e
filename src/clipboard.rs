//! Clipboard capability consumed by the copy actions. Real implementations
//! live with the embedding shell; the core only needs write-text with a
//! two-outcome result.

use anyhow::Result;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
