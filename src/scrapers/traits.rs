use crate::models::{PartialRecord, SiteKind};
use crate::scrapers::types::DocumentContext;
use anyhow::Result;
use scraper::Html;

/// Common contract for all listing-site extractors.
/// Supporting a new site means a new `SiteKind` variant plus one implementation.
pub trait SiteExtractor: Send + Sync {
    /// Pull every field the site offers. Missing fields come back empty;
    /// an `Err` means the document as a whole cannot be read.
    fn extract(&self, doc: &Html, ctx: &DocumentContext) -> Result<PartialRecord>;

    /// The site this extractor handles
    fn site(&self) -> SiteKind;
}
