use crate::models::SiteKind;
use crate::scrapers::dom;
use scraper::Html;
use tracing::debug;

/// Site signatures in priority order. The first site with any matching
/// substring wins. Substrings are lower-case.
const SIGNATURES: [(SiteKind, &[&str]); 2] = [
    (SiteKind::ImmoScout24, &["immobilienscout24", "is24"]),
    (SiteKind::Immowelt, &["immowelt", "aviv germany", "aviv.cdp"]),
];

/// Detect which listing site a document was saved from.
pub fn classify(doc: &Html) -> SiteKind {
    classify_text(&dom::visible_text(doc))
}

/// Classify already-extracted page text. Matching is case-insensitive.
pub fn classify_text(text: &str) -> SiteKind {
    let text = text.to_lowercase();
    let site = SIGNATURES
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| text.contains(needle)))
        .map_or(SiteKind::Unknown, |(site, _)| *site);
    debug!("Classified document as {}", site);
    site
}
