use crate::models::{PartialRecord, SiteKind};
use crate::scrapers::dom;
use crate::scrapers::patterns::{
    COMMA_SPACING, IW_ADDRESS, IW_AREA_UNIT, IW_CANONICAL, IW_CONTACT_TITLE, IW_DATE, IW_DIGITS,
    IW_FACT_LABEL, IW_FACT_SPAN, IW_HIDDEN_PRICE, IW_ROOMS, IW_WARM_LABEL,
};
use crate::scrapers::traits::SiteExtractor;
use crate::scrapers::types::DocumentContext;
use anyhow::Result;
use scraper::Html;
use tracing::debug;

/// Exposé URL pattern used when a page carries no canonical link
const EXPOSE_URL_BASE: &str = "https://www.immowelt.de/expose/";

/// Extractor for immowelt.de exposés
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmoweltExtractor;

impl SiteExtractor for ImmoweltExtractor {
    fn extract(&self, doc: &Html, ctx: &DocumentContext) -> Result<PartialRecord> {
        Ok(PartialRecord {
            source_link: canonical_link(doc, &ctx.fallback_id),
            landlord: landlord(doc),
            // The site does not show a publication date.
            published_date: String::new(),
            rooms: rooms(doc),
            area_sqm: area(doc),
            warm_rent: warm_rent(doc),
            available_from: available_from(doc),
            address: address(doc),
        })
    }

    fn site(&self) -> SiteKind {
        SiteKind::Immowelt
    }
}

fn canonical_link(doc: &Html, fallback_id: &str) -> String {
    match dom::first(doc, &IW_CANONICAL).and_then(|el| el.value().attr("href")) {
        Some(href) => href.to_string(),
        None => {
            debug!("No canonical link, using exposé id {}", fallback_id);
            format!("{EXPOSE_URL_BASE}{fallback_id}")
        }
    }
}

fn landlord(doc: &Html) -> String {
    dom::first(doc, &IW_CONTACT_TITLE)
        .map(|el| dom::stripped_text(el, ""))
        .unwrap_or_default()
}

fn rooms(doc: &Html) -> String {
    dom::find_by_own_text(doc, &IW_FACT_SPAN, &IW_ROOMS)
        .map(|el| dom::stripped_text(el, ""))
        .unwrap_or_default()
}

/// Leading integer of the first key fact mentioning m². Decimals are dropped.
fn area(doc: &Html) -> String {
    dom::find_by_own_text(doc, &IW_FACT_SPAN, &IW_AREA_UNIT)
        .and_then(|el| {
            let text = dom::stripped_text(el, "");
            IW_DIGITS.find(&text).map(|m| m.as_str().to_string())
        })
        .unwrap_or_default()
}

/// The price cell shows a formatted value and carries a visually hidden copy for
/// screen readers. Only the hidden copy is read.
fn warm_rent(doc: &Html) -> String {
    match dom::nested_value_after_label(doc, &IW_FACT_LABEL, &IW_WARM_LABEL, &IW_HIDDEN_PRICE) {
        Some(hidden) => dom::stripped_text(hidden, ""),
        None => {
            debug!("No hidden Warmmiete price");
            String::new()
        }
    }
}

fn available_from(doc: &Html) -> String {
    dom::find_by_own_text(doc, &IW_FACT_SPAN, &IW_DATE)
        .map(|el| dom::stripped_text(el, ""))
        .unwrap_or_default()
}

fn address(doc: &Html) -> String {
    dom::first(doc, &IW_ADDRESS)
        .map(|el| normalize_address(&dom::stripped_text(el, " ")))
        .unwrap_or_default()
}

/// Replace non-breaking spaces and tidy the spacing around commas.
pub fn normalize_address(raw: &str) -> String {
    let spaced = raw.replace('\u{a0}', " ");
    COMMA_SPACING.replace_all(&spaced, ", ").into_owned()
}
