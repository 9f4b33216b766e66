//! Compiled regex patterns and CSS selectors used by the site extractors.
//!
//! Everything here is a literal, compiled once on first use.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

// =============================================================================
// ImmoScout24
// =============================================================================

/// Embedded schema.org block.
pub static JSON_LD_SCRIPT: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"script[type="application/ld+json"]"#));

pub static IS24_CONTACT_NAME: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"[data-qa="contactName"]"#));

pub static IS24_ROOMS_META: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="branch:deeplink:expose-number-of-rooms"]"#));

pub static IS24_WARM_RENT: LazyLock<Selector> =
    LazyLock::new(|| selector(".is24qa-warmmiete-main span"));

pub static IS24_ADDRESS_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(".address-block"));

pub static IS24_STREET: LazyLock<Selector> = LazyLock::new(|| selector(".block"));

pub static IS24_ZIP_REGION: LazyLock<Selector> =
    LazyLock::new(|| selector(".zip-region-and-country"));

/// Number with an optional comma decimal part right before the square-metre glyph.
pub static IS24_AREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:,\d{1,3})?)\s*m²").expect("IS24_AREA regex"));

pub static IS24_MOVE_IN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Bezugsfrei ab").expect("IS24_MOVE_IN_LABEL regex"));

// =============================================================================
// Immowelt
// =============================================================================

pub static IW_CANONICAL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"link[rel~="canonical"]"#));

pub static IW_CONTACT_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#"div[data-testid="aviv.CDP.Contacting.ContactCard.Title"]"#)
});

/// Key-fact value cells (rooms, area, move-in date).
pub static IW_FACT_SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span.css-2bd70b"));

/// Key-fact label cells.
pub static IW_FACT_LABEL: LazyLock<Selector> = LazyLock::new(|| selector("div.css-2bd70b"));

/// Screen-reader copy of a price.
pub static IW_HIDDEN_PRICE: LazyLock<Selector> = LazyLock::new(|| selector("span.css-9wpf20"));

pub static IW_ADDRESS: LazyLock<Selector> = LazyLock::new(|| selector("div.css-1ytyjyb"));

pub static IW_ROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("IW_ROOMS regex"));

pub static IW_AREA_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"m²").expect("IW_AREA_UNIT regex"));

pub static IW_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("IW_DIGITS regex"));

pub static IW_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}\.\d{2}\.\d{4}").expect("IW_DATE regex"));

pub static IW_WARM_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Warmmiete").expect("IW_WARM_LABEL regex"));

pub static COMMA_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*,\s*").expect("COMMA_SPACING regex"));
