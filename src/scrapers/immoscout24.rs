use crate::models::{PartialRecord, SiteKind};
use crate::scrapers::dom;
use crate::scrapers::patterns::{
    IS24_ADDRESS_BLOCK, IS24_AREA, IS24_CONTACT_NAME, IS24_MOVE_IN_LABEL, IS24_ROOMS_META,
    IS24_STREET, IS24_WARM_RENT, IS24_ZIP_REGION, JSON_LD_SCRIPT,
};
use crate::scrapers::traits::SiteExtractor;
use crate::scrapers::types::DocumentContext;
use anyhow::{Context, Result};
use scraper::Html;
use serde_json::Value;
use tracing::debug;

/// City used when a listing has no address block at all.
/// The site only ever listed Munich flats when the block was missing.
pub const DEFAULT_CITY: &str = "München";

/// Placeholder shown instead of the street when the landlord hides it.
const HIDDEN_ADDRESS_PHRASE: &str = "vollständige adresse";

const LISTING_TYPE: &str = "RealEstateListing";

/// Extractor for immobilienscout24.de exposés
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmoScout24Extractor;

/// The parts of the schema.org listing object we read
#[derive(Debug, Default)]
struct StructuredListing {
    url: String,
    provider_name: String,
    date_posted: String,
}

impl SiteExtractor for ImmoScout24Extractor {
    fn extract(&self, doc: &Html, _ctx: &DocumentContext) -> Result<PartialRecord> {
        let listing = structured_listing(doc)?;
        let text = dom::visible_text(doc);

        Ok(PartialRecord {
            source_link: listing.url,
            landlord: contact_name(doc).unwrap_or(listing.provider_name),
            published_date: listing.date_posted,
            rooms: rooms(doc),
            area_sqm: area_from_text(&text),
            warm_rent: warm_rent(doc),
            available_from: available_from(doc),
            address: address(doc),
        })
    }

    fn site(&self) -> SiteKind {
        SiteKind::ImmoScout24
    }
}

/// Read the listing object from the first JSON-LD block.
///
/// A missing block, unparseable JSON, a missing `@graph` list or a graph item
/// without `@type` ahead of the listing fails the whole document. A graph without
/// a listing object just leaves the fields empty.
fn structured_listing(doc: &Html) -> Result<StructuredListing> {
    let script = dom::first(doc, &JSON_LD_SCRIPT)
        .context("no application/ld+json structured data block")?;
    let raw: String = script.text().collect();
    if raw.trim().is_empty() {
        anyhow::bail!("structured data block is empty");
    }

    let data: Value =
        serde_json::from_str(&raw).context("structured data block is not valid JSON")?;
    let graph = data
        .get("@graph")
        .and_then(Value::as_array)
        .context("structured data has no @graph list")?;

    let mut found = None;
    for item in graph {
        let kind = item
            .get("@type")
            .context("structured data item has no @type")?;
        if kind.as_str() == Some(LISTING_TYPE) {
            found = Some(item);
            break;
        }
    }
    let Some(listing) = found else {
        debug!("No {} object in @graph", LISTING_TYPE);
        return Ok(StructuredListing::default());
    };

    Ok(StructuredListing {
        url: string_field(listing, &["url"]),
        provider_name: string_field(listing, &["provider", "name"]),
        date_posted: string_field(listing, &["datePosted"]),
    })
}

fn string_field(value: &Value, path: &[&str]) -> String {
    path.iter()
        .try_fold(value, |v, key| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// The rendered contact name, when present, beats the structured-data provider.
fn contact_name(doc: &Html) -> Option<String> {
    dom::first(doc, &IS24_CONTACT_NAME).map(|el| dom::stripped_text(el, ""))
}

fn rooms(doc: &Html) -> String {
    dom::first(doc, &IS24_ROOMS_META)
        .and_then(|el| el.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// First `<number> m²` in the page text, decimal comma turned into a dot.
pub fn area_from_text(text: &str) -> String {
    IS24_AREA
        .captures(text)
        .map(|caps| caps[1].replace(',', "."))
        .unwrap_or_default()
}

fn warm_rent(doc: &Html) -> String {
    dom::first(doc, &IS24_WARM_RENT)
        .map(|el| dom::stripped_text(el, ""))
        .unwrap_or_default()
}

fn available_from(doc: &Html) -> String {
    match dom::value_after_label(doc, &IS24_MOVE_IN_LABEL) {
        Some(value) => dom::stripped_text(value, ""),
        None => {
            debug!("No move-in date next to a 'Bezugsfrei ab' label");
            String::new()
        }
    }
}

fn address(doc: &Html) -> String {
    let Some(block) = dom::first(doc, &IS24_ADDRESS_BLOCK) else {
        return DEFAULT_CITY.to_string();
    };

    let street = block
        .select(&IS24_STREET)
        .next()
        .map(|el| dom::stripped_text(el, "").trim_end_matches(',').to_string())
        .unwrap_or_default();
    let zip_region = block
        .select(&IS24_ZIP_REGION)
        .next()
        .map(|el| dom::stripped_text(el, ""))
        .unwrap_or_default();

    compose_address(&street, &zip_region)
}

/// Join street and zip/region. When the zip line is the "full address on
/// request" placeholder, keep the street, or the placeholder itself if there is
/// no street either.
pub fn compose_address(street: &str, zip_region: &str) -> String {
    if !zip_region.to_lowercase().contains(HIDDEN_ADDRESS_PHRASE) {
        format!("{street}, {zip_region}")
            .trim_matches(|c: char| c == ',' || c == ' ')
            .to_string()
    } else if !street.is_empty() {
        street.to_string()
    } else {
        zip_region.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_LD: &str = r#"<script type="application/ld+json">
        {"@context": "https://schema.org", "@graph": [
            {"@type": "Organization", "name": "ImmobilienScout24"},
            {"@type": "RealEstateListing",
             "url": "https://www.immobilienscout24.de/expose/123456",
             "datePosted": "2024-08-01",
             "provider": {"@type": "Organization", "name": "Wohnbau GmbH"}}
        ]}
    </script>"#;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!(
            "<html><head>{JSON_LD}\
             <meta name=\"branch:deeplink:expose-number-of-rooms\" content=\"3\">\
             </head><body>{body}</body></html>"
        ))
    }

    fn extract(doc: &Html) -> PartialRecord {
        ImmoScout24Extractor
            .extract(doc, &DocumentContext::default())
            .unwrap()
    }

    #[test]
    fn reads_structured_data() {
        let record = extract(&page("<p>ImmobilienScout24</p>"));
        assert_eq!(record.source_link, "https://www.immobilienscout24.de/expose/123456");
        assert_eq!(record.landlord, "Wohnbau GmbH");
        assert_eq!(record.published_date, "2024-08-01");
        assert_eq!(record.rooms, "3");
    }

    #[test]
    fn contact_name_overrides_provider() {
        let record = extract(&page(r#"<span data-qa="contactName"> Frau Meier </span>"#));
        assert_eq!(record.landlord, "Frau Meier");
    }

    #[test]
    fn area_normalizes_decimal_comma() {
        assert_eq!(area_from_text("Wohnfläche ca. 54,5 m² Zimmer 2"), "54.5");
        assert_eq!(area_from_text("70 m²"), "70");
        assert_eq!(area_from_text("keine Angabe"), "");
        let record = extract(&page("<dd>54,5 m²</dd>"));
        assert_eq!(record.area_sqm, "54.5");
    }

    #[test]
    fn warm_rent_from_nested_span() {
        let record = extract(&page(
            r#"<div class="is24qa-warmmiete-main"><span>1.250 €</span></div>"#,
        ));
        assert_eq!(record.warm_rent, "1.250 €");
        assert_eq!(extract(&page("<p>kein Preis</p>")).warm_rent, "");
    }

    #[test]
    fn available_from_next_to_label() {
        let record = extract(&page(
            r#"<dl><dt class="label">Bezugsfrei ab</dt><dd> 01.10.2024 </dd></dl>"#,
        ));
        assert_eq!(record.available_from, "01.10.2024");
    }

    #[test]
    fn address_defaults_to_city_without_block() {
        assert_eq!(extract(&page("<p>x</p>")).address, DEFAULT_CITY);
    }

    #[test]
    fn address_joins_street_and_zip() {
        let record = extract(&page(
            r#"<div class="address-block"><span class="block">Leopoldstr. 12,</span>
               <span class="zip-region-and-country">80802 München, Schwabing</span></div>"#,
        ));
        assert_eq!(record.address, "Leopoldstr. 12, 80802 München, Schwabing");
    }

    #[test]
    fn address_placeholder_rules() {
        assert_eq!(compose_address("", "80331 München"), "80331 München");
        assert_eq!(
            compose_address("Sendlinger Str. 1", "Vollständige Adresse nach Anfrage"),
            "Sendlinger Str. 1"
        );
        assert_eq!(
            compose_address("", "Vollständige Adresse nach Anfrage"),
            "Vollständige Adresse nach Anfrage"
        );
    }

    #[test]
    fn missing_structured_data_fails_document() {
        let doc = Html::parse_document("<p>ImmobilienScout24</p>");
        let err = ImmoScout24Extractor
            .extract(&doc, &DocumentContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("structured data"));
    }

    #[test]
    fn malformed_json_fails_document() {
        let doc = Html::parse_document(
            r#"<script type="application/ld+json">{"@graph": [</script>"#,
        );
        assert!(ImmoScout24Extractor
            .extract(&doc, &DocumentContext::default())
            .is_err());
    }

    #[test]
    fn graph_without_listing_leaves_fields_empty() {
        let doc = Html::parse_document(
            r#"<script type="application/ld+json">{"@graph": [{"@type": "WebPage"}]}</script>"#,
        );
        let record = extract(&doc);
        assert_eq!(record.source_link, "");
        assert_eq!(record.landlord, "");
        assert_eq!(record.published_date, "");
    }

    #[test]
    fn untyped_item_before_listing_fails_document() {
        let doc = Html::parse_document(
            r#"<script type="application/ld+json">
                {"@graph": [{"name": "x"}, {"@type": "RealEstateListing", "url": "u"}]}
            </script>"#,
        );
        let err = ImmoScout24Extractor
            .extract(&doc, &DocumentContext::default())
            .unwrap_err();
        assert!(err.to_string().contains("@type"));
    }

    #[test]
    fn untyped_item_after_listing_is_never_read() {
        let doc = Html::parse_document(
            r#"<script type="application/ld+json">
                {"@graph": [{"@type": "RealEstateListing", "url": "u"}, {"name": "x"}]}
            </script>"#,
        );
        assert_eq!(extract(&doc).source_link, "u");
    }
}
