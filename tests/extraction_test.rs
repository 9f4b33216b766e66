use apartment_extract::scrapers::{classify, extractor_for};
use apartment_extract::{process, DocumentContext, ExtractionError, ListingRecord, SiteKind};
use scraper::Html;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
}

fn ctx(stem: &str) -> DocumentContext {
    DocumentContext::new(format!("htmls_07.08/{stem}.html"), stem, stem, "07.08")
}

#[test]
fn classifies_fixtures() {
    let is24 = Html::parse_document(&fixture("immoscout24"));
    let iw = Html::parse_document(&fixture("immowelt"));
    assert_eq!(classify(&is24), SiteKind::ImmoScout24);
    assert_eq!(classify(&iw), SiteKind::Immowelt);
}

#[test]
fn immoscout24_full_page() {
    let record = process(&fixture("immoscout24"), &ctx("1")).unwrap();
    assert_eq!(
        record,
        ListingRecord {
            sequence: "1".into(),
            batch_label: "07.08".into(),
            source_link: "https://www.immobilienscout24.de/expose/151234567".into(),
            landlord: "Frau Huber".into(),
            published_date: "2024-08-05T10:12:00+02:00".into(),
            rooms: "3".into(),
            area_sqm: "78.5".into(),
            warm_rent: "1.450 €".into(),
            available_from: "01.10.2024".into(),
            address: "Leopoldstraße 120, 80802 München, Schwabing".into(),
        }
    );
}

#[test]
fn immowelt_full_page() {
    let record = process(&fixture("immowelt"), &ctx("2")).unwrap();
    assert_eq!(
        record,
        ListingRecord {
            sequence: "2".into(),
            batch_label: "07.08".into(),
            source_link: "https://www.immowelt.de/expose/2b7kx4q".into(),
            landlord: "Berliner Wohnen GmbH".into(),
            published_date: String::new(),
            rooms: "2.5".into(),
            area_sqm: "64".into(),
            warm_rent: "1.250 €".into(),
            available_from: "15.09.2024".into(),
            address: "Torstraße 12, 10119 Berlin (Mitte)".into(),
        }
    );
}

#[test]
fn immoscout24_address_block_missing_defaults_to_munich() {
    let html = fixture("immoscout24").replace("address-block", "location-teaser");
    let record = process(&html, &ctx("1")).unwrap();
    assert_eq!(record.address, "München");
}

#[test]
fn immoscout24_hidden_address_placeholder_is_kept() {
    let html = fixture("immoscout24")
        .replace("Leopoldstraße 120,", "")
        .replace("80802 München, Schwabing", "Vollständige Adresse nach Anfrage");
    let record = process(&html, &ctx("1")).unwrap();
    assert_eq!(record.address, "Vollständige Adresse nach Anfrage");
}

#[test]
fn immoscout24_without_contact_uses_provider() {
    let html = fixture("immoscout24").replace(r#"data-qa="contactName""#, r#"data-qa="other""#);
    let record = process(&html, &ctx("1")).unwrap();
    assert_eq!(record.landlord, "Wohnbau Süd GmbH");
}

#[test]
fn immoscout24_without_structured_data_fails() {
    let html = fixture("immoscout24").replace("application/ld+json", "text/plain");
    let err = process(&html, &ctx("1")).unwrap_err();
    assert!(matches!(err, ExtractionError::MalformedDocument { .. }));
}

#[test]
fn immowelt_without_canonical_uses_stem() {
    let html = fixture("immowelt").replace(r#"rel="canonical""#, r#"rel="alternate""#);
    let record = process(&html, &ctx("17")).unwrap();
    assert_eq!(record.source_link, "https://www.immowelt.de/expose/17");
}

#[test]
fn sparse_pages_yield_empty_fields() {
    let record = process("<p>immowelt</p>", &ctx("5")).unwrap();
    assert_eq!(record.source_link, "https://www.immowelt.de/expose/5");
    assert!(record.to_row()[5..].iter().all(String::is_empty));

    let html = r#"<p>is24</p><script type="application/ld+json">{"@graph": []}</script>"#;
    let record = process(html, &ctx("5")).unwrap();
    assert_eq!(record.source_link, "");
    assert_eq!(record.address, "München");
    assert!(record.to_row()[5..11].iter().all(String::is_empty));
}

#[test]
fn extraction_is_repeatable() {
    for name in ["immoscout24", "immowelt"] {
        let html = fixture(name);
        assert_eq!(process(&html, &ctx("3")).unwrap(), process(&html, &ctx("3")).unwrap());
    }
}

#[test]
fn extractor_contract_matches_dispatch() {
    let doc = Html::parse_document(&fixture("immowelt"));
    let extractor = extractor_for(classify(&doc)).unwrap();
    assert_eq!(extractor.site(), SiteKind::Immowelt);
    let partial = extractor.extract(&doc, &ctx("2")).unwrap();
    assert_eq!(partial.warm_rent, "1.250 €");
}
