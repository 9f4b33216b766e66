use serde::{Deserialize, Serialize};
use std::fmt;

/// Source site of a listing document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SiteKind {
    ImmoScout24,
    Immowelt,
    Unknown,
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteKind::ImmoScout24 => "immoscout24",
            SiteKind::Immowelt => "immowelt",
            SiteKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Fields a site extractor pulls out of one document.
///
/// Every field is independently optional; an empty string means "not found".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialRecord {
    pub source_link: String,
    pub landlord: String,
    pub published_date: String,
    pub rooms: String,
    pub area_sqm: String,
    pub warm_rent: String,
    pub available_from: String,
    pub address: String,
}

/// One output row: extracted fields plus batch metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub sequence: String,
    pub batch_label: String,
    pub source_link: String,
    pub landlord: String,
    pub published_date: String,
    pub rooms: String,
    pub area_sqm: String,
    pub warm_rent: String,
    pub available_from: String,
    pub address: String,
}

impl ListingRecord {
    /// Column titles, in row order.
    pub const HEADERS: [&'static str; 12] = [
        "#",
        "Date",
        "Link",
        "",
        "",
        "Land Lord",
        "Published",
        "Rooms",
        "m²",
        "Price (Warm)",
        "Available From",
        "Address",
    ];

    /// Flatten into the tabular layout. The two blank columns between the link
    /// and the landlord are kept for compatibility with existing spreadsheets.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.sequence.clone(),
            self.batch_label.clone(),
            self.source_link.clone(),
            String::new(),
            String::new(),
            self.landlord.clone(),
            self.published_date.clone(),
            self.rooms.clone(),
            self.area_sqm.clone(),
            self.warm_rent.clone(),
            self.available_from.clone(),
            self.address.clone(),
        ]
    }
}
