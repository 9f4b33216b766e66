use crate::models::{ListingRecord, PartialRecord};

/// Attach batch metadata to an extracted record. Layout only, values pass through.
pub fn normalize(partial: PartialRecord, sequence: &str, batch_label: &str) -> ListingRecord {
    let PartialRecord {
        source_link,
        landlord,
        published_date,
        rooms,
        area_sqm,
        warm_rent,
        available_from,
        address,
    } = partial;

    ListingRecord {
        sequence: sequence.to_string(),
        batch_label: batch_label.to_string(),
        source_link,
        landlord,
        published_date,
        rooms,
        area_sqm,
        warm_rent,
        available_from,
        address,
    }
}
