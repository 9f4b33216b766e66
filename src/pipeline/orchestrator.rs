use crate::error::ExtractionError;
use crate::models::ListingRecord;
use crate::pipeline::normalize::normalize;
use crate::scrapers::{self, DocumentContext};
use scraper::Html;
use tracing::debug;

/// Parse one saved page and turn it into a listing row.
///
/// The parsed document lives only for this call. Unknown sites and extractor
/// failures come back as errors for the caller to report; nothing is retried.
pub fn process(html: &str, ctx: &DocumentContext) -> Result<ListingRecord, ExtractionError> {
    let doc = Html::parse_document(html);
    process_document(&doc, ctx)
}

/// Same as [`process`] for an already parsed document.
pub fn process_document(
    doc: &Html,
    ctx: &DocumentContext,
) -> Result<ListingRecord, ExtractionError> {
    let site = scrapers::classify(doc);
    let Some(extractor) = scrapers::extractor_for(site) else {
        return Err(ExtractionError::UnknownSite { id: ctx.id.clone() });
    };

    let partial = extractor
        .extract(doc, ctx)
        .map_err(|cause| ExtractionError::malformed(&ctx.id, cause))?;
    debug!("Extracted {} from {}", site, ctx.id);

    Ok(normalize(partial, &ctx.sequence, &ctx.batch_label))
}
