pub mod classifier;
pub mod dom;
pub mod immoscout24;
pub mod immowelt;
pub mod patterns;
pub mod traits;
pub mod types;

pub use classifier::classify;
pub use immoscout24::ImmoScout24Extractor;
pub use immowelt::ImmoweltExtractor;
pub use traits::SiteExtractor;
pub use types::DocumentContext;

use crate::models::SiteKind;

static IMMOSCOUT24: ImmoScout24Extractor = ImmoScout24Extractor;
static IMMOWELT: ImmoweltExtractor = ImmoweltExtractor;

/// Extractor registered for a site, `None` for `SiteKind::Unknown`.
pub fn extractor_for(site: SiteKind) -> Option<&'static dyn SiteExtractor> {
    match site {
        SiteKind::ImmoScout24 => Some(&IMMOSCOUT24),
        SiteKind::Immowelt => Some(&IMMOWELT),
        SiteKind::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_site_has_its_extractor() {
        for site in [SiteKind::ImmoScout24, SiteKind::Immowelt] {
            assert_eq!(extractor_for(site).map(|e| e.site()), Some(site));
        }
        assert!(extractor_for(SiteKind::Unknown).is_none());
    }
}
