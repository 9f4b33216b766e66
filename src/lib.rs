//! Extract apartment listings from saved ImmoScout24 and Immowelt pages into
//! one semicolon-separated table, skipping pages that were already converted.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod scrapers;

pub use error::ExtractionError;
pub use models::{ListingRecord, PartialRecord, SiteKind};
pub use pipeline::{process, BatchRunner, RunSummary};
pub use scrapers::DocumentContext;
