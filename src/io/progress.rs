use crate::error::ExtractionError;
use crate::pipeline::RunSummary;

/// Per-document status reporting for whoever is watching the run.
/// Every hook is optional.
pub trait Progress {
    /// Called at the start with the number of documents found.
    fn begin(&mut self, _total: usize) {}

    fn processed(&mut self, _id: &str) {}

    /// Document was already in the ledger.
    fn skipped(&mut self, _id: &str) {}

    fn failed(&mut self, _error: &ExtractionError) {}

    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stdout
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Found {} documents", total);
    }

    fn processed(&mut self, id: &str) {
        println!("✔️ Processed: {}", id);
    }

    fn skipped(&mut self, id: &str) {
        println!("⏭️ Skipping already parsed file: {}", id);
    }

    fn failed(&mut self, error: &ExtractionError) {
        match error {
            ExtractionError::UnknownSite { id } => println!("❌ Unknown site structure: {}", id),
            ExtractionError::MalformedDocument { id, source } => {
                println!("❌ Error in {}: {}", id, source)
            }
        }
    }

    fn finish(&mut self, summary: &RunSummary) {
        println!();
        println!(
            "Done: {} processed, {} skipped, {} unknown, {} failed ({:.1}s)",
            summary.processed,
            summary.skipped,
            summary.unknown_site,
            summary.malformed,
            summary.elapsed_secs()
        );
    }
}
