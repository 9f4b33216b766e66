use crate::error::ExtractionError;
use crate::io::ledger::Ledger;
use crate::io::progress::Progress;
use crate::io::sink::RecordSink;
use crate::io::source::DocumentSource;
use crate::pipeline::orchestrator::process;
use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Outcome counts of one run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub processed: usize,
    pub skipped: usize,
    pub unknown_site: usize,
    pub malformed: usize,
}

impl RunSummary {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            started_at: now,
            finished_at: now,
            processed: 0,
            skipped: 0,
            unknown_site: 0,
            malformed: 0,
        }
    }

    pub fn failed(&self) -> usize {
        self.unknown_site + self.malformed
    }

    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Drives every pending document through extraction and hands the results to
/// the sink and the ledger.
pub struct BatchRunner<'a> {
    ledger: &'a mut dyn Ledger,
    sink: &'a mut dyn RecordSink,
    progress: &'a mut dyn Progress,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        ledger: &'a mut dyn Ledger,
        sink: &'a mut dyn RecordSink,
        progress: &'a mut dyn Progress,
    ) -> Self {
        Self {
            ledger,
            sink,
            progress,
        }
    }

    /// Process every document the source offers.
    ///
    /// Per-document failures are reported and counted; they never stop the run
    /// and never reach the sink or the ledger. Sink and ledger I/O errors do
    /// stop the run.
    pub fn run(&mut self, source: &dyn DocumentSource) -> Result<RunSummary> {
        let mut summary = RunSummary::start();
        let docs = source.entries()?;
        info!("Found {} documents", docs.len());
        self.progress.begin(docs.len());

        for ctx in &docs {
            if self.ledger.contains(&ctx.id) {
                summary.skipped += 1;
                self.progress.skipped(&ctx.id);
                continue;
            }

            let outcome = source
                .read(ctx)
                .map_err(|cause| ExtractionError::malformed(&ctx.id, cause))
                .and_then(|html| process(&html, ctx));

            match outcome {
                Ok(record) => {
                    self.sink.write(&record)?;
                    // Only once the row is durable.
                    self.ledger.record(&ctx.id)?;
                    summary.processed += 1;
                    self.progress.processed(&ctx.id);
                }
                Err(err) => {
                    match err {
                        ExtractionError::UnknownSite { .. } => summary.unknown_site += 1,
                        ExtractionError::MalformedDocument { .. } => summary.malformed += 1,
                    }
                    warn!("{}", err);
                    self.progress.failed(&err);
                }
            }
        }

        self.sink.finish()?;

        summary.finished_at = Utc::now();
        info!(
            "✅ {} processed, {} skipped, {} failed",
            summary.processed,
            summary.skipped,
            summary.failed()
        );
        self.progress.finish(&summary);
        Ok(summary)
    }
}
