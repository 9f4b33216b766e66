//! One command-line run: open the configured files and drive the batch.

use crate::config::Config;
use crate::io::{
    CsvSink, FileLedger, FileSource, JsonSink, MemoryLedger, MemorySink, Progress, RecordSink,
};
use crate::pipeline::{BatchRunner, RunSummary};
use anyhow::Result;
use tracing::info;

/// Run one extraction pass over `config.input`.
///
/// A dry run still skips documents listed in the ledger file, but writes
/// neither the table, the JSON export nor the ledger.
pub fn run(config: &Config, progress: &mut dyn Progress) -> Result<RunSummary> {
    let source = FileSource::new(&config.input, config.numbering);
    let mut ledger = FileLedger::open(&config.ledger)?;
    info!("Ledger: {}", ledger.path().display());

    if config.dry_run {
        info!("Dry run: nothing will be written");
        let mut ledger = MemoryLedger::from_ids(ledger.ids());
        let mut sink = MemorySink::default();
        return BatchRunner::new(&mut ledger, &mut sink, progress).run(&source);
    }

    let csv = CsvSink::open(&config.output)?;
    info!("Output: {}", csv.path().display());
    let mut sinks: Vec<Box<dyn RecordSink>> = vec![Box::new(csv)];
    if let Some(json) = &config.json {
        sinks.push(Box::new(JsonSink::new(json)));
    }

    let summary = BatchRunner::new(&mut ledger, &mut sinks, progress).run(&source)?;
    if summary.processed > 0 {
        info!("💾 Appended {} rows to {}", summary.processed, config.output.display());
    }
    Ok(summary)
}
