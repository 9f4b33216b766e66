pub mod csv;
pub mod ledger;
pub mod progress;
pub mod sink;
pub mod source;

pub use ledger::{FileLedger, Ledger, MemoryLedger};
pub use progress::{ConsoleProgress, NullProgress, Progress};
pub use sink::{CsvSink, JsonSink, MemorySink, RecordSink};
pub use source::{DocumentSource, FileSource, InMemorySource};
