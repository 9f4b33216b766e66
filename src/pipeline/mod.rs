pub mod batch;
pub mod normalize;
pub mod orchestrator;

pub use batch::{BatchRunner, RunSummary};
pub use normalize::normalize;
pub use orchestrator::{process, process_document};
