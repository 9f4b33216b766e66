use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the sequence column is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Numbering {
    /// File name without extension (`3.html` → `3`)
    #[default]
    Stem,
    /// 1-based position inside the batch folder
    Position,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "apartment-extract",
    version,
    about = "Turn saved apartment listing pages into one spreadsheet"
)]
pub struct Config {
    /// Folder holding the `htmls_<label>` batch folders
    #[arg(long, default_value = "./HTMLs")]
    pub input: PathBuf,

    /// Semicolon-separated output table (appended to)
    #[arg(long, default_value = "apartment_list.csv")]
    pub output: PathBuf,

    /// List of documents already processed
    #[arg(long, default_value = "parsed_files.txt")]
    pub ledger: PathBuf,

    /// Sequence column source
    #[arg(long, value_enum, default_value_t = Numbering::Stem)]
    pub numbering: Numbering,

    /// Also save this run's records as a JSON array
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Extract and report, but write neither the table nor the ledger
    #[arg(long)]
    pub dry_run: bool,
}
