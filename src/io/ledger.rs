use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record of documents already turned into rows.
///
/// Append-only: an identifier, once recorded, is never removed.
pub trait Ledger {
    fn contains(&self, id: &str) -> bool;

    /// Mark a document as done. Only call after its row has been written.
    fn record(&mut self, id: &str) -> Result<()>;
}

/// Ledger backed by a text file with one identifier per line
pub struct FileLedger {
    path: PathBuf,
    seen: HashSet<String>,
    file: Option<File>,
}

impl FileLedger {
    /// Load every identifier from `path`. A missing file is an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let seen = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read ledger {}", path.display()))?;
            parse_ids(&text)
        } else {
            HashSet::new()
        };
        debug!("Loaded {} ledger entries from {}", seen.len(), path.display());
        Ok(Self {
            path,
            seen,
            file: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.seen.iter().map(String::as_str)
    }
}

fn parse_ids(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl Ledger for FileLedger {
    fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    fn record(&mut self, id: &str) -> Result<()> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open ledger {}", self.path.display()))?;
            self.file = Some(file);
        }
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{id}")
                .and_then(|()| file.flush())
                .with_context(|| format!("Failed to append to ledger {}", self.path.display()))?;
        }
        self.seen.insert(id.to_string());
        Ok(())
    }
}

/// In-memory ledger, for dry runs and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryLedger {
    seen: HashSet<String>,
    recorded: Vec<String>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            seen: ids.into_iter().map(str::to_string).collect(),
            recorded: Vec::new(),
        }
    }

    /// Identifiers recorded since creation, in order
    pub fn recorded(&self) -> &[String] {
        &self.recorded
    }
}

impl Ledger for MemoryLedger {
    fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    fn record(&mut self, id: &str) -> Result<()> {
        self.seen.insert(id.to_string());
        self.recorded.push(id.to_string());
        Ok(())
    }
}
