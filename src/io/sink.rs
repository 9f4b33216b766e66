use crate::io::csv::{write_row, DELIMITER, UTF8_BOM};
use crate::models::ListingRecord;
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Destination for finished listing rows
pub trait RecordSink {
    /// Persist one record. When this returns `Ok` the row must be durable,
    /// because the document is marked processed right after.
    fn write(&mut self, record: &ListingRecord) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Several sinks fed in order
impl RecordSink for Vec<Box<dyn RecordSink>> {
    fn write(&mut self, record: &ListingRecord) -> Result<()> {
        self.iter_mut().try_for_each(|sink| sink.write(record))
    }

    fn finish(&mut self) -> Result<()> {
        self.iter_mut().try_for_each(|sink| sink.finish())
    }
}

/// Appends rows to a semicolon-separated table, creating it with a header row
pub struct CsvSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CsvSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        ensure_parent(&path)?;

        let is_new = !path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open output {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        if is_new {
            info!("Creating {}", path.display());
            write!(writer, "{UTF8_BOM}")?;
            write_row(&mut writer, &ListingRecord::HEADERS, DELIMITER)?;
            writer.flush()?;
        }

        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for CsvSink {
    fn write(&mut self, record: &ListingRecord) -> Result<()> {
        write_row(&mut self.writer, &record.to_row(), DELIMITER)
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to append row to {}", self.path.display()))
    }
}

/// Collects the run's records and saves them as one pretty-printed JSON array
pub struct JsonSink {
    path: PathBuf,
    records: Vec<ListingRecord>,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
        }
    }
}

impl RecordSink for JsonSink {
    fn write(&mut self, record: &ListingRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        ensure_parent(&self.path)?;
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        info!("💾 Saved {} records to {}", self.records.len(), self.path.display());
        Ok(())
    }
}

/// Keeps records in memory, for dry runs and tests
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<ListingRecord>,
}

impl RecordSink for MemorySink {
    fn write(&mut self, record: &ListingRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory {}", parent.display());
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
