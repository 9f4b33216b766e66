use crate::config::Numbering;
use crate::scrapers::DocumentContext;
use anyhow::{Context, Result};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Prefix of batch folder names, compared case-insensitively
const BATCH_DIR_PREFIX: &str = "htmls_";

/// Where the saved listing pages come from
pub trait DocumentSource {
    /// Every document on offer, in processing order.
    fn entries(&self) -> Result<Vec<DocumentContext>>;

    /// Raw markup of one document.
    fn read(&self, ctx: &DocumentContext) -> Result<String>;
}

/// Saved pages on disk, grouped in batch folders named `htmls_<label>`
pub struct FileSource {
    root: PathBuf,
    numbering: Numbering,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>, numbering: Numbering) -> Self {
        Self {
            root: root.into(),
            numbering,
        }
    }

    fn batch_dirs(&self) -> Result<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read input folder {}", self.root.display()))?;

        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type()?.is_dir() && name.to_lowercase().starts_with(BATCH_DIR_PREFIX) {
                dirs.push((name, entry.path()));
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn batch_documents(&self, dir_name: &str, dir: &Path) -> Result<Vec<DocumentContext>> {
        let label = batch_label(dir_name);
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
            let path = entry?.path();
            if path.is_file() && is_html(&path) {
                files.push(path);
            }
        }
        files.sort_by(|a, b| compare_stems(&stem(a), &stem(b)));
        debug!("Batch {} has {} documents", label, files.len());

        Ok(files
            .iter()
            .enumerate()
            .map(|(idx, path)| {
                let stem = stem(path);
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let sequence = match self.numbering {
                    Numbering::Stem => stem.clone(),
                    Numbering::Position => (idx + 1).to_string(),
                };
                DocumentContext::new(format!("{dir_name}/{file_name}"), stem, sequence, label)
            })
            .collect())
    }
}

impl DocumentSource for FileSource {
    fn entries(&self) -> Result<Vec<DocumentContext>> {
        let mut docs = Vec::new();
        for (name, path) in self.batch_dirs()? {
            docs.extend(self.batch_documents(&name, &path)?);
        }
        if docs.is_empty() {
            warn!("No documents found under {}", self.root.display());
        }
        Ok(docs)
    }

    fn read(&self, ctx: &DocumentContext) -> Result<String> {
        let path = self.root.join(&ctx.id);
        let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// `htmls_07.08` → `07.08`: the second `_`-separated part of the folder name.
pub fn batch_label(dir_name: &str) -> &str {
    dir_name.split('_').nth(1).unwrap_or_default()
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().starts_with("htm"))
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Numeric stems in numeric order first, then everything else by name.
fn compare_stems(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| {
        if !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit()) {
            s.parse::<u64>().ok()
        } else {
            None
        }
    };
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Documents held in memory, mostly for tests
#[derive(Debug, Default)]
pub struct InMemorySource {
    docs: Vec<(DocumentContext, String)>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ctx: DocumentContext, html: impl Into<String>) {
        self.docs.push((ctx, html.into()));
    }
}

impl DocumentSource for InMemorySource {
    fn entries(&self) -> Result<Vec<DocumentContext>> {
        Ok(self.docs.iter().map(|(ctx, _)| ctx.clone()).collect())
    }

    fn read(&self, ctx: &DocumentContext) -> Result<String> {
        self.docs
            .iter()
            .find(|(c, _)| c.id == ctx.id)
            .map(|(_, html)| html.clone())
            .with_context(|| format!("No document {}", ctx.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<p>x</p>").unwrap();
    }

    #[test]
    fn label_is_second_part() {
        assert_eq!(batch_label("htmls_07.08"), "07.08");
        assert_eq!(batch_label("HTMLS_a_b"), "a");
        assert_eq!(batch_label("htmls"), "");
    }

    #[test]
    fn numeric_stems_sort_numerically() {
        let mut stems = vec!["10", "b", "2", "a", "1"];
        stems.sort_by(|a, b| compare_stems(a, b));
        assert_eq!(stems, ["1", "2", "10", "a", "b"]);
    }

    #[test]
    fn walks_batch_folders_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("htmls_08.08/10.html"));
        touch(&root.join("htmls_08.08/2.htm"));
        touch(&root.join("htmls_07.08/1.html"));
        touch(&root.join("htmls_07.08/notes.txt"));
        touch(&root.join("other/3.html"));

        let source = FileSource::new(root, Numbering::Stem);
        let docs = source.entries().unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["htmls_07.08/1.html", "htmls_08.08/2.htm", "htmls_08.08/10.html"]);
        assert_eq!(docs[2].batch_label, "08.08");
        assert_eq!(docs[2].sequence, "10");
        assert_eq!(docs[2].fallback_id, "10");
        assert_eq!(source.read(&docs[0]).unwrap(), "<p>x</p>");
    }

    #[test]
    fn position_numbering_restarts_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("htmls_a/5.html"));
        touch(&root.join("htmls_a/9.html"));
        touch(&root.join("htmls_b/7.html"));

        let docs = FileSource::new(root, Numbering::Position).entries().unwrap();
        let seq: Vec<_> = docs.iter().map(|d| d.sequence.as_str()).collect();
        assert_eq!(seq, ["1", "2", "1"]);
    }
}
