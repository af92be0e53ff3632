//! Record loader - enumerates content records from the store directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Record};
use crate::validate::{Defect, Diagnostic};
use crate::Quire;

/// Enumerates records from a store's content directory
pub struct RecordLoader<'a> {
    quire: &'a Quire,
}

impl<'a> RecordLoader<'a> {
    /// Create a new record loader
    pub fn new(quire: &'a Quire) -> Self {
        Self { quire }
    }

    /// Lazily walk the store in discovery order.
    ///
    /// Each item is either a loaded record or the diagnostic that excluded
    /// it; a defective record never stops iteration. Re-running the
    /// iterator over an unchanged store yields the same sequence.
    pub fn iter(&self) -> Records<'_> {
        Records {
            loader: self,
            walker: WalkDir::new(&self.quire.content_dir)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter(),
        }
    }

    /// Enumerate the whole store, splitting records from diagnostics
    pub fn enumerate(&self) -> Enumeration {
        let mut records = Vec::new();
        let mut defects = Vec::new();

        for item in self.iter() {
            match item {
                Ok(record) => records.push(record),
                Err(diagnostic) => {
                    tracing::warn!("skipping record {}", diagnostic);
                    defects.push(diagnostic);
                }
            }
        }

        Enumeration { records, defects }
    }

    /// Load a single record from a file
    fn load_record(&self, path: &Path) -> Result<Record, Diagnostic> {
        let source = path
            .strip_prefix(&self.quire.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let content = fs::read_to_string(path).map_err(|e| {
            Diagnostic::new(
                &source,
                Defect::MalformedMetadata {
                    reason: format!("unreadable file: {}", e),
                },
            )
        })?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|e| {
            Diagnostic::new(
                &source,
                Defect::MalformedMetadata {
                    reason: e.to_string(),
                },
            )
        })?;

        let title = match fm.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => {
                return Err(Diagnostic::new(
                    &source,
                    Defect::MissingRequiredField { field: "title" },
                ))
            }
        };

        let published = fm.parse_published().map_err(|e| {
            Diagnostic::new(
                &source,
                Defect::MalformedMetadata {
                    reason: e.to_string(),
                },
            )
        })?;

        Ok(Record {
            title,
            published,
            description: fm.description,
            image: fm.image,
            tags: fm.tags,
            category: fm.category,
            github: fm.github,
            live: fm.live,
            draft: fm.draft,
            body: body.to_string(),
            source,
            full_source: path.to_path_buf(),
            extra: fm.extra,
        })
    }

    /// Directories the walk should not descend into
    fn skip_dir(&self, name: &str) -> bool {
        name.starts_with('_') || self.quire.config.skip.iter().any(|s| s == name)
    }
}

/// Lazy record iterator over a store directory
pub struct Records<'a> {
    loader: &'a RecordLoader<'a>,
    walker: walkdir::IntoIter,
}

impl Iterator for Records<'_> {
    type Item = Result<Record, Diagnostic>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("unreadable entry during enumeration: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            let name = entry.file_name().to_string_lossy();

            if entry.file_type().is_dir() {
                if entry.depth() > 0 && self.loader.skip_dir(&name) {
                    self.walker.skip_current_dir();
                }
                continue;
            }

            if path.is_file() && is_markdown_file(path) {
                return Some(self.loader.load_record(path));
            }
        }
    }
}

/// Records and diagnostics from one pass over the store
pub struct Enumeration {
    /// Records in discovery order; no further ordering is imposed here,
    /// sorting is the consumer's policy
    pub records: Vec<Record>,
    /// Diagnostics for records that could not be loaded
    pub defects: Vec<Diagnostic>,
}

impl Enumeration {
    /// The published subset: drafts excluded
    pub fn published(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.is_published())
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
