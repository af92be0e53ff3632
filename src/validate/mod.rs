//! Record validation and the authoring-defect taxonomy
//!
//! Every defect is recoverable at record granularity: a bad record is
//! reported and skipped, never allowed to abort enumeration of its siblings.

use std::fmt;
use thiserror::Error;
use url::Url;

use crate::record::{body, Record};

/// An authoring-time content defect
#[derive(Error, Debug)]
pub enum Defect {
    /// Required header field is absent or blank; blocks the record from
    /// the published subset
    #[error("missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    /// Header cannot be parsed; fatal for this record only
    #[error("malformed metadata: {reason}")]
    MalformedMetadata { reason: String },

    /// A reference that does not resolve; non-fatal
    #[error("broken reference `{target}`: {reason}")]
    BrokenReference { target: String, reason: String },
}

impl Defect {
    /// Fatal defects exclude the record from enumeration; non-fatal ones
    /// are warnings the author should fix
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Defect::BrokenReference { .. })
    }
}

/// A defect tied to the record it was found in
#[derive(Debug)]
pub struct Diagnostic {
    /// Source path of the offending record, relative to the content dir
    pub source: String,
    pub defect: Defect,
}

impl Diagnostic {
    pub fn new(source: impl Into<String>, defect: Defect) -> Self {
        Self {
            source: source.into(),
            defect,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.defect)
    }
}

/// Check a loaded record's references: the header image must exist next to
/// the record, `github`/`live` must be valid absolute URLs, and local image
/// targets in the body must resolve. All findings are non-fatal.
pub fn check_references(record: &Record, check_body_images: bool) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let record_dir = record.full_source.parent();

    if let Some(image) = &record.image {
        if let Some(dir) = record_dir {
            if !dir.join(image).exists() {
                diagnostics.push(Diagnostic::new(
                    &record.source,
                    Defect::BrokenReference {
                        target: image.clone(),
                        reason: "image file not found".to_string(),
                    },
                ));
            }
        }
    }

    for (field, value) in [("github", &record.github), ("live", &record.live)] {
        if let Some(raw) = value {
            if let Err(e) = Url::parse(raw) {
                diagnostics.push(Diagnostic::new(
                    &record.source,
                    Defect::BrokenReference {
                        target: raw.clone(),
                        reason: format!("`{}` is not a valid URL: {}", field, e),
                    },
                ));
            }
        }
    }

    if check_body_images {
        if let Some(dir) = record_dir {
            for target in body::local_image_refs(&record.body) {
                if !dir.join(&target).exists() {
                    diagnostics.push(Diagnostic::new(
                        &record.source,
                        Defect::BrokenReference {
                            target,
                            reason: "image file not found".to_string(),
                        },
                    ));
                }
            }
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    fn record_at(full_source: PathBuf) -> Record {
        Record {
            title: "X".to_string(),
            published: None,
            description: None,
            image: None,
            tags: Vec::new(),
            category: None,
            github: None,
            live: None,
            draft: false,
            body: String::new(),
            source: "x/index.md".to_string(),
            full_source,
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_missing_image_is_broken_reference() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = record_at(dir.path().join("index.md"));
        record.image = Some("./cover.png".to_string());

        let diagnostics = check_references(&record, false);
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics[0].defect,
            Defect::BrokenReference { .. }
        ));
        assert!(!diagnostics[0].defect.is_fatal());
    }

    #[test]
    fn test_present_image_passes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("cover.png"), b"png").unwrap();
        let mut record = record_at(dir.path().join("index.md"));
        record.image = Some("cover.png".to_string());

        assert!(check_references(&record, false).is_empty());
    }

    #[test]
    fn test_invalid_url_is_broken_reference() {
        let dir = tempfile::tempdir().unwrap();
        let mut record = record_at(dir.path().join("index.md"));
        record.github = Some("github.com/no-scheme".to_string());
        record.live = Some("https://example.dev".to_string());

        let diagnostics = check_references(&record, false);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].to_string().contains("github.com/no-scheme"));
    }

    #[test]
    fn test_body_image_refs_checked() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("shot.png"), b"png").unwrap();
        let mut record = record_at(dir.path().join("index.md"));
        record.body = "![ok](./shot.png)\n\n![gone](./missing.png)\n".to_string();

        let diagnostics = check_references(&record, true);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].to_string().contains("missing.png"));
    }
}
