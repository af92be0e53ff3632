//! Content record model

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// One post or page in the store.
///
/// Identity is the storage path (`source`), never a field value, so two
/// records may carry the same title without colliding.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Record title (required, non-empty)
    pub title: String,

    /// Publish date, absent for undated pages
    pub published: Option<NaiveDate>,

    /// Short description
    pub description: Option<String>,

    /// Cover image path, relative to the record's directory
    pub image: Option<String>,

    /// Presentational labels
    pub tags: Vec<String>,

    /// Presentational classification
    pub category: Option<String>,

    /// External project repository URL
    pub github: Option<String>,

    /// External live-site URL
    pub live: Option<String>,

    /// Excluded from published listings when true
    pub draft: bool,

    /// Raw markdown body
    pub body: String,

    /// Source path relative to the content directory (the record's identity)
    pub source: String,

    /// Absolute source path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Record {
    /// Whether the record belongs to the published subset
    pub fn is_published(&self) -> bool {
        !self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, title: &str, draft: bool) -> Record {
        Record {
            title: title.to_string(),
            published: None,
            description: None,
            image: None,
            tags: Vec::new(),
            category: None,
            github: None,
            live: None,
            draft,
            body: String::new(),
            source: source.to_string(),
            full_source: PathBuf::from(source),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_draft_excluded_from_published() {
        assert!(!record("a.md", "A", true).is_published());
        assert!(record("b.md", "B", false).is_published());
    }

    #[test]
    fn test_identity_is_structural() {
        let a = record("projects/dashboard/index.md", "React Admin Dashboard", false);
        let b = record("posts/dashboard-v2.md", "React Admin Dashboard", false);
        assert_eq!(a.title, b.title);
        assert_ne!(a.source, b.source);
    }
}
