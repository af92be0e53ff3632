//! Create a new content record

use anyhow::{bail, Result};
use std::fs;
use std::path::PathBuf;

use crate::record::FrontMatter;
use crate::Quire;

/// Scaffold a new record as `<content_dir>/<slug>/index.md` so cover images
/// and other assets can live next to it
pub fn run(
    quire: &Quire,
    title: &str,
    draft: bool,
    category: Option<&str>,
    tags: &[String],
) -> Result<PathBuf> {
    if title.trim().is_empty() {
        bail!("title must not be empty");
    }

    let slug = slug::slugify(title);
    let record_dir = quire.content_dir.join(&slug);
    let file_path = record_dir.join("index.md");

    if file_path.exists() {
        bail!("record already exists: {:?}", file_path);
    }

    let fm = FrontMatter {
        title: Some(title.to_string()),
        published: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
        category: category.map(String::from),
        tags: tags.to_vec(),
        draft,
        ..Default::default()
    };

    fs::create_dir_all(&record_dir)?;
    fs::write(&file_path, fm.to_header()?)?;

    tracing::info!("created {:?}", file_path);
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::record::RecordLoader;

    fn empty_store() -> (tempfile::TempDir, Quire) {
        let dir = tempfile::tempdir().unwrap();
        let quire = Quire {
            config: StoreConfig::default(),
            base_dir: dir.path().to_path_buf(),
            content_dir: dir.path().join("content"),
        };
        (dir, quire)
    }

    #[test]
    fn test_new_record_enumerates() {
        let (_dir, quire) = empty_store();
        let path = run(&quire, "My New Project", false, Some("Projects"), &[]).unwrap();
        assert!(path.ends_with("my-new-project/index.md"));

        let found = RecordLoader::new(&quire).enumerate();
        assert!(found.defects.is_empty());
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.records[0].title, "My New Project");
        assert_eq!(found.records[0].category.as_deref(), Some("Projects"));
        assert!(found.records[0].published.is_some());
    }

    #[test]
    fn test_draft_scaffold_excluded_from_published() {
        let (_dir, quire) = empty_store();
        run(&quire, "Work in Progress", true, None, &[]).unwrap();

        let found = RecordLoader::new(&quire).enumerate();
        assert_eq!(found.records.len(), 1);
        assert_eq!(found.published().count(), 0);
    }

    #[test]
    fn test_existing_record_not_overwritten() {
        let (_dir, quire) = empty_store();
        run(&quire, "Once", false, None, &[]).unwrap();
        assert!(run(&quire, "Once", false, None, &[]).is_err());
    }
}
