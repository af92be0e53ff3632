//! Validate the content store

use anyhow::Result;

use crate::record::{Enumeration, RecordLoader};
use crate::validate::{self, Diagnostic};
use crate::Quire;

/// Run validation across the whole store and gather every diagnostic:
/// fatal load defects first, then reference findings per surviving record.
pub fn collect_diagnostics(quire: &Quire) -> Vec<Diagnostic> {
    diagnose(quire, RecordLoader::new(quire).enumerate())
}

fn diagnose(quire: &Quire, found: Enumeration) -> Vec<Diagnostic> {
    let mut diagnostics = found.defects;
    for record in &found.records {
        diagnostics.extend(validate::check_references(
            record,
            quire.config.check_body_images,
        ));
    }
    diagnostics
}

/// Validate the store and print a report.
///
/// Defects are author warnings; the command fails only under `--strict`.
pub fn run(quire: &Quire, strict: bool) -> Result<()> {
    let found = RecordLoader::new(quire).enumerate();
    let survivors = found.records.len();
    let diagnostics = diagnose(quire, found);

    for diagnostic in &diagnostics {
        println!("warning: {}", diagnostic);
    }

    let fatal = diagnostics.iter().filter(|d| d.defect.is_fatal()).count();
    println!(
        "{} record(s) checked, {} excluded, {} warning(s)",
        survivors + fatal,
        fatal,
        diagnostics.len()
    );

    if strict && !diagnostics.is_empty() {
        anyhow::bail!("{} defect(s) found", diagnostics.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::validate::Defect;
    use std::fs;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, Quire) {
        let dir = tempfile::tempdir().unwrap();
        let content_dir = dir.path().join("content");
        for (rel, body) in files {
            let path = content_dir.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let quire = Quire {
            config: StoreConfig::default(),
            base_dir: dir.path().to_path_buf(),
            content_dir,
        };
        (dir, quire)
    }

    #[test]
    fn test_strict_fails_on_defects_default_does_not() {
        let (_dir, quire) = store_with(&[
            ("untitled.md", "---\ndescription: no title\n---\nbody"),
            ("good.md", "---\ntitle: Good\n---\nbody"),
        ]);

        assert!(run(&quire, false).is_ok());
        assert!(run(&quire, true).is_err());
    }

    #[test]
    fn test_strict_passes_on_clean_store() {
        let (_dir, quire) = store_with(&[("good.md", "---\ntitle: Good\n---\nbody")]);

        assert!(run(&quire, true).is_ok());
    }

    #[test]
    fn test_collect_gathers_fatal_and_reference_defects() {
        let (_dir, quire) = store_with(&[
            ("untitled.md", "---\ndescription: no title\n---\n"),
            (
                "linked.md",
                "---\ntitle: Linked\ngithub: not a url\n---\nbody",
            ),
        ]);

        let diagnostics = collect_diagnostics(&quire);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .any(|d| matches!(d.defect, Defect::MissingRequiredField { .. })));
        assert!(diagnostics
            .iter()
            .any(|d| matches!(d.defect, Defect::BrokenReference { .. })));
    }
}
