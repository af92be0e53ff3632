//! List store content

use anyhow::Result;

use crate::record::{Record, RecordLoader};
use crate::Quire;

/// List store content by type
pub fn run(quire: &Quire, content_type: &str, include_drafts: bool) -> Result<()> {
    let include_drafts = include_drafts || quire.config.include_drafts;
    let found = RecordLoader::new(quire).enumerate();

    let mut records: Vec<&Record> = found
        .records
        .iter()
        .filter(|r| include_drafts || r.is_published())
        .collect();

    // Newest first for display; the store itself imposes no order
    records.sort_by(|a, b| b.published.cmp(&a.published));

    match content_type {
        "record" | "records" => {
            println!("Records ({}):", records.len());
            for record in records {
                let date = record
                    .published
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "undated".to_string());
                let marker = if record.draft { " (draft)" } else { "" };
                println!("  {} - {}{} [{}]", date, record.title, marker, record.source);
            }
        }
        "tag" | "tags" => {
            let mut tags: std::collections::HashMap<&str, usize> =
                std::collections::HashMap::new();
            for record in &records {
                for tag in &record.tags {
                    *tags.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let mut categories: std::collections::HashMap<&str, usize> =
                std::collections::HashMap::new();
            for record in &records {
                if let Some(category) = &record.category {
                    *categories.entry(category.as_str()).or_insert(0) += 1;
                }
            }
            println!("Categories ({}):", categories.len());
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: record, tag, category",
                content_type
            );
        }
    }

    Ok(())
}
