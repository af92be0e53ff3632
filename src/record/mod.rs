//! Record module - content records, their metadata header, and enumeration

pub mod body;
mod frontmatter;
pub mod loader;
mod record;

pub use frontmatter::FrontMatter;
pub use loader::{Enumeration, RecordLoader};
pub use record::Record;
