//! Markdown body inspection

use pulldown_cmark::{Event, Options, Parser, Tag};

/// Collect image targets in the body that point at local files.
///
/// Absolute URLs, site-rooted paths, and fragment links are the renderer's
/// concern; only co-located asset references are returned.
pub fn local_image_refs(body: &str) -> Vec<String> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(body, options);

    let mut refs = Vec::new();
    for event in parser {
        if let Event::Start(Tag::Image { dest_url, .. }) = event {
            if is_local(&dest_url) {
                refs.push(dest_url.to_string());
            }
        }
    }
    refs
}

fn is_local(target: &str) -> bool {
    !target.is_empty()
        && !target.starts_with('/')
        && !target.starts_with('#')
        && !target.contains("://")
        && !target.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_relative_images_only() {
        let body = r#"
# Screenshots

![cover](./cover.png)
![remote](https://cdn.example.com/pic.jpg)
![rooted](/assets/pic.jpg)
![inline](shot.webp)
"#;

        let refs = local_image_refs(body);
        assert_eq!(refs, vec!["./cover.png", "shot.webp"]);
    }

    #[test]
    fn test_images_inside_html_are_ignored() {
        // Raw HTML fragments are passed through untouched; sanitizing and
        // resolving them is the external renderer's job
        let body = "<img src=\"./raw.png\" />\n\nplain text\n";
        assert!(local_image_refs(body).is_empty());
    }

    #[test]
    fn test_code_blocks_are_not_scanned() {
        let body = "```md\n![fake](./not-real.png)\n```\n";
        assert!(local_image_refs(body).is_empty());
    }
}
