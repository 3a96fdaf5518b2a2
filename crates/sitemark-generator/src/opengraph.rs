//! Open Graph tag generation.
//!
//! Accumulates property/content pairs and renders them as an HTML fragment
//! of `<meta property=...>` elements. Property prefixes (`og:`, `twitter:`)
//! are the caller's concern and are not validated here.

use tracing::debug;

use crate::escape::escape_attr;

/// A single property/content Open Graph tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgTag {
    pub property: String,
    pub content: String,
}

/// Open Graph tag generator.
#[derive(Debug, Default)]
pub struct OpenGraphGenerator {
    tags: Vec<OgTag>,
}

impl OpenGraphGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag. Duplicate properties are kept; every entry is emitted.
    pub fn add(&mut self, property: impl Into<String>, content: impl Into<String>) {
        self.tags.push(OgTag {
            property: property.into(),
            content: content.into(),
        });
    }

    /// Number of accumulated tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Render the fragment, one `<meta>` element per line in insertion order.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!(count = self.tags.len(), "generating open graph fragment");

        let lines: Vec<String> = self
            .tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<meta property="{}" content="{}">"#,
                    escape_attr(&tag.property),
                    escape_attr(&tag.content)
                )
            })
            .collect();

        lines.join("\n")
    }
}
