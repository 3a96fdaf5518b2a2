//! HTML meta tag generation.
//!
//! Accumulates name/content pairs and renders them as an HTML fragment of
//! `<meta>` elements for inclusion in a document head.

use sitemark_core::config::MetaConfig;
use tracing::debug;

use crate::escape::escape_attr;

/// A single name/content meta tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

/// HTML meta tag generator.
///
/// Entries are kept in insertion order and never deduplicated; a name added
/// twice is emitted twice.
#[derive(Debug, Default)]
pub struct MetaGenerator {
    tags: Vec<MetaTag>,
}

impl MetaGenerator {
    /// Create a generator seeded with default tags, in iteration order.
    #[must_use]
    pub fn new<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tags: defaults
                .into_iter()
                .map(|(name, content)| MetaTag {
                    name: name.into(),
                    content: content.into(),
                })
                .collect(),
        }
    }

    /// Create a generator seeded from the `[meta]` config section.
    #[must_use]
    pub fn from_config(config: &MetaConfig) -> Self {
        Self::new(config.defaults.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Append a tag.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.tags.push(MetaTag {
            name: name.into(),
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
    ///
    /// No entries render as the empty string.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!(count = self.tags.len(), "generating meta fragment");

        let lines: Vec<String> = self
            .tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<meta name="{}" content="{}">"#,
                    escape_attr(&tag.name),
                    escape_attr(&tag.content)
                )
            })
            .collect();

        lines.join("\n")
    }
}
