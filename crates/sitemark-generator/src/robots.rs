//! robots.txt generation.
//!
//! Accumulates crawler directives in insertion order and renders them as a
//! plain-text robots.txt document.

use std::fmt;
use std::io::Write;

use sitemark_core::Config;
use tracing::debug;

/// A single robots.txt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotsLine {
    UserAgent(String),
    Disallow(String),
    Allow(String),
    Sitemap(String),
    /// Blank line between directive blocks.
    Spacer,
}

impl fmt::Display for RobotsLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserAgent(value) => write!(f, "User-agent: {value}"),
            Self::Disallow(path) => write!(f, "Disallow: {path}"),
            Self::Allow(path) => write!(f, "Allow: {path}"),
            Self::Sitemap(url) => write!(f, "Sitemap: {url}"),
            Self::Spacer => Ok(()),
        }
    }
}

/// robots.txt generator.
///
/// Pure text assembly: paths and URLs are accepted as-is, empty strings
/// included (`Disallow:` with no path disallows nothing).
#[derive(Debug, Default)]
pub struct RobotsGenerator {
    lines: Vec<RobotsLine>,
}

impl RobotsGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the default document from config: one user-agent block with the
    /// configured rules, then a pointer to the sitemap.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut robots = Self::new();
        robots.add_user_agent(config.robots.user_agent.as_str());
        for path in &config.robots.disallow {
            robots.add_disallow(path.as_str());
        }
        for path in &config.robots.allow {
            robots.add_allow(path.as_str());
        }
        robots.add_spacer();
        robots.add_sitemap(config.url_for("sitemap.xml"));
        robots
    }

    pub fn add_user_agent(&mut self, value: impl Into<String>) {
        self.lines.push(RobotsLine::UserAgent(value.into()));
    }

    pub fn add_disallow(&mut self, path: impl Into<String>) {
        self.lines.push(RobotsLine::Disallow(path.into()));
    }

    pub fn add_allow(&mut self, path: impl Into<String>) {
        self.lines.push(RobotsLine::Allow(path.into()));
    }

    pub fn add_sitemap(&mut self, url: impl Into<String>) {
        self.lines.push(RobotsLine::Sitemap(url.into()));
    }

    /// Append a blank line.
    pub fn add_spacer(&mut self) {
        self.lines.push(RobotsLine::Spacer);
    }

    /// Number of accumulated lines, spacers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the document, one directive per line in insertion order.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!(count = self.lines.len(), "generating robots.txt");

        let lines: Vec<String> = self.lines.iter().map(ToString::to_string).collect();
        lines.join("\n")
    }

    /// Write the rendered document to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.generate().as_bytes())
    }
}
