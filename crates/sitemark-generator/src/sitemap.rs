//! Sitemap generation.
//!
//! Accumulates URL entries and renders a sitemap.xml document conforming to
//! the sitemap protocol 0.9 schema.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use std::io::Write;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use crate::escape::escape_xml;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap entry validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum SitemapError {
    /// An entry was added with an empty location.
    #[error("sitemap entry location must not be empty")]
    EmptyLocation,

    /// Priority outside the protocol range.
    #[error("priority {0} is outside the range 0.0..=1.0")]
    InvalidPriority(f32),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// Absolute URL of the page.
    pub loc: String,

    /// Last modification date.
    pub lastmod: Option<NaiveDate>,

    /// Expected change frequency.
    pub changefreq: Option<ChangeFreq>,

    /// Crawl priority (0.0 to 1.0).
    pub priority: Option<f32>,
}

impl SitemapUrl {
    /// Create an entry with only a location.
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// Sitemap generator.
///
/// A plain accumulator: duplicate locations are kept verbatim, and no
/// ordering policy is applied. Deciding what belongs in the sitemap is the
/// populator's job.
#[derive(Debug, Default)]
pub struct SitemapGenerator {
    urls: Vec<SitemapUrl>,
}

impl SitemapGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a URL entry.
    ///
    /// # Errors
    ///
    /// Rejects an empty location or a priority outside `0.0..=1.0`; the
    /// entry is not appended.
    pub fn add(&mut self, url: SitemapUrl) -> Result<()> {
        if url.loc.is_empty() {
            return Err(SitemapError::EmptyLocation);
        }
        if let Some(priority) = url.priority {
            if !(0.0..=1.0).contains(&priority) {
                return Err(SitemapError::InvalidPriority(priority));
            }
        }

        self.urls.push(url);
        Ok(())
    }

    /// Append a location-only entry.
    pub fn add_loc(&mut self, loc: impl Into<String>) -> Result<()> {
        self.add(SitemapUrl::new(loc))
    }

    /// Number of accumulated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Render the sitemap XML document.
    ///
    /// Optional fields are omitted when absent; zero entries produce a valid
    /// empty `<urlset>`.
    #[must_use]
    pub fn generate(&self) -> String {
        debug!(count = self.urls.len(), "generating sitemap");

        let mut xml = String::with_capacity(128 + self.urls.len() * 128);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for url in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&url.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = url.lastmod {
                xml.push_str(&format!(
                    "    <lastmod>{}</lastmod>\n",
                    lastmod.format("%Y-%m-%d")
                ));
            }
            if let Some(changefreq) = url.changefreq {
                xml.push_str(&format!(
                    "    <changefreq>{}</changefreq>\n",
                    changefreq.as_str()
                ));
            }
            if let Some(priority) = url.priority {
                xml.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write the rendered document to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(self.generate().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_empty() {
        let sitemap = SitemapGenerator::new();
        let xml = sitemap.generate();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_single_url_with_priority() {
        let mut sitemap = SitemapGenerator::new();
        let mut url = SitemapUrl::new("https://example.com/");
        url.priority = Some(0.8);
        sitemap.add(url).expect("valid entry");

        let xml = sitemap.generate();
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(!xml.contains("<changefreq>"));
    }

    #[test]
    fn test_lastmod_and_changefreq() {
        let mut sitemap = SitemapGenerator::new();
        let mut url = SitemapUrl::new("https://example.com/posts/hello/");
        url.lastmod = NaiveDate::from_ymd_opt(2025, 1, 1);
        url.changefreq = Some(ChangeFreq::Daily);
        sitemap.add(url).expect("valid entry");

        let xml = sitemap.generate();
        assert!(xml.contains("<lastmod>2025-01-01</lastmod>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
    }

    #[test]
    fn test_empty_location_rejected() {
        let mut sitemap = SitemapGenerator::new();
        let mut url = SitemapUrl::new("");
        url.priority = Some(0.5);

        assert_eq!(sitemap.add(url), Err(SitemapError::EmptyLocation));
        assert!(sitemap.is_empty());
    }

    #[test]
    fn test_priority_out_of_range_rejected() {
        let mut sitemap = SitemapGenerator::new();

        let mut url = SitemapUrl::new("https://x/");
        url.priority = Some(1.5);
        assert_eq!(sitemap.add(url), Err(SitemapError::InvalidPriority(1.5)));

        let mut url = SitemapUrl::new("https://x/");
        url.priority = Some(-0.1);
        assert_eq!(sitemap.add(url), Err(SitemapError::InvalidPriority(-0.1)));

        assert!(sitemap.is_empty());
    }

    #[test]
    fn test_boundary_priorities_accepted() {
        let mut sitemap = SitemapGenerator::new();
        for priority in [0.0, 1.0] {
            let mut url = SitemapUrl::new("https://example.com/");
            url.priority = Some(priority);
            sitemap.add(url).expect("boundary priority is valid");
        }

        let xml = sitemap.generate();
        assert!(xml.contains("<priority>0.0</priority>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut sitemap = SitemapGenerator::new();
        sitemap.add_loc("https://example.com/").expect("valid");
        sitemap
            .add_loc("https://example.com/posts/hello/")
            .expect("valid");
        sitemap.add_loc("https://example.com/about/").expect("valid");

        let xml = sitemap.generate();
        let first = xml.find("https://example.com/</loc>").unwrap();
        let second = xml.find("https://example.com/posts/hello/").unwrap();
        let third = xml.find("https://example.com/about/").unwrap();
        assert!(first < second);
        assert!(second < third);
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_duplicate_locations_kept() {
        let mut sitemap = SitemapGenerator::new();
        sitemap.add_loc("https://example.com/").expect("valid");
        sitemap.add_loc("https://example.com/").expect("valid");

        assert_eq!(sitemap.len(), 2);
        assert_eq!(sitemap.generate().matches("<url>").count(), 2);
    }

    #[test]
    fn test_escapes_special_chars_in_loc() {
        let mut sitemap = SitemapGenerator::new();
        sitemap
            .add_loc("https://example.com/search?q=a&b=c")
            .expect("valid");

        let xml = sitemap.generate();
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_xml_structure() {
        let mut sitemap = SitemapGenerator::new();
        sitemap.add_loc("https://example.com/").expect("valid");

        let xml = sitemap.generate();
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(*lines.last().unwrap(), "</urlset>");
    }

    #[test]
    fn test_write_to_matches_generate() {
        let mut sitemap = SitemapGenerator::new();
        sitemap.add_loc("https://example.com/").expect("valid");

        let mut buf = Vec::new();
        sitemap.write_to(&mut buf).expect("write");
        assert_eq!(buf, sitemap.generate().into_bytes());
    }
}
