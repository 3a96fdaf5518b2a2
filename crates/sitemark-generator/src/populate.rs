//! Sitemap population.
//!
//! The application owns the knowledge of which URLs exist; the library only
//! defines the seam through which that knowledge flows into a sitemap.

use crate::sitemap::{Result, SitemapGenerator};

/// Capability implemented by the application to fill a sitemap.
///
/// Invoked once per render against a fresh generator. Implementations query
/// their own content source (database, page store, filesystem) and call
/// [`SitemapGenerator::add`] zero or more times; adding nothing is valid and
/// yields an empty `<urlset>`.
pub trait SitemapPopulator {
    fn populate(&self, sitemap: &mut SitemapGenerator) -> Result<()>;
}
