// src/sitemap/entry.rs
// =============================================================================
// The data that ends up in sitemap.xml.
//
// - UrlEntry: one <url> block (loc, lastmod, changefreq, priority)
// - ChangeFreq: how often crawlers should expect a page to change
// - StaticPage: a fixed page of the site (home, showcase, ...)
//
// Entries are created once by the builder and never changed afterwards.
// =============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a page is expected to change
///
/// Serialized exactly as the sitemap protocol spells it ("weekly")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFreq {
    Weekly,
    Monthly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One <url> block of the sitemap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// Absolute URL of the page
    pub loc: String,
    /// Date only, written as YYYY-MM-DD
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    /// Kept as text ("1.0", "0.8") so it is written exactly as given
    pub priority: String,
}

/// A fixed page of the site, listed before all generated pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    /// Path relative to the base URL, starting with '/'
    pub path: String,
    pub priority: String,
    pub changefreq: ChangeFreq,
}

impl StaticPage {
    pub fn new(path: &str, priority: &str, changefreq: ChangeFreq) -> Self {
        Self {
            path: path.to_string(),
            priority: priority.to_string(),
            changefreq,
        }
    }
}

// The static pages of the showcase site, in sitemap order
pub fn default_static_pages() -> Vec<StaticPage> {
    vec![
        StaticPage::new("/", "1.0", ChangeFreq::Weekly),
        StaticPage::new("/showcase", "0.8", ChangeFreq::Weekly),
        StaticPage::new("/sponsors", "0.5", ChangeFreq::Monthly),
        StaticPage::new("/favorites", "0.5", ChangeFreq::Monthly),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changefreq_spelling() {
        assert_eq!(ChangeFreq::Weekly.to_string(), "weekly");
        assert_eq!(ChangeFreq::Monthly.to_string(), "monthly");
        assert_eq!(serde_json::to_string(&ChangeFreq::Monthly).unwrap(), "\"monthly\"");
    }

    #[test]
    fn test_default_static_pages_order() {
        let paths: Vec<_> = default_static_pages().into_iter().map(|p| p.path).collect();
        assert_eq!(paths, vec!["/", "/showcase", "/sponsors", "/favorites"]);
    }
}
