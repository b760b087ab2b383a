// src/sitemap/builder.rs
// =============================================================================
// Turns site data into the ordered list of sitemap entries.
//
// Order is fixed:
// 1. static pages, in the order given
// 2. one entry per tool:              <base>/tools/<id>          0.8 weekly
// 3. one entry per category page:     <base>/<category>/<sub>    0.7 weekly
//    (subcategories named exactly "Index" are skipped)
//
// Everything here is pure: same input and date, same output.
// =============================================================================

use super::config::Category;
use super::entry::{ChangeFreq, StaticPage, UrlEntry};
use super::error::SitemapError;
use super::slug::to_slug;
use chrono::NaiveDate;
use url::Url;

// Subcategory that stands for a category's landing page; it has no URL
const INDEX_SUBCATEGORY: &str = "Index";

const TOOL_PRIORITY: &str = "0.8";
const CATEGORY_PRIORITY: &str = "0.7";

/// Everything the builder needs for one run
#[derive(Debug, Clone)]
pub struct SitemapInput {
    /// Base URL without a trailing slash (see `normalize_base_url`)
    pub base_url: String,
    pub date: NaiveDate,
    pub static_pages: Vec<StaticPage>,
    pub tool_ids: Vec<String>,
    pub categories: Vec<Category>,
}

// Validates a base URL and strips its trailing slash
//
// Locations are built by plain concatenation (base + path), not by
// Url::join, so slugs are never reinterpreted as queries or fragments.
//
// Example:
//   "https://reactbits.dev/" -> "https://reactbits.dev"
//   "reactbits.dev"          -> error (not absolute)
pub fn normalize_base_url(base_url: &str) -> Result<String, SitemapError> {
    let parsed = Url::parse(base_url).map_err(|e| SitemapError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(SitemapError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(base_url.trim_end_matches('/').to_string())
}

// Builds the sitemap entries in their final order
pub fn build_entries(input: &SitemapInput) -> Vec<UrlEntry> {
    let base = input.base_url.as_str();
    let mut urls = Vec::new();

    for page in &input.static_pages {
        urls.push(UrlEntry {
            loc: format!("{}{}", base, page.path),
            lastmod: input.date,
            changefreq: page.changefreq,
            priority: page.priority.clone(),
        });
    }

    for tool_id in &input.tool_ids {
        urls.push(UrlEntry {
            loc: format!("{}/tools/{}", base, tool_id),
            lastmod: input.date,
            changefreq: ChangeFreq::Weekly,
            priority: TOOL_PRIORITY.to_string(),
        });
    }

    for category in &input.categories {
        let category_slug = to_slug(&category.name);

        for subcategory in &category.subcategories {
            if subcategory == INDEX_SUBCATEGORY {
                continue;
            }

            urls.push(UrlEntry {
                loc: format!("{}/{}/{}", base, category_slug, to_slug(subcategory)),
                lastmod: input.date,
                changefreq: ChangeFreq::Weekly,
                priority: CATEGORY_PRIORITY.to_string(),
            });
        }
    }

    urls
}
