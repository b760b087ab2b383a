// src/sitemap/mod.rs
// =============================================================================
// This module generates sitemap.xml for the showcase site.
//
// Submodules:
// - slug: display name -> URL slug
// - config: loads the category config and tool identifiers
// - entry: the <url> data model and the static page list
// - builder: orders entries (static pages, tools, category pages)
// - xml: renders the document
// - error: what can abort a run
//
// `generate` ties it all together in one pass:
//   load -> build -> render -> write
// The file is written once at the very end, so a failed load never leaves a
// half-written sitemap behind.
// =============================================================================

mod builder;
mod config;
mod entry;
mod error;
mod slug;
mod xml;

pub use builder::{build_entries, normalize_base_url, SitemapInput};
pub use config::{
    extract_tool_ids, load_categories, load_tool_ids, parse_categories, parse_tool_ids_json,
    Category,
};
pub use entry::{default_static_pages, ChangeFreq, StaticPage, UrlEntry};
pub use error::SitemapError;
pub use slug::to_slug;
pub use xml::render;

use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base URL of the production site
pub const DEFAULT_BASE_URL: &str = "https://reactbits.dev";

/// Where the site serves sitemap.xml from
pub const DEFAULT_OUTPUT_PATH: &str = "public/sitemap.xml";

/// Options for one sitemap run
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    pub categories_path: PathBuf,
    /// No tools file means no tool entries
    pub tools_path: Option<PathBuf>,
    pub base_url: String,
    pub output_path: PathBuf,
    /// The <lastmod> date for every entry
    pub date: NaiveDate,
    pub static_pages: Vec<StaticPage>,
}

impl SitemapOptions {
    /// Options with the site defaults, dated today (UTC)
    pub fn new(categories_path: impl Into<PathBuf>) -> Self {
        Self {
            categories_path: categories_path.into(),
            tools_path: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            date: chrono::Utc::now().date_naive(),
            static_pages: default_static_pages(),
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct SitemapReport {
    pub output_path: PathBuf,
    pub url_count: usize,
    pub static_count: usize,
    pub tool_count: usize,
    pub category_page_count: usize,
    pub date: NaiveDate,
}

// Runs the whole generation and writes the file
//
// Returns the report on success. Any error aborts before the write.
pub async fn generate(options: &SitemapOptions) -> Result<SitemapReport, SitemapError> {
    let base_url = normalize_base_url(&options.base_url)?;

    let categories = load_categories(&options.categories_path).await?;

    let tool_ids = match &options.tools_path {
        Some(path) => load_tool_ids(path).await?,
        None => Vec::new(),
    };

    let input = SitemapInput {
        base_url,
        date: options.date,
        static_pages: options.static_pages.clone(),
        tool_ids,
        categories,
    };

    let entries = build_entries(&input);
    let document = render(&entries);

    debug!(bytes = document.len(), "rendered sitemap");

    write_output(&options.output_path, &document).await?;

    let static_count = input.static_pages.len();
    let tool_count = input.tool_ids.len();

    let report = SitemapReport {
        output_path: options.output_path.clone(),
        url_count: entries.len(),
        static_count,
        tool_count,
        category_page_count: entries.len() - static_count - tool_count,
        date: options.date,
    };

    info!(
        urls = report.url_count,
        output = %report.output_path.display(),
        "sitemap written"
    );

    Ok(report)
}

async fn write_output(path: &Path, document: &str) -> Result<(), SitemapError> {
    let write_failed = |source| SitemapError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_failed)?;
    }

    tokio::fs::write(path, document).await.map_err(write_failed)
}
