// src/sitemap/error.rs
// =============================================================================
// Errors for sitemap generation.
//
// Every variant is fatal: generation is a one-shot build step, so there is
// nothing to retry and no partial output is ever written.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a sitemap run
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The category config file could not be read
    #[error("could not read category config {path}: {source}")]
    CategoriesUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The category config file is not a valid category document
    #[error("could not parse category config {path}: {source}")]
    CategoriesUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The tools file could not be read
    #[error("could not read tools file {path}: {source}")]
    ToolsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON tools file did not hold a list of ids
    #[error("could not parse tools file {path}: {source}")]
    ToolsUnparseable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL is not an absolute http(s) URL
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Writing sitemap.xml failed
    #[error("could not write sitemap to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
