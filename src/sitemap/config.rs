// src/sitemap/config.rs
// =============================================================================
// Loads the site data the sitemap is built from.
//
// Two inputs:
// - the category config: which component categories exist and which
//   subcategory pages each one has
// - the tool identifiers: one sitemap entry per tool page
//
// The category config is plain JSON. We parse it as data; nothing in it is
// ever executed. Two shapes are accepted:
//
//   [ { "name": "Text Animations", "subcategories": ["Index", "Fade"] } ]
//
//   { "categories": [ ...same records... ] }
//
// Tool identifiers come either from a JSON file (a list of ids, or a list of
// objects with an "id" field) or from any other text file, which is scanned
// for `id: 'some-tool'` occurrences. Finding no ids is fine; it just means
// the sitemap has no tool entries.
// =============================================================================

use super::error::SitemapError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One component category and its subcategory pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "Text Animations"
    pub name: String,
    /// Subcategory display names, in site order. Required; a record
    /// without it makes the whole config unparseable
    pub subcategories: Vec<String>,
}

// The two accepted top-level shapes of the category config
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryDocument {
    List(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

// An entry of a JSON tools file
#[derive(Deserialize)]
#[serde(untagged)]
enum ToolEntry {
    Id(String),
    Record { id: String },
}

// Parses the category config from its JSON text
pub fn parse_categories(text: &str) -> Result<Vec<Category>, serde_json::Error> {
    let document: CategoryDocument = serde_json::from_str(text)?;

    Ok(match document {
        CategoryDocument::List(categories) => categories,
        CategoryDocument::Wrapped { categories } => categories,
    })
}

// Reads and parses the category config
//
// Returns an error if the file is missing/unreadable or not a valid
// category document. Either way the whole run must stop.
pub async fn load_categories(path: &Path) -> Result<Vec<Category>, SitemapError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SitemapError::CategoriesUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let categories = parse_categories(&text).map_err(|source| SitemapError::CategoriesUnparseable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), count = categories.len(), "loaded categories");
    Ok(categories)
}

// Finds every `id: 'x'` / `id: "x"` in a piece of source text
//
// Example:
//   "{ id: 'background-studio', label: 'Studio' }" -> ["background-studio"]
pub fn extract_tool_ids(source: &str) -> Vec<String> {
    // The pattern is a constant and known to be valid, so a failure here is
    // a programmer error
    let pattern = Regex::new(r#"id:\s*['"]([^'"]+)['"]"#).expect("tool id pattern is valid");

    pattern
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect()
}

// Parses a JSON tools file: a list of ids or of objects with an "id"
pub fn parse_tool_ids_json(text: &str) -> Result<Vec<String>, serde_json::Error> {
    let entries: Vec<ToolEntry> = serde_json::from_str(text)?;

    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            ToolEntry::Id(id) => id,
            ToolEntry::Record { id } => id,
        })
        .collect())
}

// Reads the tool identifiers from a file
//
// ".json" files are parsed as data, anything else is scanned as source text
pub async fn load_tool_ids(path: &Path) -> Result<Vec<String>, SitemapError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SitemapError::ToolsUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let ids = if is_json {
        parse_tool_ids_json(&text).map_err(|source| SitemapError::ToolsUnparseable {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        extract_tool_ids(&text)
    };

    debug!(path = %path.display(), count = ids.len(), "loaded tool ids");
    Ok(ids)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[serde(untagged)]?
//    - serde tries each variant in order and keeps the first that fits
//    - That is how one file can be either a list or { "categories": [...] }
//
// 2. Why map_err instead of plain `?`?
//    - The io/serde errors don't know which file they came from
//    - map_err wraps them in our own error together with the path
//
// 3. What is captures_iter?
//    - It walks every match of the regex in the text
//    - caps[1] is the first parenthesized group: the id itself
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_list() {
        let json = r#"[
            { "name": "Text Animations", "subcategories": ["Index", "Fade"] },
            { "name": "Backgrounds", "subcategories": ["Aurora"] }
        ]"#;
        let categories = parse_categories(json).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Text Animations");
        assert_eq!(categories[0].subcategories, vec!["Index", "Fade"]);
    }

    #[test]
    fn test_parse_wrapped_categories() {
        let json = r#"{ "categories": [ { "name": "Components", "subcategories": [] } ] }"#;
        let categories = parse_categories(json).unwrap();
        assert_eq!(categories, vec![Category { name: "Components".into(), subcategories: vec![] }]);
    }

    #[test]
    fn test_parse_categories_rejects_source_code() {
        let js = "export const CATEGORIES = [{ name: 'Text Animations' }];";
        assert!(parse_categories(js).is_err());
    }

    #[test]
    fn test_parse_categories_requires_subcategories() {
        assert!(parse_categories(r#"[{"name":"X"}]"#).is_err());
        assert!(parse_categories(r#"{ "categories": [{"name":"X"}] }"#).is_err());
    }

    #[tokio::test]
    async fn test_load_categories_record_without_subcategories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.json");
        std::fs::write(&path, r#"[{ "name": "Backgrounds" }]"#).unwrap();

        let result = load_categories(&path).await;
        assert!(matches!(result, Err(SitemapError::CategoriesUnparseable { .. })));
    }

    #[test]
    fn test_extract_tool_ids_from_source() {
        let source = r#"
            const TOOLS = [
              { id: 'background-studio', label: 'Studio' },
              { id:"shape-magic", label: "Shapes" },
            ];
        "#;
        assert_eq!(extract_tool_ids(source), vec!["background-studio", "shape-magic"]);
    }

    #[test]
    fn test_extract_tool_ids_no_matches() {
        assert!(extract_tool_ids("export default function ToolsPage() {}").is_empty());
    }

    #[test]
    fn test_parse_tool_ids_json_mixed() {
        let json = r#"["a", { "id": "b", "label": "B" }]"#;
        assert_eq!(parse_tool_ids_json(json).unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_load_categories_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_categories(&dir.path().join("nope.json")).await;
        assert!(matches!(result, Err(SitemapError::CategoriesUnreadable { .. })));
    }

    #[tokio::test]
    async fn test_load_tool_ids_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("tools.json");
        std::fs::write(&json_path, r#"["one"]"#).unwrap();
        assert_eq!(load_tool_ids(&json_path).await.unwrap(), vec!["one"]);

        let jsx_path = dir.path().join("ToolsPage.jsx");
        std::fs::write(&jsx_path, "{ id: 'two' }").unwrap();
        assert_eq!(load_tool_ids(&jsx_path).await.unwrap(), vec!["two"]);
    }
}
