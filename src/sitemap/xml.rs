// src/sitemap/xml.rs
// =============================================================================
// Renders sitemap entries as a sitemaps.org 0.9 document.
//
// Layout (two-space indentation, one <url> block per entry):
//
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://reactbits.dev/</loc>
//       <lastmod>2025-01-02</lastmod>
//       <changefreq>weekly</changefreq>
//       <priority>1.0</priority>
//     </url>
//   </urlset>
//
// There is no newline after </urlset>.
// =============================================================================

use super::entry::UrlEntry;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const URLSET_OPEN: &str = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#;
const URLSET_CLOSE: &str = "</urlset>";

// Renders the whole document
pub fn render(entries: &[UrlEntry]) -> String {
    let blocks: Vec<String> = entries.iter().map(render_url).collect();

    let mut xml = String::new();
    xml.push_str(XML_HEADER);
    xml.push('\n');
    xml.push_str(URLSET_OPEN);
    xml.push('\n');
    xml.push_str(&blocks.join("\n"));
    xml.push('\n');
    xml.push_str(URLSET_CLOSE);
    xml
}

fn render_url(entry: &UrlEntry) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>",
        escape(&entry.loc),
        entry.lastmod.format("%Y-%m-%d"),
        entry.changefreq,
        escape(&entry.priority),
    )
}

// Escapes the five XML special characters
//
// Slugs keep punctuation, so a category like "Buttons & Links" would
// otherwise break the document
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
