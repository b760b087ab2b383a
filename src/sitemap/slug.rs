// src/sitemap/slug.rs
// =============================================================================
// Turns display names ("Text Animations") into URL slugs ("text-animations").
//
// The rule is deliberately small:
// - lower-case everything
// - replace every run of whitespace with a single hyphen
//
// Punctuation is NOT stripped. "Buttons & Links" becomes "buttons-&-links".
// Existing site URLs were generated with this exact rule, so changing it
// would change published URLs.
// =============================================================================

// Converts a display name into a URL slug
//
// Example:
//   "Text Animations" -> "text-animations"
//   "Get  Started"    -> "get-started" (the double space is one run)
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    // Are we in the middle of a whitespace run?
    // We only emit one hyphen per run
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            // to_lowercase() can yield more than one char (e.g. 'İ')
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(to_slug("Text Animations"), "text-animations");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(to_slug("Get \t Started"), "get-started");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_kept_as_hyphens() {
        assert_eq!(to_slug(" Fade "), "-fade-");
    }

    #[test]
    fn test_punctuation_is_preserved() {
        assert_eq!(to_slug("Buttons & Links"), "buttons-&-links");
        assert_eq!(to_slug("3D Card"), "3d-card");
    }
}
