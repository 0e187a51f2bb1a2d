//! Path normalization.
//!
//! Every lookup and comparison of page paths goes through [`normalize`], so
//! content resolution and active-navigation marking always agree on what a
//! path means.

/// Canonical key of the site root.
pub const ROOT_PATH: &str = "/";

/// Normalize a location path to its canonical key.
///
/// Strips all trailing `/` characters, lower-cases the rest, and maps an
/// empty result to `/`.
///
/// # Examples
///
/// ```
/// use folio_content::normalize;
///
/// assert_eq!(normalize("/About/"), "/about");
/// assert_eq!(normalize("/ABOUT"), "/about");
/// assert_eq!(normalize(""), "/");
/// assert_eq!(normalize("///"), "/");
/// ```
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_owned()
    } else {
        trimmed.to_lowercase()
    }
}

/// Whether `path` is already in canonical form.
pub fn is_normalized(path: &str) -> bool {
    normalize(path) == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_and_trailing_slash_variants_agree() {
        for path in ["/About/", "/about", "/ABOUT", "/about//", "/AbOuT///"] {
            assert_eq!(normalize(path), "/about", "path {path:?}");
        }
    }

    #[test]
    fn test_normalize_root_forms() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("////"), "/");
    }

    #[test]
    fn test_normalize_keeps_inner_slashes() {
        assert_eq!(normalize("/Legal/Privacy/"), "/legal/privacy");
        assert_eq!(normalize("/a//b/"), "/a//b");
    }

    #[test]
    fn test_normalize_unicode_lowercase() {
        assert_eq!(normalize("/ÜBER/"), "/über");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("/Legal/Terms/");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_is_normalized() {
        assert!(is_normalized("/"));
        assert!(is_normalized("/legal/terms"));
        assert!(!is_normalized("/legal/"));
        assert!(!is_normalized("/Legal"));
        assert!(!is_normalized(""));
    }
}
