//! Active navigation marking.
//!
//! Link targets and the current location are compared in canonical form
//! (see [`folio_content::normalize`]), so the marker and the content resolver
//! agree on what "the same page" means.

use folio_content::{ROOT_PATH, normalize};

use crate::view::NavLink;

/// Canonical path of a location or link target: query and fragment
/// stripped, then normalized.
pub fn canonical_path(href: &str) -> String {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    normalize(&href[..end])
}

/// Whether a link to `target` is active on `current`.
///
/// Both arguments must be canonical. A link is active on its own page and,
/// unless it targets the root, on every page whose path starts with it.
pub fn is_active(target: &str, current: &str) -> bool {
    target == current || (target != ROOT_PATH && current.starts_with(target))
}

/// Set the active flag of every link against `location`.
pub fn mark_active(links: &mut [NavLink], location: &str) {
    let current = canonical_path(location);
    for link in links {
        link.active = is_active(&canonical_path(&link.href), &current);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn link(href: &str) -> NavLink {
        NavLink {
            href: href.to_owned(),
            label: href.to_owned(),
            active: false,
        }
    }

    #[test]
    fn test_canonical_path() {
        assert_eq!(canonical_path("/About/"), "/about");
        assert_eq!(canonical_path("/about?ref=nav"), "/about");
        assert_eq!(canonical_path("/about#team"), "/about");
        assert_eq!(canonical_path("/About/?a=1#b"), "/about");
        assert_eq!(canonical_path("#top"), "/");
        assert_eq!(canonical_path(""), "/");
    }

    #[test]
    fn test_exact_match_is_active() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn test_prefix_match_is_active() {
        assert!(is_active("/about", "/about/team"));
        assert!(!is_active("/contact", "/about/team"));
    }

    #[test]
    fn test_root_only_matches_itself() {
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn test_prefix_is_plain_string_prefix() {
        assert!(is_active("/legal", "/legalese"));
    }

    #[test]
    fn test_mark_active_sets_and_clears() {
        let mut links = vec![link("/"), link("/about"), link("/contact")];
        links[2].active = true;

        mark_active(&mut links, "/About/Team/");

        let flags: Vec<_> = links.iter().map(|l| l.active).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_mark_active_on_root() {
        let mut links = vec![link("/"), link("/about")];

        mark_active(&mut links, "/");

        assert!(links[0].active);
        assert!(!links[1].active);
    }
}
