//! URL scheme allow-lists.
//!
//! A candidate link is safe only if, after trimming, it starts with an
//! allow-listed scheme. The comparison lowercases the scheme only; the
//! emitted URL keeps its original casing and content. Callers degrade unsafe
//! URLs to plain escaped text rather than dropping the item.

const CONTACT_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];
const WEB_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Allow-list for contact and portfolio links.
pub fn is_safe_contact_url(candidate: &str) -> bool {
    has_allowed_scheme(candidate, &CONTACT_SCHEMES)
}

/// Stricter allow-list for project links, which are always web resources.
pub fn is_safe_web_url(candidate: &str) -> bool {
    has_allowed_scheme(candidate, &WEB_SCHEMES)
}

fn has_allowed_scheme(candidate: &str, schemes: &[&str]) -> bool {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return false;
    }
    let bytes = trimmed.as_bytes();
    schemes.iter().any(|scheme| {
        bytes.len() >= scheme.len() && bytes[..scheme.len()].eq_ignore_ascii_case(scheme.as_bytes())
    })
}
