use crate::application::render::escape::escape_html;
use crate::application::render::url::is_safe_contact_url;
use crate::domain::resume::Link;

/// The portfolio links list. Omitted when the slice is empty. Labels default
/// to the URL; an optional type annotation follows in parentheses. Unsafe
/// URLs degrade the entry to plain escaped text instead of dropping it.
pub fn render_links(links: &[Link]) -> String {
    if links.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for link in links {
        let url = link.url.as_deref().unwrap_or("");
        let label = link.label.as_deref().unwrap_or(url);
        if label.is_empty() {
            continue;
        }
        let annotation = link
            .kind
            .as_deref()
            .map(|kind| format!(" <span class=\"muted\">({})</span>", escape_html(kind)))
            .unwrap_or_default();
        let body = if is_safe_contact_url(url) {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(url),
                escape_html(label)
            )
        } else {
            escape_html(label)
        };
        items.push_str(&format!("    <li class=\"link-item\">{body}{annotation}</li>\n"));
    }

    if items.is_empty() {
        return String::new();
    }

    format!(
        "<section class=\"section links-section\">\n  <h2 class=\"section-title\">Portfolio &amp; Links</h2>\n  <ul class=\"links-list\">\n{items}  </ul>\n</section>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: Option<&str>, url: Option<&str>, kind: Option<&str>) -> Link {
        Link {
            label: label.map(Into::into),
            url: url.map(Into::into),
            kind: kind.map(Into::into),
        }
    }

    #[test]
    fn omitted_when_empty() {
        assert_eq!(render_links(&[]), "");
    }

    #[test]
    fn renders_anchor_with_type_annotation() {
        let html = render_links(&[link(Some("GitHub"), Some("https://github.com"), Some("Code"))]);
        assert!(html.contains("<section class=\"section links-section\">"));
        assert!(html.contains(
            "<a href=\"https://github.com\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>"
        ));
        assert!(html.contains(" <span class=\"muted\">(Code)</span>"));
    }

    #[test]
    fn label_defaults_to_url() {
        let html = render_links(&[link(None, Some("https://example.com"), None)]);
        assert!(html.contains(">https://example.com</a>"));
    }

    #[test]
    fn unsafe_url_degrades_to_plain_text() {
        let html = render_links(&[link(Some("pwn"), Some("javascript:alert(1)"), None)]);
        assert!(!html.contains("href"));
        assert!(html.contains("<li class=\"link-item\">pwn</li>"));
    }

    #[test]
    fn entries_without_label_or_url_are_skipped() {
        assert_eq!(render_links(&[link(None, None, Some("Code"))]), "");
    }
}
