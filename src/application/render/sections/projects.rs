use super::section;
use crate::application::render::escape::escape_html;
use crate::application::render::url::is_safe_web_url;
use crate::domain::resume::ProjectItem;

/// The projects section. A project header becomes an anchor only when its
/// link passes the strict web allow-list; otherwise the header stays plain
/// text and the link is dropped.
pub fn render_projects(items: &[ProjectItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for item in items {
        let name = item.name.as_deref().unwrap_or("");
        let header = match item.link.as_deref() {
            Some(link) if is_safe_web_url(link) => format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape_html(link),
                escape_html(name)
            ),
            _ => escape_html(name),
        };
        body.push_str("  <div class=\"item\">\n");
        body.push_str(&format!(
            "    <div class=\"item-header\">\n      <h3 class=\"item-title\">{header}</h3>\n    </div>\n"
        ));
        if let Some(description) = item.description.as_deref() {
            body.push_str(&format!(
                "    <p class=\"item-description\">{}</p>\n",
                escape_html(description)
            ));
        }
        body.push_str("  </div>\n");
    }

    section("projects-section", "Projects", &body)
}
