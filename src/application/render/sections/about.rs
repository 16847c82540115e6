use crate::application::render::escape::escape_html;
use crate::domain::resume::About;

/// The about header. Omitted entirely unless a name resolved; photo, title
/// and summary are each independently optional.
pub fn render_about(about: Option<&About>) -> String {
    let Some(about) = about else {
        return String::new();
    };
    let Some(name) = about.name.as_deref() else {
        return String::new();
    };
    let name_html = escape_html(name);

    let mut out = String::new();
    out.push_str("<header class=\"section about-section\">\n");
    if let Some(photo_url) = about.photo_url.as_deref() {
        out.push_str(&format!(
            "  <img src=\"{}\" class=\"about-photo\" alt=\"{}\" />\n",
            escape_html(photo_url),
            name_html
        ));
    }
    out.push_str(&format!("  <h1 class=\"about-name\">{name_html}</h1>\n"));
    if let Some(title) = about.title.as_deref() {
        out.push_str(&format!(
            "  <p class=\"about-title muted\">{}</p>\n",
            escape_html(title)
        ));
    }
    if let Some(summary) = about.summary.as_deref() {
        out.push_str(&format!(
            "  <p class=\"about-summary\">{}</p>\n",
            escape_html(summary)
        ));
    }
    out.push_str("</header>\n");
    out
}
