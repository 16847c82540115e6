//! Per-section fragment renderers.
//!
//! Each renderer is a pure function from one typed content slice to an HTML
//! fragment, or to the empty string when the slice has nothing to show.
//! Renderers never fail: anything unrenderable is omitted, not reported.
//! Document order is preserved throughout; dates are opaque strings.

mod about;
mod contacts;
mod education;
mod experience;
mod links;
mod projects;
mod skills;

pub use about::render_about;
pub use contacts::render_contacts;
pub use education::render_education;
pub use experience::render_experience;
pub use links::render_links;
pub use projects::render_projects;
pub use skills::render_skills;

use super::escape::escape_html;

/// Wrap a list of pre-rendered items in the shared section chrome.
fn section(extra_class: &str, title: &str, body: &str) -> String {
    format!(
        "<section class=\"section {extra_class}\">\n  <h2 class=\"section-title\">{title}</h2>\n{body}</section>\n"
    )
}

/// `start – end` when a start date exists; the end date defaults to the
/// literal `Present`. No start date means no period at all, so a dangling
/// `– Present` can never appear.
fn period_html(start: Option<&str>, end: Option<&str>) -> String {
    match start {
        Some(start) => {
            let end = end.map(|value| escape_html(value));
            let end = end.as_deref().unwrap_or("Present");
            format!("{} \u{2013} {}", escape_html(start), end)
        }
        None => String::new(),
    }
}

/// Shared markup for one dated item (experience and education entries).
/// All fields arrive escaped or already markup-safe.
struct TimelineItem<'a> {
    title_html: &'a str,
    subtitle_html: &'a str,
    period_html: &'a str,
    description_html: Option<&'a str>,
}

impl TimelineItem<'_> {
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("  <div class=\"item\">\n");
        out.push_str("    <div class=\"item-header\">\n      <div>\n");
        out.push_str(&format!(
            "        <h3 class=\"item-title\">{}</h3>\n",
            self.title_html
        ));
        out.push_str(&format!(
            "        <div class=\"item-subtitle\">{}</div>\n",
            self.subtitle_html
        ));
        out.push_str("      </div>\n");
        out.push_str(&format!(
            "      <div class=\"item-meta\">{}</div>\n",
            self.period_html
        ));
        out.push_str("    </div>\n");
        if let Some(description) = self.description_html {
            out.push_str(&format!(
                "    <p class=\"item-description\">{description}</p>\n"
            ));
        }
        out.push_str("  </div>\n");
        out
    }
}
