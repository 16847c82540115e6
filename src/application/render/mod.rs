//! The rendering engine: draft document + template id -> complete HTML page.
//!
//! Pure and stateless: renders are reentrant, concurrent renders need no
//! coordination, and the same input always yields byte-identical output. The
//! only failure condition is an unresolvable stylesheet, which is a caller
//! error rather than something to paper over with empty CSS.

pub mod escape;
pub mod layout;
pub mod sections;
pub mod url;

use thiserror::Error;

use crate::domain::resume::ResumeDocument;
use crate::domain::templates::TemplateId;

use escape::escape_html;
use layout::SectionFragments;

/// Stylesheet name inlined before every template stylesheet.
pub const BASE_STYLESHEET: &str = "base.css";

const DEFAULT_TITLE: &str = "Resume";
const DEFAULT_LANG: &str = "en";

/// Resolves raw CSS text by stylesheet name. Implementations are read-only
/// and cheap to call; the engine performs no I/O of its own.
pub trait StylesheetProvider {
    fn stylesheet(&self, name: &str) -> Result<&str, RenderError>;
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("stylesheet `{name}` is not registered")]
    StylesheetNotFound { name: String },
}

/// Render a complete, self-contained HTML document.
pub fn render_resume(
    document: &ResumeDocument,
    template: TemplateId,
    styles: &dyn StylesheetProvider,
) -> Result<String, RenderError> {
    let binding = template.binding();
    let content = &document.content;

    let fragments = SectionFragments {
        about: sections::render_about(content.about.as_ref()),
        contacts: sections::render_contacts(content.contacts.as_ref()),
        links: sections::render_links(&content.links),
        skills: sections::render_skills(&content.skills),
        experience: sections::render_experience(&content.experience),
        projects: sections::render_projects(&content.projects),
        education: sections::render_education(&content.education),
    };
    let body = layout::compose(binding.layout, &fragments);

    let base_css = styles.stylesheet(BASE_STYLESHEET)?;
    let template_css = styles.stylesheet(binding.stylesheet)?;

    let lang = resolve_language_tag(document.lang.as_deref());
    let title = page_title(document);
    let body_class_attr = if binding.body_class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", binding.body_class)
    };

    Ok(format!(
        "<!doctype html>\n<html lang=\"{lang}\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  <title>{title}</title>\n  <style>\n{base_css}\n{template_css}\n  </style>\n</head>\n<body{body_class_attr}>\n{body}</body>\n</html>\n"
    ))
}

fn page_title(document: &ResumeDocument) -> String {
    document
        .content
        .about
        .as_ref()
        .and_then(|about| about.name.as_deref())
        .map(|name| escape_html(name))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Keep the document's language tag only when it looks like a plausible
/// BCP 47 primary tag (2-3 letters) with an optional 2-8 alphanumeric
/// subtag; anything else silently keeps the default.
fn resolve_language_tag(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(candidate) if is_valid_language_tag(candidate) => candidate.to_string(),
        _ => DEFAULT_LANG.to_string(),
    }
}

fn is_valid_language_tag(tag: &str) -> bool {
    let (primary, subtag) = match tag.split_once('-') {
        Some((primary, subtag)) => (primary, Some(subtag)),
        None => (tag, None),
    };
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    match subtag {
        None => true,
        Some(subtag) => {
            (2..=8).contains(&subtag.len()) && subtag.chars().all(|c| c.is_ascii_alphanumeric())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tags_are_gated() {
        assert!(is_valid_language_tag("en"));
        assert!(is_valid_language_tag("eng"));
        assert!(is_valid_language_tag("en-GB"));
        assert!(is_valid_language_tag("pt-BR"));
        assert!(is_valid_language_tag("ru-2024abc"));

        assert!(!is_valid_language_tag("e"));
        assert!(!is_valid_language_tag("english"));
        assert!(!is_valid_language_tag("en-"));
        assert!(!is_valid_language_tag("en-G"));
        assert!(!is_valid_language_tag("en-GB-x"));
        assert!(!is_valid_language_tag("en GB"));
        assert!(!is_valid_language_tag("<en>"));
    }

    #[test]
    fn invalid_language_falls_back_silently() {
        assert_eq!(resolve_language_tag(Some("</html>")), "en");
        assert_eq!(resolve_language_tag(Some("  fr  ")), "fr");
        assert_eq!(resolve_language_tag(None), "en");
    }
}
