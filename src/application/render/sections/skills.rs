use super::section;
use crate::application::render::escape::escape_html;

/// The skills tag cloud. Omitted when the resolved list is empty.
pub fn render_skills(skills: &[String]) -> String {
    if skills.is_empty() {
        return String::new();
    }

    let items = skills
        .iter()
        .map(|skill| format!("<li class=\"skill-tag\">{}</li>", escape_html(skill)))
        .collect::<Vec<_>>()
        .join("");

    section(
        "skills-section",
        "Skills",
        &format!("  <ul class=\"skills-list\">{items}</ul>\n"),
    )
}
