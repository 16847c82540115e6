use super::{TimelineItem, period_html, section};
use crate::application::render::escape::escape_html;
use crate::domain::resume::ExperienceItem;

/// The experience section: dated items in input order.
pub fn render_experience(items: &[ExperienceItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for item in items {
        let title = escape_html(item.role.as_deref().unwrap_or(""));
        let subtitle = escape_html(item.company.as_deref().unwrap_or(""));
        let period = period_html(item.start_date.as_deref(), item.end_date.as_deref());
        let description = item.description.as_deref().map(|text| escape_html(text));
        body.push_str(
            &TimelineItem {
                title_html: &title,
                subtitle_html: &subtitle,
                period_html: &period,
                description_html: description.as_deref(),
            }
            .render(),
        );
    }

    section("experience-section", "Experience", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(role: Option<&str>, start: Option<&str>, end: Option<&str>) -> ExperienceItem {
        ExperienceItem {
            role: role.map(Into::into),
            company: Some("Initech".into()),
            start_date: start.map(Into::into),
            end_date: end.map(Into::into),
            description: None,
        }
    }

    #[test]
    fn omitted_when_empty() {
        assert_eq!(render_experience(&[]), "");
    }

    #[test]
    fn end_date_defaults_to_present() {
        let html = render_experience(&[item(Some("Engineer"), Some("2020"), None)]);
        assert!(html.contains("2020 \u{2013} Present"));
    }

    #[test]
    fn no_period_without_a_start_date() {
        let html = render_experience(&[item(Some("Engineer"), None, Some("2024"))]);
        assert!(!html.contains("Present"));
        assert!(!html.contains("2024"));
        assert!(html.contains("<div class=\"item-meta\"></div>"));
    }

    #[test]
    fn items_keep_input_order() {
        let html = render_experience(&[
            item(Some("Second job"), None, None),
            item(Some("First job"), None, None),
        ]);
        let second = html.find("Second job").expect("second job rendered");
        let first = html.find("First job").expect("first job rendered");
        assert!(second < first);
    }

    #[test]
    fn description_renders_as_paragraph() {
        let mut entry = item(Some("Engineer"), None, None);
        entry.description = Some("Shipped <things>".into());
        let html = render_experience(&[entry]);
        assert!(html.contains("<p class=\"item-description\">Shipped &lt;things&gt;</p>"));
    }
}
