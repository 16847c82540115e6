use super::{TimelineItem, period_html, section};
use crate::application::render::escape::escape_html;
use crate::domain::resume::EducationItem;

/// The education section: same item markup as experience, with school and
/// degree in the title/subtitle slots.
pub fn render_education(items: &[EducationItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut body = String::new();
    for item in items {
        let title = escape_html(item.school.as_deref().unwrap_or(""));
        let subtitle = escape_html(item.degree.as_deref().unwrap_or(""));
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

    section("education-section", "Education", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_when_empty() {
        assert_eq!(render_education(&[]), "");
    }

    #[test]
    fn school_and_degree_fill_the_item_header() {
        let html = render_education(&[EducationItem {
            school: Some("Cambridge".into()),
            degree: Some("Mathematics".into()),
            start_date: Some("1828".into()),
            end_date: Some("1832".into()),
            description: None,
        }]);
        assert!(html.contains("<section class=\"section education-section\">"));
        assert!(html.contains("<h3 class=\"item-title\">Cambridge</h3>"));
        assert!(html.contains("<div class=\"item-subtitle\">Mathematics</div>"));
        assert!(html.contains("1828 \u{2013} 1832"));
    }
}
