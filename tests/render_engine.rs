use serde_json::json;

use vitae::application::render::{RenderError, StylesheetProvider, render_resume};
use vitae::domain::resume::ResumeDocument;
use vitae::domain::templates::TemplateId;
use vitae::infra::stylesheets::EmbeddedStylesheets;

fn render(data: serde_json::Value, template: &str) -> String {
    let document = ResumeDocument::from_value(&data);
    render_resume(&document, TemplateId::parse(template), &EmbeddedStylesheets)
        .expect("render succeeds")
}

#[test]
fn name_only_draft_renders_a_minimal_page() {
    let html = render(
        json!({
            "content": { "about": { "fullName": "Ada Lovelace" } }
        }),
        "minimal",
    );

    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Ada Lovelace</title>"));
    assert!(html.contains("<body class=\"minimal\">"));
    assert!(html.contains("<h1 class=\"about-name\">Ada Lovelace</h1>"));

    for absent in [
        "contacts-section",
        "links-section",
        "skills-section",
        "experience-section",
        "projects-section",
        "education-section",
    ] {
        assert!(!html.contains(absent), "unexpected section: {absent}");
    }
}

#[test]
fn empty_document_falls_back_to_default_title() {
    let html = render(json!({}), "minimal");
    assert!(html.contains("<title>Resume</title>"));
    assert!(html.contains("<div class=\"container\">"));
}

#[test]
fn unknown_template_renders_byte_identical_to_minimal() {
    let data = json!({
        "content": {
            "about": { "name": "Grace Hopper", "title": "Rear Admiral" },
            "skills": ["COBOL", "Compilers"]
        }
    });
    let unknown = render(data.clone(), "corporate");
    let minimal = render(data, "minimal");
    assert_eq!(unknown, minimal);
}

#[test]
fn each_template_sets_its_body_class() {
    let data = json!({ "content": { "about": { "name": "A" } } });
    for (template, class) in [
        ("minimal", "minimal"),
        ("modern", "modern"),
        ("timeline", "timeline"),
        ("sidebar", "sidebar"),
    ] {
        let html = render(data.clone(), template);
        assert!(
            html.contains(&format!("<body class=\"{class}\">")),
            "missing body class for {template}"
        );
    }
}

#[test]
fn sidebar_places_about_in_the_right_column() {
    let html = render(
        json!({
            "content": {
                "about": { "name": "Ada Lovelace" },
                "contacts": { "email": "ada@example.com" },
                "links": [{ "label": "Site", "url": "https://ada.example" }],
                "skills": ["Mathematics"],
                "experience": [{ "role": "Analyst", "company": "Analytical Engines" }]
            }
        }),
        "sidebar",
    );

    assert!(html.contains("<div class=\"container sidebar-layout\">"));
    let aside_start = html.find("<aside class=\"left-column\">").expect("aside");
    let aside_end = html.find("</aside>").expect("aside close");
    let left = &html[aside_start..aside_end];
    let right = &html[aside_end..];

    assert!(left.contains("contacts-section"));
    assert!(left.contains("links-section"));
    assert!(left.contains("skills-section"));
    assert!(!left.contains("about-section"));

    assert!(right.contains("<main class=\"right-column\">"));
    assert!(right.contains("about-section"));
    assert!(right.contains("experience-section"));
    assert!(!right.contains("links-section"));
}

#[test]
fn script_content_is_escaped_everywhere() {
    let html = render(
        json!({
            "content": {
                "about": {
                    "name": "<script>alert('x')</script>",
                    "summary": "a & b < c > d \" e ' f"
                },
                "skills": ["<b>bold</b>"],
                "experience": [{
                    "role": "Dev",
                    "description": "</style><script>steal()</script>"
                }]
            }
        }),
        "minimal",
    );

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("a &amp; b &lt; c &gt; d &quot; e &#39; f"));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
}

#[test]
fn javascript_urls_never_become_hrefs() {
    let html = render(
        json!({
            "content": {
                "about": { "name": "Ada" },
                "contacts": { "links": [{ "label": "Chat", "url": "javascript:alert(1)" }] },
                "links": [
                    { "label": "Evil", "url": "javascript:alert(2)" },
                    { "label": "Data", "url": "data:text/html,hi" }
                ],
                "projects": [{ "name": "Engine", "url": "javascript:alert(3)" }]
            }
        }),
        "minimal",
    );

    assert!(!html.contains("href=\"javascript:"));
    assert!(!html.contains("href=\"data:"));
    // Entries degrade to text instead of disappearing.
    assert!(html.contains("Evil"));
    assert!(html.contains("Data"));
    assert!(html.contains("Engine"));
}

#[test]
fn project_links_are_web_only() {
    let html = render(
        json!({
            "content": {
                "about": { "name": "Ada" },
                "projects": [
                    { "name": "Mailing", "url": "mailto:ada@example.com" },
                    { "name": "Site", "url": "https://ada.example" }
                ]
            }
        }),
        "minimal",
    );

    assert!(!html.contains("href=\"mailto:ada@example.com\""));
    assert!(html.contains("href=\"https://ada.example\""));
}

#[test]
fn missing_fields_never_leak_placeholder_literals() {
    let html = render(
        json!({
            "content": {
                "about": { "name": "Ada" },
                "experience": [{ "role": "Analyst" }],
                "education": [{ "school": "Home" }],
                "links": [{ "url": "https://ada.example" }]
            }
        }),
        "minimal",
    );

    assert!(!html.contains("undefined"));
    assert!(!html.contains("null"));
    // A label-less link falls back to its URL text.
    assert!(html.contains(">https://ada.example</a>"));
}

#[test]
fn skills_accept_both_shapes() {
    let flat = render(
        json!({ "content": { "about": { "name": "A" }, "skills": ["Rust", "SQL"] } }),
        "minimal",
    );
    let wrapped = render(
        json!({ "content": { "about": { "name": "A" }, "skills": { "items": ["Rust", "SQL"] } } }),
        "minimal",
    );

    for html in [&flat, &wrapped] {
        assert!(html.contains("<li class=\"skill-tag\">Rust</li>"));
        assert!(html.contains("<li class=\"skill-tag\">SQL</li>"));
    }
}

#[test]
fn rendering_is_deterministic() {
    let data = json!({
        "lang": "pt-BR",
        "content": {
            "about": { "fullName": "Ada Lovelace", "summary": "First programmer." },
            "contacts": { "email": "ada@example.com", "location": "London" },
            "skills": ["Mathematics", "Poetry"],
            "experience": [{
                "role": "Analyst",
                "company": "Analytical Engines",
                "startDate": "1842",
                "endDate": "1843",
                "description": "Wrote the first published algorithm."
            }]
        }
    });

    let first = render(data.clone(), "timeline");
    let second = render(data, "timeline");
    assert_eq!(first, second);
    assert!(first.contains("<html lang=\"pt-BR\">"));
}

#[test]
fn invalid_language_tag_keeps_the_default() {
    let html = render(
        json!({ "lang": "\"><script>", "content": { "about": { "name": "Ada" } } }),
        "minimal",
    );
    assert!(html.contains("<html lang=\"en\">"));
}

#[test]
fn missing_stylesheet_is_a_render_error() {
    struct EmptyStyles;

    impl StylesheetProvider for EmptyStyles {
        fn stylesheet(&self, name: &str) -> Result<&str, RenderError> {
            Err(RenderError::StylesheetNotFound {
                name: name.to_string(),
            })
        }
    }

    let document = ResumeDocument::from_value(&json!({}));
    let err = render_resume(&document, TemplateId::Minimal, &EmptyStyles)
        .expect_err("render must fail");
    assert!(matches!(err, RenderError::StylesheetNotFound { .. }));
}

#[test]
fn base_and_template_css_are_inlined() {
    let html = render(json!({ "content": { "about": { "name": "A" } } }), "modern");
    // One rule from each stylesheet.
    assert!(html.contains("--font-base"));
    assert!(html.contains("body.modern"));
    assert!(!html.contains("<link"));
}
