//! Typed resume content model.
//!
//! Draft documents arrive as schemaless JSON. Instead of reaching into the
//! tree at render time, the document is lowered once into explicit structs
//! with declared optional fields. Field aliases (`fullName`/`name`,
//! `role`/`title`, ...) are resolved here in a fixed priority order; the
//! renderers never see more than one candidate per field.

use serde_json::Value;

/// A draft document lowered into typed slices. Every slice is optional;
/// malformed input degrades to an absent slice, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeDocument {
    pub lang: Option<String>,
    pub content: ResumeContent,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeContent {
    pub about: Option<About>,
    pub contacts: Option<Contacts>,
    pub links: Vec<Link>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub education: Vec<EducationItem>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct About {
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub label: Option<String>,
    pub url: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceItem {
    pub role: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectItem {
    pub name: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationItem {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl ResumeDocument {
    /// Lower a raw draft document into the typed model. The input is read
    /// only; nothing here can fail.
    pub fn from_value(value: &Value) -> Self {
        let content = value
            .get("content")
            .map(ResumeContent::from_value)
            .unwrap_or_default();
        let lang = value
            .get("lang")
            .and_then(truthy_text)
            .or_else(|| value.pointer("/meta/lang").and_then(truthy_text));
        Self { lang, content }
    }
}

impl ResumeContent {
    fn from_value(value: &Value) -> Self {
        Self {
            about: value.get("about").and_then(About::from_value),
            contacts: value.get("contacts").and_then(Contacts::from_value),
            links: item_seq(value.get("links"), Link::from_value),
            skills: skills_from_value(value.get("skills")),
            experience: item_seq(value.get("experience"), ExperienceItem::from_value),
            projects: item_seq(value.get("projects"), ProjectItem::from_value),
            education: item_seq(value.get("education"), EducationItem::from_value),
        }
    }
}

impl About {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            name: alias_text(value, &["fullName", "name"]),
            title: alias_text(value, &["title", "position"]),
            summary: alias_text(value, &["summary", "bio", "description"]),
            photo_url: value.get("photoUrl").and_then(truthy_text),
        })
    }
}

impl Contacts {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            email: value.get("email").and_then(trimmed_text),
            phone: value.get("phone").and_then(trimmed_text),
            location: value.get("location").and_then(truthy_text),
            links: item_seq(value.get("links"), Link::from_value),
        })
    }
}

impl Link {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            label: value.get("label").and_then(truthy_text),
            url: value.get("url").and_then(trimmed_text),
            kind: value.get("type").and_then(truthy_text),
        })
    }
}

impl ExperienceItem {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            role: alias_text(value, &["role", "title"]),
            company: value.get("company").and_then(truthy_text),
            start_date: value.get("startDate").and_then(truthy_text),
            end_date: value.get("endDate").and_then(truthy_text),
            description: value.get("description").and_then(truthy_text),
        })
    }
}

impl ProjectItem {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            name: alias_text(value, &["name", "title"]),
            link: alias_text(value, &["link", "url"]).map(|url| url.trim().to_string()),
            description: value.get("description").and_then(truthy_text),
        })
    }
}

impl EducationItem {
    fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            school: alias_text(value, &["school", "institution"]),
            degree: value.get("degree").and_then(truthy_text),
            start_date: value.get("startDate").and_then(truthy_text),
            end_date: value.get("endDate").and_then(truthy_text),
            description: value.get("description").and_then(truthy_text),
        })
    }
}

/// Skills accept either a flat array or an object wrapping an `items` array.
/// Entries are coerced to text; non-scalar entries degrade to the empty
/// string rather than dropping the slot.
fn skills_from_value(value: Option<&Value>) -> Vec<String> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Object(map)) => match map.get("items") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .iter()
        .map(|item| coerce_text(item).unwrap_or_default())
        .collect()
}

fn item_seq<T>(value: Option<&Value>, parse: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(parse).collect(),
        _ => Vec::new(),
    }
}

/// First alias whose value is present and non-blank. Blank means the values
/// the source documents were authored against as "missing": `null`, the empty
/// string, `0` and `false` all fall through to the next alias.
fn alias_text(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(truthy_text))
}

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn trimmed_text(value: &Value) -> Option<String> {
    let text = truthy_text(value)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce any scalar to text; `null` and structured values yield `None`.
fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
