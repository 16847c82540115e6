use crate::application::render::escape::escape_html;
use crate::application::render::url::is_safe_contact_url;
use crate::domain::resume::Contacts;

/// The contacts strip: email, phone, location and custom links as inline
/// items separated by a visible bullet. Omitted when nothing produces an
/// item. Custom links render as anchors only when their URL passes the
/// contact allow-list; anything else is left out of the strip.
pub fn render_contacts(contacts: Option<&Contacts>) -> String {
    let Some(contacts) = contacts else {
        return String::new();
    };

    let mut items: Vec<String> = Vec::new();

    if let Some(email) = contacts.email.as_deref() {
        let email = escape_html(email);
        items.push(format!("<a href=\"mailto:{email}\">{email}</a>"));
    }
    if let Some(phone) = contacts.phone.as_deref() {
        let phone = escape_html(phone);
        items.push(format!("<a href=\"tel:{phone}\">{phone}</a>"));
    }
    if let Some(location) = contacts.location.as_deref() {
        items.push(format!("<span>{}</span>", escape_html(location)));
    }
    for link in &contacts.links {
        let Some(url) = link.url.as_deref() else {
            continue;
        };
        if !is_safe_contact_url(url) {
            continue;
        }
        let label = link.label.as_deref().unwrap_or(url);
        items.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(url),
            escape_html(label)
        ));
    }

    if items.is_empty() {
        return String::new();
    }

    let joined = items
        .iter()
        .map(|item| format!("<span class=\"contact-item\">{item}</span>"))
        .collect::<Vec<_>>()
        .join("<span class=\"muted\"> \u{2022} </span>");

    format!(
        "<section class=\"section contacts-section\">\n  <div class=\"contacts-list\">\n    {joined}\n  </div>\n</section>\n"
    )
}
