//! Layout composition: arranging section fragments into a page body.

use crate::domain::templates::LayoutKind;

/// The seven section fragments, one render call each. Fragments are owned
/// strings composed only by concatenation; nothing is ever parsed back.
#[derive(Debug, Clone, Default)]
pub struct SectionFragments {
    pub about: String,
    pub contacts: String,
    pub links: String,
    pub skills: String,
    pub experience: String,
    pub projects: String,
    pub education: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    About,
    Contacts,
    Links,
    Skills,
    Experience,
    Projects,
    Education,
}

const STANDARD_ORDER: [Slot; 7] = [
    Slot::About,
    Slot::Contacts,
    Slot::Links,
    Slot::Skills,
    Slot::Experience,
    Slot::Projects,
    Slot::Education,
];

// Static column map for the sidebar layout. Every section appears in exactly
// one column; membership is configuration, not derived from content.
const SIDEBAR_LEFT: [Slot; 3] = [Slot::Contacts, Slot::Links, Slot::Skills];
const SIDEBAR_RIGHT: [Slot; 4] = [
    Slot::About,
    Slot::Experience,
    Slot::Projects,
    Slot::Education,
];

impl SectionFragments {
    fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::About => &self.about,
            Slot::Contacts => &self.contacts,
            Slot::Links => &self.links,
            Slot::Skills => &self.skills,
            Slot::Experience => &self.experience,
            Slot::Projects => &self.projects,
            Slot::Education => &self.education,
        }
    }
}

/// Compose the page body from rendered fragments. Empty fragments were
/// already decided upstream by the section renderers; the layout itself
/// never drops or duplicates a non-empty fragment.
pub fn compose(layout: LayoutKind, fragments: &SectionFragments) -> String {
    match layout {
        LayoutKind::Standard => compose_standard(fragments),
        LayoutKind::Sidebar => compose_sidebar(fragments),
    }
}

fn compose_standard(fragments: &SectionFragments) -> String {
    let body = join_slots(&STANDARD_ORDER, fragments);
    format!("<div class=\"container\">\n{body}</div>\n")
}

fn compose_sidebar(fragments: &SectionFragments) -> String {
    let left = join_slots(&SIDEBAR_LEFT, fragments);
    let right = join_slots(&SIDEBAR_RIGHT, fragments);
    // Both wrappers are always present, even when a column has no content.
    format!(
        "<div class=\"container sidebar-layout\">\n<aside class=\"left-column\">\n{left}</aside>\n<main class=\"right-column\">\n{right}</main>\n</div>\n"
    )
}

fn join_slots(slots: &[Slot], fragments: &SectionFragments) -> String {
    let mut out = String::new();
    for slot in slots {
        let fragment = fragments.get(*slot);
        if !fragment.trim().is_empty() {
            out.push_str(fragment);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> SectionFragments {
        SectionFragments {
            about: "<header class=\"section about-section\">a</header>\n".into(),
            contacts: "<section class=\"section contacts-section\">c</section>\n".into(),
            links: "<section class=\"section links-section\">l</section>\n".into(),
            skills: String::new(),
            experience: "<section class=\"section experience-section\">e</section>\n".into(),
            projects: String::new(),
            education: "<section class=\"section education-section\">s</section>\n".into(),
        }
    }

    #[test]
    fn standard_orders_sections_in_a_single_container() {
        let body = compose(LayoutKind::Standard, &fragments());
        assert!(body.starts_with("<div class=\"container\">"));
        let about = body.find("about-section").expect("about rendered");
        let contacts = body.find("contacts-section").expect("contacts rendered");
        let education = body.find("education-section").expect("education rendered");
        assert!(about < contacts && contacts < education);
    }

    #[test]
    fn sidebar_partitions_sections_between_columns() {
        let body = compose(LayoutKind::Sidebar, &fragments());
        let left_start = body.find("<aside class=\"left-column\">").expect("left column");
        let left_end = body.find("</aside>").expect("left column close");
        let left = &body[left_start..left_end];
        let right = &body[left_end..];

        assert!(left.contains("contacts-section"));
        assert!(left.contains("links-section"));
        assert!(!left.contains("about-section"));
        assert!(right.contains("about-section"));
        assert!(right.contains("experience-section"));
        assert!(right.contains("education-section"));
        assert!(!right.contains("links-section"));
    }

    #[test]
    fn empty_columns_still_emit_their_wrapper() {
        let body = compose(LayoutKind::Sidebar, &SectionFragments::default());
        assert!(body.contains("<aside class=\"left-column\">"));
        assert!(body.contains("<main class=\"right-column\">"));
    }

    #[test]
    fn every_slot_is_assigned_exactly_once() {
        let mut seen = Vec::new();
        seen.extend_from_slice(&SIDEBAR_LEFT);
        seen.extend_from_slice(&SIDEBAR_RIGHT);
        for slot in STANDARD_ORDER {
            assert_eq!(seen.iter().filter(|s| **s == slot).count(), 1);
        }
    }
}
