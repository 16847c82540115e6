//! Template identifiers and their stylesheet/layout bindings.

/// Visual template selector. Parsing never fails: unrecognized identifiers
/// resolve to [`TemplateId::Minimal`] silently, so a stale or mistyped id in
/// a stored draft can never break a preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateId {
    #[default]
    Minimal,
    Modern,
    Timeline,
    Sidebar,
}

/// How the page body is arranged. Column membership for the sidebar layout
/// is a static table in the layout composer, not derived from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Standard,
    Sidebar,
}

/// Resolved binding for one template: which stylesheet to inline, which class
/// the `body` element carries, and which layout strategy arranges sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateBinding {
    pub stylesheet: &'static str,
    pub body_class: &'static str,
    pub layout: LayoutKind,
}

impl TemplateId {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "minimal" => Self::Minimal,
            "modern" => Self::Modern,
            "timeline" => Self::Timeline,
            "sidebar" => Self::Sidebar,
            _ => Self::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Timeline => "timeline",
            Self::Sidebar => "sidebar",
        }
    }

    pub fn binding(self) -> TemplateBinding {
        match self {
            Self::Minimal => TemplateBinding {
                stylesheet: "minimal.css",
                body_class: "minimal",
                layout: LayoutKind::Standard,
            },
            Self::Modern => TemplateBinding {
                stylesheet: "modern.css",
                body_class: "modern",
                layout: LayoutKind::Standard,
            },
            Self::Timeline => TemplateBinding {
                stylesheet: "timeline.css",
                body_class: "timeline",
                layout: LayoutKind::Standard,
            },
            Self::Sidebar => TemplateBinding {
                stylesheet: "sidebar.css",
                body_class: "sidebar",
                layout: LayoutKind::Sidebar,
            },
        }
    }
}
