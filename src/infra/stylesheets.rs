//! Embedded stylesheet bundle.
//!
//! All CSS ships inside the binary so rendered previews are fully
//! self-contained and need no asset routes.

use include_dir::{Dir, include_dir};

use crate::application::render::{RenderError, StylesheetProvider};

static STYLESHEETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/styles");

/// [`StylesheetProvider`] backed by the compiled-in `styles/` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStylesheets;

impl StylesheetProvider for EmbeddedStylesheets {
    fn stylesheet(&self, name: &str) -> Result<&str, RenderError> {
        STYLESHEETS
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| RenderError::StylesheetNotFound {
                name: name.to_string(),
            })
    }
}
