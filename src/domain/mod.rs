//! Domain layer types and invariants.

pub mod draft;
pub mod resume;
pub mod templates;
