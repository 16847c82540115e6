//! Application services layer.

pub mod drafts;
pub mod error;
pub mod render;
pub mod repos;
pub mod security;
