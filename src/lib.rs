//! Resume draft storage, preview and publish service.
//!
//! Drafts are JSONB documents owned by their author; the rendering engine in
//! [`application::render`] turns a draft plus a template identifier into a
//! complete, self-contained HTML page.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
