//! HTTP request handlers, one module per resource.

pub mod analytics;
pub mod auth;
pub mod import;
pub mod placement;
pub mod profile;
pub mod settings;
pub mod template;
pub mod user;
