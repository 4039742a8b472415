//! Feature slices, one directory per domain area.

pub mod auth;
pub mod contact;
pub mod resume;
pub mod site_settings;
pub mod sql_translator;
pub mod videos;
