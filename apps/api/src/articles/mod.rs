//! Articles, tags and article-sourced claim analysis.

pub mod extraction;
pub mod handlers;
pub mod store;
pub mod validation;
