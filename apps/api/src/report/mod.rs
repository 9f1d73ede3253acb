//! Narrative "straight talk" reports for free-form questions.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
pub mod templates;
