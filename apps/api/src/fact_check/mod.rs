//! Claim fact-checking.
//!
//! Flow: classify topic → select format → LLM or template generation →
//!       append to session.

pub mod analyzer;
pub mod formats;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod result;
pub mod session;
pub mod store;
pub mod templates;
pub mod topics;
