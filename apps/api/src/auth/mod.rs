//! Magic-link authentication.
//!
//! Sign-in stores the digest of a one-time token and mails a link carrying the
//! token. Verifying the link consumes the token and issues a bearer session
//! token, also stored as a digest.

pub mod extract;
pub mod handlers;
pub mod mailer;
pub mod store;
pub mod tokens;
