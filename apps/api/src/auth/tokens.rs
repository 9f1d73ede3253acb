//! Token material for magic links and bearer sessions.
//!
//! Tokens are handed to the user once; only their SHA-256 digest is stored.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use reqwest::Url;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// 64 hex characters of randomness (two v4 UUIDs).
pub fn new_token() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

pub fn hash_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

/// Lower-cases and trims an address; `None` if it is not plausibly an e-mail.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;
    let valid = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);
    valid.then_some(email)
}

/// `<public_url>/api/auth/verify?email=..&token=..`
pub fn magic_link(public_url: &str, email: &str, token: &str) -> anyhow::Result<String> {
    let base = format!("{}/api/auth/verify", public_url.trim_end_matches('/'));
    let url = Url::parse_with_params(&base, &[("email", email), ("token", token)])?;
    Ok(url.into())
}

/// Extracts the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_tokens_are_unique_hex() {
        let a = new_token();
        let b = new_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_is_stable_sha256_hex() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Reader@Example.COM "),
            Some("reader@example.com".to_string())
        );
        assert!(normalize_email("no-at-sign").is_none());
        assert!(normalize_email("@example.com").is_none());
        assert!(normalize_email("a@localhost").is_none());
        assert!(normalize_email("a@b@c.com").is_none());
        assert!(normalize_email("a b@c.com").is_none());
    }

    #[test]
    fn test_magic_link_encodes_params() {
        let link = magic_link("http://localhost:3000/", "a+b@example.com", "tok").unwrap();
        assert_eq!(
            link,
            "http://localhost:3000/api/auth/verify?email=a%2Bb%40example.com&token=tok"
        );
    }

    #[test]
    fn test_bearer_token() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
        assert_eq!(bearer_token(&headers), Some("abc123"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_none());
    }
}
