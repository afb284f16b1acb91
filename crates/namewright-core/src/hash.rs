//! Content hashing for service names.
//!
//! Budgeted names (storage accounts, overlong deployment records) cannot carry
//! the full service name, so they start from a short digest token instead:
//!
//! ```text
//! digest = hex(SHA-256(service_name))
//! token  = first HASH_TOKEN_LEN chars of digest
//! ```
//!
//! The token is stable for a given service name within one build. It is not
//! a security primitive, only a compact disambiguator between services that
//! share a prefix, region and stage.

use sha2::{Digest, Sha256};

/// Number of digest characters used as the disambiguating token.
pub const HASH_TOKEN_LEN: usize = 6;

/// Full lowercase hex digest of `service_name`.
pub fn digest(service_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(service_name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fixed-width token derived from the digest of `service_name`.
pub fn hash_token(service_name: &str) -> String {
    let mut token = digest(service_name);
    token.truncate(HASH_TOKEN_LEN);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_stable_for_same_input() {
        assert_eq!(hash_token("orders"), hash_token("orders"));
    }

    #[test]
    fn token_changes_when_input_differs() {
        assert_ne!(hash_token("orders"), hash_token("orders-v2"));
    }

    #[test]
    fn token_has_fixed_width_and_hex_alphabet() {
        for name in ["", "a", "My Very Long Service Name Indeed"] {
            let token = hash_token(name);
            assert_eq!(token.len(), HASH_TOKEN_LEN);
            assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn digest_is_full_sha256_hex() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
