//! Content fingerprints usable as node keys.
//!
//! Worlds whose nodes carry bytes that are not part of their identity
//! (history, annotations) can key them by a digest of the identity bytes
//! alone. Format: `"sha256:<hex_digest>"`, hashed with a null-terminated
//! domain prefix so fingerprints from different domains never collide.

use sha2::{Digest, Sha256};

/// Domain prefix for node key fingerprints.
pub const DOMAIN_NODE_KEY: &[u8] = b"WAYFINDER::NODE_KEY::V1\0";

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"WAYFINDER::RUN_REPORT::V1\0";

const PREFIX: &str = "sha256:";

/// A `"sha256:<64 lowercase hex>"` digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// Parse a digest previously rendered by [`ContentHash::as_str`].
    ///
    /// Returns `None` for any other algorithm, a digest that is not 32
    /// bytes of lowercase hex, or trailing garbage.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let digest = s.strip_prefix(PREFIX)?;
        if digest.len() != 64 || digest.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        hex::decode(digest).ok()?;
        Some(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// SHA-256 of `domain || data`, as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("{PREFIX}{}", hex::encode(hasher.finalize())))
}

/// Node key fingerprint of `identity_bytes`.
#[must_use]
pub fn fingerprint(identity_bytes: &[u8]) -> ContentHash {
    canonical_hash(DOMAIN_NODE_KEY, identity_bytes)
}
