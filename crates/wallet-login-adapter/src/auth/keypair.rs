/*
[INPUT]:  Wallet keypair file (JSON array of byte values)
[OUTPUT]: Zeroizing 32-byte signing seed
[POS]:    Auth layer - credential loading
[UPDATE]: When supporting new keypair file formats
*/

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::http::{AuthError, Result};

/// Number of leading keypair bytes that form the seed
pub const SEED_LEN: usize = 32;

/// Ed25519 signing seed, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}

/// Parsed wallet keypair file
///
/// Solana CLI files hold 64 bytes: the seed followed by the public key.
/// Only the seed is required; the trailing public key is kept when present
/// so callers can check it against the derived one.
#[derive(Debug)]
pub struct KeypairFile {
    pub seed: Seed,
    pub embedded_public_key: Option<[u8; 32]>,
}

impl KeypairFile {
    /// Parse the JSON array form of a keypair
    pub fn parse(json: &str) -> Result<Self> {
        let bytes: Zeroizing<Vec<u8>> =
            Zeroizing::new(serde_json::from_str(json).map_err(|e| {
                AuthError::KeyFile(format!("expected a JSON array of byte values: {e}"))
            })?);

        if bytes.len() < SEED_LEN {
            return Err(AuthError::KeyFile(format!(
                "expected at least {SEED_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut seed = Seed([0u8; SEED_LEN]);
        seed.0.copy_from_slice(&bytes[..SEED_LEN]);

        let embedded_public_key = if bytes.len() >= 2 * SEED_LEN {
            let mut public_key = [0u8; 32];
            public_key.copy_from_slice(&bytes[SEED_LEN..2 * SEED_LEN]);
            Some(public_key)
        } else {
            None
        };

        Ok(Self {
            seed,
            embedded_public_key,
        })
    }

    /// Read and parse a keypair file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = Zeroizing::new(fs::read_to_string(path).map_err(|e| AuthError::io(path, e))?);
        let keypair = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            has_public_key = keypair.embedded_public_key.is_some(),
            "keypair file loaded"
        );
        Ok(keypair)
    }
}

/// Parse a keypair JSON array and keep only the seed
pub fn parse_keypair_json(json: &str) -> Result<Seed> {
    KeypairFile::parse(json).map(|keypair| keypair.seed)
}

/// Load the seed from a keypair file
pub fn load_seed(path: impl AsRef<Path>) -> Result<Seed> {
    KeypairFile::load(path).map(|keypair| keypair.seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypair_json(len: usize) -> String {
        let values: Vec<u8> = (0..len).map(|i| i as u8).collect();
        serde_json::to_string(&values).unwrap()
    }

    #[test]
    fn test_seed_is_first_32_bytes() {
        let seed = parse_keypair_json(&keypair_json(64)).unwrap();
        let expected: Vec<u8> = (0..32).collect();
        assert_eq!(seed.as_bytes().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_embedded_public_key() {
        let keypair = KeypairFile::parse(&keypair_json(64)).unwrap();
        let expected: Vec<u8> = (32..64).collect();
        assert_eq!(
            keypair.embedded_public_key.unwrap().as_slice(),
            expected.as_slice()
        );

        let seed_only = KeypairFile::parse(&keypair_json(32)).unwrap();
        assert!(seed_only.embedded_public_key.is_none());
    }

    #[test]
    fn test_short_array_rejected() {
        let err = parse_keypair_json(&keypair_json(31)).unwrap_err();
        assert!(matches!(err, AuthError::KeyFile(_)));
    }

    #[test]
    fn test_non_byte_values_rejected() {
        assert!(matches!(
            parse_keypair_json("[1, 2, 300]").unwrap_err(),
            AuthError::KeyFile(_)
        ));
        assert!(matches!(
            parse_keypair_json(r#"{"secret": "abc"}"#).unwrap_err(),
            AuthError::KeyFile(_)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_seed("/nonexistent/id.json").unwrap_err();
        assert!(matches!(err, AuthError::Io { .. }));
    }

    #[test]
    fn test_debug_redacts_seed() {
        let seed = Seed::from_bytes([7u8; 32]);
        let rendered = format!("{seed:?}");
        assert_eq!(rendered, "Seed(<redacted>)");
        assert!(!rendered.contains('7'));
    }
}
