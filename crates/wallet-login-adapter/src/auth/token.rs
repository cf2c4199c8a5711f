/*
[INPUT]:  Public key and login signature, or an encoded token
[OUTPUT]: Base58 bearer token and its decoded parts
[POS]:    Auth layer - bearer token codec
[UPDATE]: When the token byte layout changes
*/

use std::fmt;

use bs58;
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::http::{AuthError, Result};
use crate::types::MessageFormat;

use super::Challenge;

pub const PUBLIC_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;
/// Raw token length: public key followed by signature
pub const TOKEN_LEN: usize = PUBLIC_KEY_LEN + SIGNATURE_LEN;

/// `base58(public_key || signature)`
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken {
    public_key: [u8; PUBLIC_KEY_LEN],
    signature: Signature,
}

impl BearerToken {
    pub fn new(public_key: [u8; PUBLIC_KEY_LEN], signature: Signature) -> Self {
        Self {
            public_key,
            signature,
        }
    }

    /// Raw 96-byte layout
    pub fn to_bytes(&self) -> [u8; TOKEN_LEN] {
        let mut out = [0u8; TOKEN_LEN];
        out[..PUBLIC_KEY_LEN].copy_from_slice(&self.public_key);
        out[PUBLIC_KEY_LEN..].copy_from_slice(&self.signature.to_bytes());
        out
    }

    pub fn encode(&self) -> String {
        bs58::encode(self.to_bytes()).into_string()
    }

    /// Decode a token, splitting at byte offset 32
    pub fn decode(token: &str) -> Result<Self> {
        let bytes = bs58::decode(token.trim())
            .into_vec()
            .map_err(|e| AuthError::InvalidToken(format!("invalid base58: {e}")))?;

        if bytes.len() != TOKEN_LEN {
            return Err(AuthError::InvalidToken(format!(
                "expected {TOKEN_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut public_key = [0u8; PUBLIC_KEY_LEN];
        public_key.copy_from_slice(&bytes[..PUBLIC_KEY_LEN]);
        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(&bytes[PUBLIC_KEY_LEN..]);

        Ok(Self {
            public_key,
            signature: Signature::from_bytes(&signature),
        })
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public_key
    }

    pub fn public_key_base58(&self) -> String {
        bs58::encode(self.public_key).into_string()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Verify the embedded signature over `message` with the embedded key
    pub fn verify(&self, message: &[u8]) -> Result<()> {
        let verifying_key = VerifyingKey::from_bytes(&self.public_key)
            .map_err(|e| AuthError::InvalidToken(format!("invalid public key: {e}")))?;
        verifying_key
            .verify(message, &self.signature)
            .map_err(|_| AuthError::InvalidToken("signature verification failed".to_string()))
    }

    /// Value for the `Authorization` header
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.encode())
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("public_key", &self.public_key_base58())
            .finish_non_exhaustive()
    }
}

/// Decode `token` and check it signs `Login:<nonce>` in the given format
pub fn verify_login_token(token: &str, nonce: &str, format: MessageFormat) -> Result<BearerToken> {
    let token = BearerToken::decode(token)?;
    token.verify(&Challenge::login(nonce).to_bytes(format))?;
    Ok(token)
}
