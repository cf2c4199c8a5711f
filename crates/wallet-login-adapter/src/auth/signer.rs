/*
[INPUT]:  Message bytes and a signing seed
[OUTPUT]: Ed25519 signatures and base58-encoded public keys
[POS]:    Auth layer - cryptographic signing for wallet login
[UPDATE]: When changing signing algorithm or key format
*/

use bs58;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;

use super::keypair::Seed;

/// Ed25519 key pair used to answer login challenges
#[derive(Debug)]
pub struct Ed25519Signer {
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /// Generate a new random keypair
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self { signing_key }
    }

    /// Derive the keypair from a 32-byte seed
    pub fn from_seed(seed: &Seed) -> Self {
        let signing_key = SigningKey::from_bytes(seed.as_bytes());
        Self { signing_key }
    }

    /// Sign a message and return the signature
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.signing_key.sign(message)
    }

    /// Get the public key in base58 encoding (wallet address)
    pub fn public_key_base58(&self) -> String {
        bs58::encode(self.verifying_key().as_bytes()).into_string()
    }

    /// Get the raw public key bytes
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key().to_bytes()
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.verifying_key().verify(message, signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let signer = Ed25519Signer::generate();
        assert_eq!(signer.public_key_bytes().len(), 32);
    }

    #[test]
    fn test_same_seed_same_key() {
        let seed = Seed::from_bytes([42u8; 32]);
        let a = Ed25519Signer::from_seed(&seed);
        let b = Ed25519Signer::from_seed(&seed);
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
        assert_eq!(a.public_key_base58(), b.public_key_base58());
    }

    #[test]
    fn test_zero_seed_public_key() {
        let signer = Ed25519Signer::from_seed(&Seed::from_bytes([0u8; 32]));
        assert_eq!(
            hex::encode(signer.public_key_bytes()),
            "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"
        );
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = Ed25519Signer::generate();
        let message = b"Login:abc123";
        let signature = signer.sign(message);
        assert!(signer.verify(message, &signature));
        assert!(!signer.verify(b"Login:abc124", &signature));
    }

    #[test]
    fn test_base58_encoding() {
        let signer = Ed25519Signer::generate();
        let base58_key = signer.public_key_base58();
        let decoded = bs58::decode(&base58_key).into_vec().unwrap();
        assert_eq!(decoded.as_slice(), signer.public_key_bytes().as_slice());
    }
}
