/*
[INPUT]:  Message bytes to sign and wallet key material
[OUTPUT]: Ed25519 signatures for login challenges
[POS]:    Auth layer - wallet integration abstraction
[UPDATE]: When adding new wallet types or changing signature format
*/

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ed25519_dalek::Signature;
use tracing::warn;

use crate::http::{AuthError, Result};

use super::{Ed25519Signer, KeypairFile, Seed};

/// Trait for wallet signing operations
///
/// The trait is async to support hardware wallets and external signers.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Base58 public key, used as the wallet address
    fn address(&self) -> &str;

    fn public_key_bytes(&self) -> [u8; 32];

    /// Sign raw message bytes
    async fn sign_message(&self, message: &[u8]) -> Result<Signature>;
}

/// Wallet backed by a local keypair file
#[derive(Debug)]
pub struct KeypairWallet {
    signer: Ed25519Signer,
    address: String,
}

impl KeypairWallet {
    pub fn from_seed(seed: &Seed) -> Self {
        let signer = Ed25519Signer::from_seed(seed);
        let address = signer.public_key_base58();
        Self { signer, address }
    }

    /// Load the wallet from a JSON keypair file
    ///
    /// A trailing public key that disagrees with the derived one is logged
    /// but not fatal; the seed is authoritative.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let keypair = KeypairFile::load(path.as_ref())?;
        let wallet = Self::from_seed(&keypair.seed);

        if let Some(embedded) = keypair.embedded_public_key {
            if embedded != wallet.public_key_bytes() {
                warn!(
                    path = %path.as_ref().display(),
                    derived = %wallet.address,
                    embedded = %bs58::encode(embedded).into_string(),
                    "keypair file public key does not match the seed"
                );
            }
        }

        Ok(wallet)
    }

    pub fn signer(&self) -> &Ed25519Signer {
        &self.signer
    }
}

#[async_trait]
impl WalletSigner for KeypairWallet {
    fn address(&self) -> &str {
        &self.address
    }

    fn public_key_bytes(&self) -> [u8; 32] {
        self.signer.public_key_bytes()
    }

    async fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        Ok(self.signer.sign(message))
    }
}

/// Mock wallet signer for testing
#[derive(Debug)]
pub struct MockWalletSigner {
    address: String,
    public_key: [u8; 32],
    signature: Option<Signature>,
    sign_calls: AtomicUsize,
}

impl MockWalletSigner {
    /// Create a new mock signer with a predetermined signature
    pub fn new(public_key: [u8; 32], signature: Signature) -> Self {
        Self {
            address: bs58::encode(public_key).into_string(),
            public_key,
            signature: Some(signature),
            sign_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock signer whose every signing attempt fails
    pub fn failing(public_key: [u8; 32]) -> Self {
        Self {
            address: bs58::encode(public_key).into_string(),
            public_key,
            signature: None,
            sign_calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `sign_message` was called
    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletSigner for MockWalletSigner {
    fn address(&self) -> &str {
        &self.address
    }

    fn public_key_bytes(&self) -> [u8; 32] {
        self.public_key
    }

    async fn sign_message(&self, _message: &[u8]) -> Result<Signature> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.signature
            .ok_or_else(|| AuthError::Signing("mock wallet refused to sign".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_signer() {
        let signer = MockWalletSigner::new([1u8; 32], Signature::from_bytes(&[2u8; 64]));

        assert_eq!(signer.address(), bs58::encode([1u8; 32]).into_string());
        let signature = signer.sign_message(b"test message").await.unwrap();
        assert_eq!(signature.to_bytes(), [2u8; 64]);
        assert_eq!(signer.sign_calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_signer() {
        let signer = MockWalletSigner::failing([1u8; 32]);
        let err = signer.sign_message(b"Login:x").await.unwrap_err();
        assert!(matches!(err, AuthError::Signing(_)));
    }

    #[tokio::test]
    async fn test_keypair_wallet_signs_verifiably() {
        let wallet = KeypairWallet::from_seed(&Seed::from_bytes([9u8; 32]));
        let signature = wallet.sign_message(b"Login:abc").await.unwrap();
        assert!(wallet.signer().verify(b"Login:abc", &signature));
        assert_eq!(wallet.address(), wallet.signer().public_key_base58());
    }
}
