/*
[INPUT]:  Wallet keypair, server nonce and API client
[OUTPUT]: Signed login challenges, bearer tokens and probe outcomes
[POS]:    Auth layer - wallet challenge-response authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod challenge;
pub mod keypair;
pub mod manager;
pub mod signer;
pub mod token;
pub mod wallet;

pub use challenge::{Challenge, LOGIN_PREFIX, offchain_envelope, signing_string};
pub use keypair::{KeypairFile, Seed, load_seed, parse_keypair_json};
pub use manager::{
    AuthManager, AuthOptions, Credential, DEFAULT_PROTECTED_PATH, LoginReport, LoginSession,
    NONCE_ENDPOINT,
};
pub use signer::Ed25519Signer;
pub use token::{BearerToken, TOKEN_LEN, verify_login_token};
pub use wallet::{KeypairWallet, MockWalletSigner, WalletSigner};
