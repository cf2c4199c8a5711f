/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public wallet login adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    AuthManager,
    AuthOptions,
    BearerToken,
    Challenge,
    Credential,
    verify_login_token,
    Ed25519Signer,
    KeypairWallet,
    LoginReport,
    LoginSession,
    MockWalletSigner,
    Seed,
    WalletSigner,
};

// Re-export commonly used types from http
pub use http::{
    AuthClient,
    AuthError,
    ClientConfig,
    ErrorCategory,
    Result,
};

// Re-export all types
pub use types::*;

