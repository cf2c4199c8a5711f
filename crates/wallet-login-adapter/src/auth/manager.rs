/*
[INPUT]:  Wallet signer and HTTP client
[OUTPUT]: Signed login token and the protected endpoint's verdict
[POS]:    Auth layer - orchestrates complete authentication flow
[UPDATE]: When auth endpoints or flow steps change
*/

use ed25519_dalek::Signature;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::http::{AuthClient, AuthError, Result};
use crate::types::{
    AuthScheme, IssuedNonce, MessageFormat, MethodCase, NonceRequest, NonceResponse, PathCase,
    ProbeOutcome,
};

use super::{BearerToken, Challenge, WalletSigner, signing_string};

pub const NONCE_ENDPOINT: &str = "/api/auth/nonce";
pub const DEFAULT_PROTECTED_PATH: &str = "/api/transactions";

pub const HEADER_WALLET_ADDRESS: &str = "x-wallet-address";
pub const HEADER_WALLET_SIGNATURE: &str = "x-wallet-signature";
pub const HEADER_WALLET_NONCE: &str = "x-wallet-nonce";

/// Characters of the probe response body kept for reporting
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Knobs for how the challenge is signed and presented
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthOptions {
    pub format: MessageFormat,
    pub scheme: AuthScheme,
}

/// Everything produced by one nonce/sign round
#[derive(Debug, Clone)]
pub struct LoginSession {
    pub nonce: String,
    pub ttl_secs: Option<u64>,
    pub message: Challenge,
    pub signature: Signature,
    pub token: BearerToken,
}

/// Credential attached to the protected request
#[derive(Debug, Clone)]
pub enum Credential {
    Bearer(BearerToken),
    WalletHeaders {
        address: String,
        signature: Signature,
        nonce: String,
    },
}

impl Credential {
    /// Headers carrying this credential
    pub fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match self {
            Credential::Bearer(token) => {
                headers.insert(AUTHORIZATION, header_value(&token.authorization_value())?);
            }
            Credential::WalletHeaders {
                address,
                signature,
                nonce,
            } => {
                let signature = bs58::encode(signature.to_bytes()).into_string();
                headers.insert(
                    HeaderName::from_static(HEADER_WALLET_ADDRESS),
                    header_value(address)?,
                );
                headers.insert(
                    HeaderName::from_static(HEADER_WALLET_SIGNATURE),
                    header_value(&signature)?,
                );
                headers.insert(
                    HeaderName::from_static(HEADER_WALLET_NONCE),
                    header_value(nonce)?,
                );
            }
        }
        Ok(headers)
    }
}

/// Full result of a login run
#[derive(Debug, Clone)]
pub struct LoginReport {
    pub session: LoginSession,
    pub credential: Credential,
    pub outcome: ProbeOutcome,
}

/// Manages the complete authentication flow
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: AuthClient,
    options: AuthOptions,
}

impl AuthManager {
    pub fn new(client: AuthClient) -> Self {
        Self::with_options(client, AuthOptions::default())
    }

    pub fn with_options(client: AuthClient, options: AuthOptions) -> Self {
        Self { client, options }
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub fn options(&self) -> AuthOptions {
        self.options
    }

    /// Step A: fetch a fresh nonce for the wallet
    ///
    /// POST /api/auth/nonce. A body that is not a JSON object is a decode
    /// error; an object without a non-empty `nonce` is `MissingField`.
    pub async fn request_nonce(&self, wallet_address: &str) -> Result<IssuedNonce> {
        let builder = self
            .client
            .request(Method::POST, NONCE_ENDPOINT)?
            .json(&NonceRequest::new(wallet_address));
        let body: Map<String, Value> = self.client.send_json(builder).await?;

        let issued = NonceResponse::from_object(body)?
            .into_issued()
            .ok_or(AuthError::MissingField("nonce"))?;
        debug!(wallet = %wallet_address, ttl_secs = ?issued.ttl_secs, "nonce received");
        Ok(issued)
    }

    /// Step B: sign the login challenge for `nonce`
    pub async fn sign_challenge(
        &self,
        wallet: &dyn WalletSigner,
        nonce: &str,
    ) -> Result<(Challenge, Signature)> {
        let challenge = Challenge::login(nonce);
        let signature = wallet
            .sign_message(&challenge.to_bytes(self.options.format))
            .await?;
        Ok((challenge, signature))
    }

    /// Steps B-C for an already issued nonce
    pub async fn sign_in(
        &self,
        wallet: &dyn WalletSigner,
        nonce: IssuedNonce,
    ) -> Result<LoginSession> {
        let (message, signature) = self.sign_challenge(wallet, &nonce.value).await?;
        let token = BearerToken::new(wallet.public_key_bytes(), signature);

        info!(wallet = %wallet.address(), format = %self.options.format, "login challenge signed");

        Ok(LoginSession {
            nonce: nonce.value,
            ttl_secs: nonce.ttl_secs,
            message,
            signature,
            token,
        })
    }

    /// Steps A-C: nonce, signature, bearer token
    pub async fn authenticate(&self, wallet: &dyn WalletSigner) -> Result<LoginSession> {
        let nonce = self.request_nonce(wallet.address()).await?;
        self.sign_in(wallet, nonce).await
    }

    /// Build the credential the configured scheme attaches to `path`
    pub async fn credential_for(
        &self,
        wallet: &dyn WalletSigner,
        session: &LoginSession,
        path: &str,
    ) -> Result<Credential> {
        match self.options.scheme {
            AuthScheme::Bearer => Ok(Credential::Bearer(session.token.clone())),
            AuthScheme::WalletHeaders => {
                let canonical = signing_string(
                    Method::GET.as_str(),
                    path,
                    &session.nonce,
                    MethodCase::Upper,
                    PathCase::AsIs,
                );
                let signature = wallet.sign_message(canonical.as_bytes()).await?;
                Ok(Credential::WalletHeaders {
                    address: wallet.address().to_string(),
                    signature,
                    nonce: session.nonce.clone(),
                })
            }
        }
    }

    /// Step D: call the protected endpoint
    ///
    /// GET {path}. Any HTTP status is an outcome; only transport failures
    /// are errors.
    pub async fn probe(&self, credential: &Credential, path: &str) -> Result<ProbeOutcome> {
        let response = self
            .client
            .request(Method::GET, path)?
            .headers(credential.headers()?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let outcome = ProbeOutcome {
            status: status.as_u16(),
            body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            accepted: status.as_u16() == 200,
        };

        if outcome.accepted {
            info!(path, status = outcome.status, "credential accepted");
        } else {
            warn!(path, status = outcome.status, "credential rejected");
        }

        Ok(outcome)
    }

    /// Complete flow
    ///
    /// 1. Request nonce
    /// 2. Sign `Login:<nonce>`
    /// 3. Assemble bearer token
    /// 4. Probe the protected path
    pub async fn run(&self, wallet: &dyn WalletSigner, path: &str) -> Result<LoginReport> {
        let session = self.authenticate(wallet).await?;
        let credential = self.credential_for(wallet, &session, path).await?;
        let outcome = self.probe(&credential, path).await?;

        Ok(LoginReport {
            session,
            credential,
            outcome,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| AuthError::Config(format!("value is not a valid header: {e}")))
}
