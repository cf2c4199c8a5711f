/*
[INPUT]:  Resolved probe configuration
[OUTPUT]: Step-by-step login report and probe verdict
[POS]:    CLI command layer - full login flow
[UPDATE]: When auth flow steps change
*/

use anyhow::Result;
use tracing::info;
use wallet_login_adapter::{AuthClient, AuthManager, KeypairWallet, WalletSigner};
use wallet_login_probe::{ProbeConfig, report};

use super::abort;

pub async fn run_login(config: &ProbeConfig) -> Result<()> {
    report::header("Wallet login probe");

    report::step(
        1,
        &format!("Loading keypair from {}", config.keypair_path.display()),
    );
    let wallet =
        KeypairWallet::from_file(&config.keypair_path).map_err(|e| abort(e, "load keypair"))?;
    report::detail("Public key (base58)", wallet.address());

    let client =
        AuthClient::with_config(config.client_config()).map_err(|e| abort(e, "build client"))?;
    let manager = AuthManager::with_options(client, config.auth_options());

    report::step(
        2,
        &format!("Requesting nonce from {}", config.base_url.trim_end_matches('/')),
    );
    let nonce = manager
        .request_nonce(wallet.address())
        .await
        .map_err(|e| abort(e, "request nonce"))?;
    report::detail("Nonce", &nonce.value);
    if let Some(ttl) = nonce.ttl_secs {
        report::detail("Valid for", format!("{ttl}s"));
    }

    report::step(
        3,
        &format!("Signing 'Login:{}' ({})", nonce.value, config.message_format),
    );
    let session = manager
        .sign_in(&wallet, nonce)
        .await
        .map_err(|e| abort(e, "sign challenge"))?;
    report::detail("Signature (hex)", hex::encode(session.signature.to_bytes()));

    report::step(4, "Assembling bearer token");
    report::detail("Token (base58)", &session.token);

    report::step(
        5,
        &format!(
            "Calling {} with {} credentials",
            config.protected_path, config.scheme
        ),
    );
    let credential = manager
        .credential_for(&wallet, &session, &config.protected_path)
        .await
        .map_err(|e| abort(e, "build credential"))?;
    let outcome = manager
        .probe(&credential, &config.protected_path)
        .await
        .map_err(|e| abort(e, "call protected endpoint"))?;
    report::outcome(&outcome);

    info!(
        wallet = %wallet.address(),
        status = outcome.status,
        accepted = outcome.accepted,
        "login probe finished"
    );
    Ok(())
}
