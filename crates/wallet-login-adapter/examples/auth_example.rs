/*
[INPUT]:  Wallet keypair file and a running API server
[OUTPUT]: Bearer token and the protected endpoint's verdict
[POS]:    Examples - authentication flow demonstration
[UPDATE]: When auth flow changes
*/

use std::path::PathBuf;

use wallet_login_adapter::auth::DEFAULT_PROTECTED_PATH;
use wallet_login_adapter::*;

/// Example: wallet login flow
///
/// 1. Load the wallet keypair
/// 2. Request a nonce
/// 3. Sign `Login:<nonce>` and build the bearer token
/// 4. Call a protected endpoint with the token
///
/// Usage: cargo run --example auth_example -- <keypair.json> [base_url] [ca_cert.pem]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Wallet Login Example ===\n");

    let mut args = std::env::args().skip(1);
    let Some(keypair_path) = args.next() else {
        eprintln!("usage: auth_example <keypair.json> [base_url] [ca_cert.pem]");
        return;
    };
    let base_url = args.next().unwrap_or_else(|| http::DEFAULT_BASE_URL.to_string());
    let ca_cert_path = args.next().map(PathBuf::from);

    let wallet = match KeypairWallet::from_file(&keypair_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load keypair: {}", e);
            return;
        }
    };
    println!("✓ Wallet loaded: {}", wallet.address());

    let client = match AuthClient::with_config(ClientConfig {
        base_url,
        ca_cert_path,
        ..ClientConfig::default()
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let auth_manager = AuthManager::new(client);

    match auth_manager.run(&wallet, DEFAULT_PROTECTED_PATH).await {
        Ok(report) => {
            println!("✓ Nonce: {}", report.session.nonce);
            println!("✓ Token: {}", report.session.token);
            println!(
                "  {} -> HTTP {} ({})",
                DEFAULT_PROTECTED_PATH,
                report.outcome.status,
                if report.outcome.accepted { "accepted" } else { "rejected" }
            );
        }
        Err(e) => eprintln!("Login failed: {}", e),
    }
}
