/*
[INPUT]:  Bearer token, nonce and message format
[OUTPUT]: Offline verification verdict
[POS]:    CLI command layer - token inspection
[UPDATE]: When the token layout or challenge changes
*/

use anyhow::Result;
use wallet_login_adapter::{Challenge, MessageFormat, verify_login_token};
use wallet_login_probe::report;

use super::abort;

pub fn run_verify(token: &str, nonce: &str, format: MessageFormat) -> Result<()> {
    report::header("Token verification");
    report::detail("Message", Challenge::login(nonce).as_str());
    report::detail("Format", format);

    let token = verify_login_token(token, nonce, format).map_err(|e| abort(e, "verify token"))?;

    report::detail("Public key (base58)", token.public_key_base58());
    report::detail("Signature (hex)", hex::encode(token.signature().to_bytes()));
    println!("   ✅ signature valid");
    Ok(())
}
