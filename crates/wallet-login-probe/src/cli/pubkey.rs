/*
[INPUT]:  Keypair file path
[OUTPUT]: Base58 wallet address on stdout
[POS]:    CLI command layer - key inspection
[UPDATE]: When address derivation or output format changes
*/

use std::path::Path;

use anyhow::Result;
use wallet_login_adapter::{KeypairWallet, WalletSigner};

use super::abort;

/// Print the wallet address derived from the keypair's seed
pub fn run_pubkey(keypair_path: &Path) -> Result<()> {
    let wallet = KeypairWallet::from_file(keypair_path).map_err(|e| abort(e, "load keypair"))?;
    println!("{}", wallet.address());
    Ok(())
}
