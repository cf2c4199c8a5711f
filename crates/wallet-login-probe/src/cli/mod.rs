/*
[INPUT]:  Parsed subcommand arguments and resolved configuration
[OUTPUT]: Subcommand execution with console report
[POS]:    CLI command layer
[UPDATE]: When adding subcommands
*/

mod login;
mod pubkey;
mod verify;

pub use login::run_login;
pub use pubkey::run_pubkey;
pub use verify::run_verify;

use tracing::error;
use wallet_login_adapter::AuthError;
use wallet_login_probe::report;

/// Report a stage failure and turn it into the run's terminal error
pub(crate) fn abort(err: AuthError, stage: &'static str) -> anyhow::Error {
    report::failure(&err);
    error!(stage, category = ?err.category(), error = %err, "run aborted");
    anyhow::Error::new(err).context(stage)
}
