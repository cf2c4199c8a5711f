/*
[INPUT]:  CLI arguments, optional YAML configuration file, environment
[OUTPUT]: Wallet login diagnostics on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wallet_login_adapter::{AuthScheme, MessageFormat};
use wallet_login_probe::{Overrides, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "wallet-login-probe", version, about = "Wallet sign-in diagnostic client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the nonce / sign / probe flow against the server
    Login(LoginArgs),
    /// Print the base58 public key derived from the keypair file
    Pubkey {
        #[arg(long = "keypair", value_name = "PATH")]
        keypair: Option<PathBuf>,
    },
    /// Check offline that a token signs `Login:<nonce>`
    Verify {
        #[arg(long)]
        token: String,
        #[arg(long)]
        nonce: String,
        #[arg(long, default_value = "raw")]
        format: MessageFormat,
    },
}

#[derive(Args, Debug, Default)]
struct LoginArgs {
    #[arg(long = "base-url", value_name = "URL")]
    base_url: Option<String>,
    #[arg(long = "keypair", value_name = "PATH")]
    keypair: Option<PathBuf>,
    #[arg(long = "ca-cert", value_name = "PATH")]
    ca_cert: Option<PathBuf>,
    /// Protected endpoint to call with the credential
    #[arg(long = "path", value_name = "PATH")]
    path: Option<String>,
    #[arg(long = "scheme", value_name = "bearer|wallet-headers")]
    scheme: Option<AuthScheme>,
    #[arg(long = "format", value_name = "raw|solana-offchain")]
    format: Option<MessageFormat>,
    #[arg(long = "timeout-secs", value_name = "SECS")]
    timeout_secs: Option<u64>,
}

impl From<LoginArgs> for Overrides {
    fn from(args: LoginArgs) -> Self {
        Overrides {
            base_url: args.base_url,
            keypair_path: args.keypair,
            ca_cert_path: args.ca_cert,
            protected_path: args.path,
            timeout_secs: args.timeout_secs,
            scheme: args.scheme,
            message_format: args.format,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let mut config = ProbeConfig::load(args.config_path.as_deref()).context("load config")?;

    match args.command {
        Command::Login(login) => {
            config.apply(login.into());
            info!(
                base_url = %config.base_url,
                keypair = %config.keypair_path.display(),
                scheme = %config.scheme,
                "starting wallet login probe"
            );
            cli::run_login(&config).await
        }
        Command::Pubkey { keypair } => {
            let path = keypair.unwrap_or(config.keypair_path);
            cli::run_pubkey(&path)
        }
        Command::Verify {
            token,
            nonce,
            format,
        } => cli::run_verify(&token, &nonce, format),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
