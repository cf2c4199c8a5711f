/*
[INPUT]:  Optional YAML file, WALLET_PROBE__* environment, CLI overrides
[OUTPUT]: Resolved probe configuration
[POS]:    Configuration layer - run setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use wallet_login_adapter::auth::DEFAULT_PROTECTED_PATH;
use wallet_login_adapter::http::DEFAULT_BASE_URL;
use wallet_login_adapter::{AuthOptions, AuthScheme, ClientConfig, MessageFormat};

/// Environment variable prefix, e.g. `WALLET_PROBE__BASE_URL`
pub const ENV_PREFIX: &str = "WALLET_PROBE";

/// Top-level configuration for a probe run
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Wallet keypair file (JSON byte array)
    #[serde(default = "default_keypair_path")]
    pub keypair_path: PathBuf,
    /// PEM trust anchor for self-signed servers
    #[serde(default)]
    pub ca_cert_path: Option<PathBuf>,
    /// Endpoint exercised with the credential
    #[serde(default = "default_protected_path")]
    pub protected_path: String,
    /// Per-request deadline
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub scheme: AuthScheme,
    #[serde(default)]
    pub message_format: MessageFormat,
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub keypair_path: Option<PathBuf>,
    pub ca_cert_path: Option<PathBuf>,
    pub protected_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub scheme: Option<AuthScheme>,
    pub message_format: Option<MessageFormat>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            keypair_path: default_keypair_path(),
            ca_cert_path: None,
            protected_path: default_protected_path(),
            timeout_secs: default_timeout_secs(),
            scheme: AuthScheme::default(),
            message_format: MessageFormat::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_keypair_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("solana")
        .join("id.json")
}

fn default_protected_path() -> String {
    DEFAULT_PROTECTED_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl ProbeConfig {
    /// Load from an optional file layered under the process environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load with an explicit environment source
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let settings = builder
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .context("read configuration sources")?;
        settings
            .try_deserialize()
            .context("deserialize configuration")
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(keypair_path) = overrides.keypair_path {
            self.keypair_path = keypair_path;
        }
        if overrides.ca_cert_path.is_some() {
            self.ca_cert_path = overrides.ca_cert_path;
        }
        if let Some(protected_path) = overrides.protected_path {
            self.protected_path = protected_path;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(scheme) = overrides.scheme {
            self.scheme = scheme;
        }
        if let Some(message_format) = overrides.message_format {
            self.message_format = message_format;
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ca_cert_path: self.ca_cert_path.clone(),
            ..ClientConfig::default()
        }
    }

    pub fn auth_options(&self) -> AuthOptions {
        AuthOptions {
            format: self.message_format,
            scheme: self.scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn empty_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(config::Map::new()))
    }

    fn write_config(content: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("wallet-probe-config-{}.yaml", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::load_with_env(None, empty_env()).unwrap();
        assert_eq!(config.base_url, "https://localhost:8081");
        assert_eq!(config.protected_path, "/api/transactions");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.keypair_path.ends_with(".config/solana/id.json"));
        assert_eq!(config.scheme, AuthScheme::Bearer);
    }

    #[test]
    fn test_file_then_env_layering() {
        let path = write_config(
            "base_url: https://api.example.com\nca_cert_path: cert.pem\nmessage_format: solana-offchain\n",
        );

        let mut env = config::Map::new();
        env.insert(
            "WALLET_PROBE__BASE_URL".to_string(),
            "https://override.example.com".to_string(),
        );
        env.insert("WALLET_PROBE__TIMEOUT_SECS".to_string(), "3".to_string());
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(env));

        let config = ProbeConfig::load_with_env(Some(&path), env).unwrap();
        assert_eq!(config.base_url, "https://override.example.com");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.ca_cert_path, Some(PathBuf::from("cert.pem")));
        assert_eq!(config.message_format, MessageFormat::SolanaOffchain);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = ProbeConfig::load_with_env(
            Some(Path::new("/nonexistent/probe.yaml")),
            empty_env(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = ProbeConfig::default();
        config.apply(Overrides {
            protected_path: Some("/api/me".to_string()),
            scheme: Some(AuthScheme::WalletHeaders),
            ..Overrides::default()
        });
        assert_eq!(config.protected_path, "/api/me");
        assert_eq!(config.auth_options().scheme, AuthScheme::WalletHeaders);
        assert_eq!(config.base_url, "https://localhost:8081");
        assert_eq!(config.client_config().timeout, Duration::from_secs(10));
    }
}
