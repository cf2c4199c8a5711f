/*
[INPUT]:  Protocol options and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When protocol options change or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the signed credential is attached to the protected request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthScheme {
    /// `Authorization: Bearer base58(pubkey || signature)`
    #[default]
    Bearer,
    /// `X-Wallet-Address` / `X-Wallet-Signature` / `X-Wallet-Nonce`
    WalletHeaders,
}

/// Byte layout the challenge is signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageFormat {
    #[default]
    Raw,
    /// Envelope produced by `solana sign-offchain-message`
    SolanaOffchain,
}

/// Case normalization for the method in a signing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MethodCase {
    #[default]
    Upper,
    Lower,
    AsIs,
}

/// Case normalization for the path in a signing string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathCase {
    Lower,
    #[default]
    AsIs,
}

impl AuthScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthScheme::Bearer => "bearer",
            AuthScheme::WalletHeaders => "wallet-headers",
        }
    }
}

impl MessageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageFormat::Raw => "raw",
            MessageFormat::SolanaOffchain => "solana-offchain",
        }
    }
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearer" => Ok(AuthScheme::Bearer),
            "wallet-headers" | "headers" => Ok(AuthScheme::WalletHeaders),
            other => Err(format!(
                "unknown auth scheme '{other}' (expected bearer or wallet-headers)"
            )),
        }
    }
}

impl FromStr for MessageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(MessageFormat::Raw),
            "solana-offchain" | "offchain" => Ok(MessageFormat::SolanaOffchain),
            other => Err(format!(
                "unknown message format '{other}' (expected raw or solana-offchain)"
            )),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MessageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parse() {
        assert_eq!("bearer".parse::<AuthScheme>(), Ok(AuthScheme::Bearer));
        assert_eq!(
            "Wallet-Headers".parse::<AuthScheme>(),
            Ok(AuthScheme::WalletHeaders)
        );
        assert!("cookie".parse::<AuthScheme>().is_err());
    }

    #[test]
    fn test_format_serde() {
        let format: MessageFormat = serde_json::from_str("\"solana-offchain\"").unwrap();
        assert_eq!(format, MessageFormat::SolanaOffchain);
        assert_eq!(serde_json::to_string(&MessageFormat::Raw).unwrap(), "\"raw\"");
    }
}
