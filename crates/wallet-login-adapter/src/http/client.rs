/*
[INPUT]:  HTTP configuration (base URL, timeouts, trust anchor)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Certificate, Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{AuthError, Result};

/// Default API base URL (local TLS dev server)
pub const DEFAULT_BASE_URL: &str = "https://localhost:8081";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// PEM file trusted as an additional root (self-signed servers)
    pub ca_cert_path: Option<PathBuf>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            ca_cert_path: None,
            user_agent: concat!("wallet-login/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: Url,
}

impl AuthClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str());

        if let Some(path) = &config.ca_cert_path {
            let pem = fs::read(path).map_err(|e| AuthError::io(path, e))?;
            let certificates = Certificate::from_pem_bundle(&pem).map_err(|e| {
                AuthError::Tls(format!("{} is not a valid PEM bundle: {e}", path.display()))
            })?;
            if certificates.is_empty() {
                return Err(AuthError::Tls(format!(
                    "{} contains no certificates",
                    path.display()
                )));
            }
            debug!(
                ca_cert = %path.display(),
                count = certificates.len(),
                "trusting additional root certificates"
            );
            for certificate in certificates {
                builder = builder.add_root_certificate(certificate);
            }
        }

        let http_client = builder.build()?;
        let base_url = Url::parse(&config.base_url)?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON body from a 2xx response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let body = Self::success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn success_body(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::api_error(status, body));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.ca_cert_path.is_none());
    }

    #[test]
    fn test_url_join() {
        let client = AuthClient::with_config(ClientConfig {
            base_url: "https://api.example.com".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.url("/api/auth/nonce").unwrap().as_str(),
            "https://api.example.com/api/auth/nonce"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = AuthClient::with_config(ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::UrlParse(_)));
    }

    #[test]
    fn test_missing_ca_cert() {
        let err = AuthClient::with_config(ClientConfig {
            ca_cert_path: Some(PathBuf::from("/nonexistent/cert.pem")),
            ..ClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::Io { .. }));
    }
}
