/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallet-login-adapter tests

use std::fs;
use std::path::PathBuf;

use uuid::Uuid;
use wallet_login_adapter::{AuthClient, AuthManager, AuthOptions, ClientConfig};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Auth manager pointed at the mock server
#[allow(dead_code)]
pub fn manager_for(server: &MockServer) -> AuthManager {
    let client = AuthClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client should build");
    AuthManager::with_options(client, AuthOptions::default())
}

/// Deterministic 64-byte keypair file content: seed bytes 0..32, then filler
#[allow(dead_code)]
pub fn test_keypair_json() -> String {
    let values: Vec<u8> = (0u8..64).collect();
    serde_json::to_string(&values).unwrap()
}

/// Write `content` to a fresh file under the system temp dir
#[allow(dead_code)]
pub fn write_temp_file(name: &str, content: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("wallet-login-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
