/*
[INPUT]:  Server nonce, request method and path
[OUTPUT]: Exact byte strings the wallet signs
[POS]:    Auth layer - canonical challenge construction
[UPDATE]: When the server changes the signed message layout
*/

use crate::types::{MessageFormat, MethodCase, PathCase};

/// Prefix the server expects in front of the nonce
pub const LOGIN_PREFIX: &str = "Login:";

const OFFCHAIN_HEADER: &[u8] = b"Solana Signed Message:\n";

/// Login challenge bound to a single nonce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    message: String,
}

impl Challenge {
    /// `Login:<nonce>`
    pub fn login(nonce: &str) -> Self {
        Self {
            message: format!("{LOGIN_PREFIX}{nonce}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.message
    }

    /// Bytes handed to the signer for the given format
    pub fn to_bytes(&self, format: MessageFormat) -> Vec<u8> {
        match format {
            MessageFormat::Raw => self.message.as_bytes().to_vec(),
            MessageFormat::SolanaOffchain => offchain_envelope(self.message.as_bytes()),
        }
    }
}

/// Wrap a message the way `solana sign-offchain-message` does
pub fn offchain_envelope(message: &[u8]) -> Vec<u8> {
    let len = message.len().to_string();
    let mut out = Vec::with_capacity(OFFCHAIN_HEADER.len() + len.len() + 1 + message.len());
    out.extend_from_slice(OFFCHAIN_HEADER);
    out.extend_from_slice(len.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(message);
    out
}

/// Canonical per-request string: `METHOD\nPATH\nNONCE`
pub fn signing_string(
    method: &str,
    path_and_query: &str,
    nonce: &str,
    method_case: MethodCase,
    path_case: PathCase,
) -> String {
    let method = match method_case {
        MethodCase::Upper => method.to_uppercase(),
        MethodCase::Lower => method.to_lowercase(),
        MethodCase::AsIs => method.to_string(),
    };
    let path = match path_case {
        PathCase::Lower => path_and_query.to_lowercase(),
        PathCase::AsIs => path_and_query.to_string(),
    };
    format!("{method}\n{path}\n{nonce}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_login_message() {
        let challenge = Challenge::login("abc123");
        assert_eq!(challenge.as_str(), "Login:abc123");
        assert_eq!(challenge.to_bytes(MessageFormat::Raw), b"Login:abc123".to_vec());
    }

    #[test]
    fn test_login_message_is_utf8() {
        let challenge = Challenge::login("nonce-é");
        assert_eq!(
            challenge.to_bytes(MessageFormat::Raw),
            "Login:nonce-é".as_bytes().to_vec()
        );
    }

    #[test]
    fn test_offchain_envelope() {
        let bytes = Challenge::login("test123").to_bytes(MessageFormat::SolanaOffchain);
        assert_eq!(bytes, b"Solana Signed Message:\n13\nLogin:test123".to_vec());
    }

    #[rstest]
    #[case("get", "/api/Test?x=1", MethodCase::Upper, PathCase::AsIs, "GET\n/api/Test?x=1\nn1")]
    #[case("GET", "/api/Test", MethodCase::Lower, PathCase::Lower, "get\n/api/test\nn1")]
    #[case("Get", "/api/test", MethodCase::AsIs, PathCase::AsIs, "Get\n/api/test\nn1")]
    fn test_signing_string(
        #[case] method: &str,
        #[case] path: &str,
        #[case] method_case: MethodCase,
        #[case] path_case: PathCase,
        #[case] expected: &str,
    ) {
        assert_eq!(
            signing_string(method, path, "n1", method_case, path_case),
            expected
        );
    }
}
