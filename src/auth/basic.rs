//! HTTP Basic credential decoding and comparison

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// The one username/password pair the gate accepts.
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Gate rejection reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No credentials sent!")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Check an `Authorization` header value against `expected`.
///
/// `None` and an empty value both count as missing. Anything else that does
/// not decode to the expected pair (wrong scheme, bad base64, non-UTF-8,
/// no colon) is reported as invalid.
pub fn verify_authorization(header: Option<&str>, expected: &Credentials) -> Result<(), AuthError> {
    let header = match header.map(str::trim) {
        None | Some("") => return Err(AuthError::MissingCredentials),
        Some(h) => h,
    };

    let (username, password) = decode_basic(header).ok_or(AuthError::InvalidCredentials)?;

    if expected.matches(&username, &password) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Decode `Basic <base64(user:pass)>`. The password may itself contain colons.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let bytes = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Credentials {
        Credentials::new("admin", "password")
    }

    fn basic(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn accepts_matching_pair() {
        // admin:password
        assert_eq!(
            verify_authorization(Some("Basic YWRtaW46cGFzc3dvcmQ="), &admin()),
            Ok(())
        );
    }

    #[test]
    fn missing_or_empty_header_is_missing() {
        assert_eq!(
            verify_authorization(None, &admin()),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            verify_authorization(Some(""), &admin()),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn wrong_pair_is_invalid() {
        assert_eq!(
            verify_authorization(Some(basic("admin:wrong").as_str()), &admin()),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            verify_authorization(Some(basic("root:password").as_str()), &admin()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn malformed_encoding_is_invalid() {
        for header in [
            "Basic invalidcredentials",
            "Basic",
            "Bearer YWRtaW46cGFzc3dvcmQ=",
            "YWRtaW46cGFzc3dvcmQ=",
        ] {
            assert_eq!(
                verify_authorization(Some(header), &admin()),
                Err(AuthError::InvalidCredentials),
                "header {header:?}"
            );
        }
        assert_eq!(
            verify_authorization(Some(basic("adminpassword").as_str()), &admin()),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn password_may_contain_colon() {
        let creds = Credentials::new("svc", "a:b:c");
        assert_eq!(verify_authorization(Some(basic("svc:a:b:c").as_str()), &creds), Ok(()));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(
            verify_authorization(Some("basic YWRtaW46cGFzc3dvcmQ="), &admin()),
            Ok(())
        );
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn error_messages() {
        assert_eq!(AuthError::MissingCredentials.to_string(), "No credentials sent!");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
