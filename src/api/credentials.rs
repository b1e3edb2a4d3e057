//! Credentials
//!
//! The bearer token is read from browser storage once at start-up and
//! handed to the API client; requests never touch storage themselves.

/// Source of the bearer token attached to outgoing requests
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Token snapshot taken when the app starts
#[derive(Debug, Clone, Default)]
pub struct SessionCredentials {
    token: Option<String>,
}

impl SessionCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Read the token stored under `key` in `localStorage`
    pub fn from_local_storage(key: &str) -> Self {
        let token = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(key).ok().flatten());
        if token.is_none() {
            log::info!("no stored session token, requests go out anonymous");
        }
        Self::new(token)
    }
}

impl CredentialProvider for SessionCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_anonymous() {
        assert_eq!(SessionCredentials::new(Some("  ".into())).bearer_token(), None);
        assert_eq!(SessionCredentials::anonymous().bearer_token(), None);
    }

    #[test]
    fn test_token_is_returned() {
        let credentials = SessionCredentials::new(Some("abc123".into()));
        assert_eq!(credentials.bearer_token().as_deref(), Some("abc123"));
    }
}
