//! Access token checking.
//!
//! Requests are authorised by a single shared secret. The check sits behind
//! [`CredentialCheck`] so a real authenticator can replace it without any
//! change to the wire protocol.

/// Decides whether an access token grants search access.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialCheck: Send + Sync {
    fn verify(&self, token: &str) -> bool;
}

/// Accepts exactly one configured token.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken").finish_non_exhaustive()
    }
}

impl CredentialCheck for StaticToken {
    fn verify(&self, token: &str) -> bool {
        self.token == token
    }
}

impl<F> CredentialCheck for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn verify(&self, token: &str) -> bool {
        self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token_requires_exact_match() {
        let check = StaticToken::new("123qwerty");

        assert!(check.verify("123qwerty"));
        assert!(!check.verify("123QWERTY"));
        assert!(!check.verify("123qwerty "));
        assert!(!check.verify(""));
        assert!(!check.verify("WRONG TOKEN"));
    }

    #[test]
    fn test_debug_hides_token() {
        let check = StaticToken::new("123qwerty");
        assert!(!format!("{:?}", check).contains("123qwerty"));
    }

    #[test]
    fn test_closures_are_credential_checks() {
        let check = |token: &str| token.starts_with("ok-");

        assert!(check.verify("ok-1"));
        assert!(!check.verify("nope"));
    }
}
