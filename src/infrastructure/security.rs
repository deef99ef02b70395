// src/infrastructure/security.rs
use crate::application::{
    dto::AdminPrincipal,
    error::{ApplicationError, ApplicationResult},
    ports::security::AdminAuthenticator,
};
use async_trait::async_trait;

/// Validates bearer tokens against a fixed list configured at startup.
/// Only BLAKE3 digests of the tokens are kept in memory.
#[derive(Clone)]
pub struct StaticTokenAuthenticator {
    entries: Vec<(String, blake3::Hash)>,
}

impl StaticTokenAuthenticator {
    pub fn new<N, T>(tokens: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: AsRef<str>,
    {
        let entries = tokens
            .into_iter()
            .map(|(name, token)| (name.into(), blake3::hash(token.as_ref().as_bytes())))
            .collect();
        Self { entries }
    }

    /// Parse `name:token` pairs separated by commas.
    pub fn parse(spec: &str) -> Result<Self, String> {
        let mut pairs = Vec::new();
        for item in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (name, token) = item
                .split_once(':')
                .ok_or_else(|| format!("expected name:token, got `{item}`"))?;
            let (name, token) = (name.trim(), token.trim());
            if name.is_empty() || token.is_empty() {
                return Err(format!("admin token entry `{item}` has an empty name or token"));
            }
            pairs.push((name.to_string(), token.to_string()));
        }
        if pairs.is_empty() {
            return Err("at least one admin token is required".into());
        }
        Ok(Self::new(pairs))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl AdminAuthenticator for StaticTokenAuthenticator {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ApplicationError::unauthorized("missing bearer token"));
        }
        // blake3::Hash equality is constant-time.
        let digest = blake3::hash(token.as_bytes());
        self.entries
            .iter()
            .find(|(_, known)| *known == digest)
            .map(|(name, _)| AdminPrincipal { name: name.clone() })
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_known_tokens_to_their_name() {
        let auth = StaticTokenAuthenticator::parse("alice:s3cret, bob:hunter2").unwrap();
        assert_eq!(auth.len(), 2);
        let principal = auth.authenticate("hunter2").await.unwrap();
        assert_eq!(principal.name, "bob");
    }

    #[tokio::test]
    async fn rejects_unknown_and_blank_tokens() {
        let auth = StaticTokenAuthenticator::new([("alice", "s3cret")]);
        assert!(matches!(
            auth.authenticate("nope").await,
            Err(ApplicationError::Unauthorized(_))
        ));
        assert!(matches!(
            auth.authenticate("  ").await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[test]
    fn parse_rejects_malformed_entries() {
        assert!(StaticTokenAuthenticator::parse("").is_err());
        assert!(StaticTokenAuthenticator::parse("justatoken").is_err());
        assert!(StaticTokenAuthenticator::parse("name:").is_err());
    }
}
