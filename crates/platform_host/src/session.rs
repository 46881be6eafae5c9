//! Session verification contracts used to resolve the signed-in user's role.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`SessionService`].
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Identity payload returned by the session-verification endpoint.
///
/// Only `role` drives permissions; the name fields feed the user indicator. Unknown fields in the
/// payload are ignored and every field tolerates being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionIdentity {
    /// Raw role string (`admin`, `manager`, `cashier`, `user`, or anything else).
    pub role: Option<String>,
    /// Optional human-readable full name.
    pub full_name: Option<String>,
    /// Optional login name.
    pub username: Option<String>,
}

impl SessionIdentity {
    /// Builds an identity carrying only a role string.
    pub fn with_role(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            ..Self::default()
        }
    }

    /// Returns the name shown in the user indicator.
    ///
    /// Prefers a non-blank full name, then the username, then a generic label.
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or_else(|| self.username.as_deref().filter(|name| !name.is_empty()))
            .unwrap_or("Utilisateur")
            .to_string()
    }

    /// Returns the role label shown in the user badge.
    pub fn role_label(&self) -> String {
        self.role
            .as_deref()
            .filter(|role| !role.is_empty())
            .unwrap_or("user")
            .to_string()
    }
}

/// Failure modes of a session lookup. None of them is fatal to the desktop shell.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The active host cannot perform the lookup (no browser window, no fetch API).
    #[error("session service unavailable on this host")]
    Unavailable,
    /// The request never produced a response.
    #[error("session request failed: {0}")]
    Network(String),
    /// The endpoint answered with a non-success status.
    #[error("session endpoint returned HTTP {0}")]
    Status(u16),
    /// The response body could not be decoded into a [`SessionIdentity`].
    #[error("session payload could not be decoded: {0}")]
    Decode(String),
}

/// Host service that verifies the current session and reports the user's identity.
pub trait SessionService {
    /// Performs the one-shot session verification request.
    fn verify_session<'a>(&'a self) -> SessionFuture<'a, Result<SessionIdentity, SessionError>>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Session service answering with a fixed identity, or with a fixed failure when none is set.
///
/// Used by stub host compositions and by tests.
pub struct StaticSessionService {
    identity: Option<SessionIdentity>,
}

impl StaticSessionService {
    /// Creates a service that always resolves to `identity`.
    pub fn new(identity: SessionIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Creates a service that always fails with [`SessionError::Unavailable`].
    pub fn unavailable() -> Self {
        Self { identity: None }
    }
}

impl SessionService for StaticSessionService {
    fn verify_session<'a>(&'a self) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        Box::pin(async move { self.identity.clone().ok_or(SessionError::Unavailable) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_accepts_extra_fields_and_missing_names() {
        let identity: SessionIdentity =
            serde_json::from_str(r#"{"role":"cashier","id":7,"is_active":true}"#).unwrap();
        assert_eq!(identity, SessionIdentity::with_role("cashier"));
    }

    #[test]
    fn decode_rejects_non_object_payloads() {
        assert!(serde_json::from_str::<SessionIdentity>("<html>login</html>").is_err());
    }

    #[test]
    fn display_name_prefers_trimmed_full_name_then_username() {
        let mut identity = SessionIdentity {
            role: Some("manager".to_string()),
            full_name: Some("  Awa Diop ".to_string()),
            username: Some("adiop".to_string()),
        };
        assert_eq!(identity.display_name(), "Awa Diop");

        identity.full_name = Some("   ".to_string());
        assert_eq!(identity.display_name(), "adiop");

        identity.username = None;
        assert_eq!(identity.display_name(), "Utilisateur");
    }

    #[test]
    fn role_label_defaults_to_user() {
        assert_eq!(SessionIdentity::default().role_label(), "user");
        assert_eq!(SessionIdentity::with_role("admin").role_label(), "admin");
    }

    #[test]
    fn static_service_resolves_or_reports_unavailable() {
        let service = StaticSessionService::new(SessionIdentity::with_role("admin"));
        assert_eq!(
            block_on(service.verify_session()),
            Ok(SessionIdentity::with_role("admin"))
        );

        let offline = StaticSessionService::unavailable();
        assert_eq!(
            block_on(offline.verify_session()),
            Err(SessionError::Unavailable)
        );
    }
}
