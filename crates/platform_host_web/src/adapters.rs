use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, SessionError, SessionFuture, SessionIdentity, SessionService,
    StaticSessionService,
};

use crate::WebSessionService;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete session backend behind [`SessionService`].
#[derive(Debug, Clone)]
pub enum SessionServiceAdapter {
    /// Browser `fetch`-backed role lookup.
    Browser(WebSessionService),
    /// Static fallback used when the browser transport is intentionally stubbed.
    Stub(StaticSessionService),
}

impl SessionService for SessionServiceAdapter {
    fn verify_session<'a>(&'a self) -> SessionFuture<'a, Result<SessionIdentity, SessionError>> {
        match self {
            Self::Browser(service) => service.verify_session(),
            Self::Stub(service) => service.verify_session(),
        }
    }
}

/// Builds the session service for the selected host strategy.
pub fn session_service(role_endpoint: &str) -> SessionServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            SessionServiceAdapter::Browser(WebSessionService::new(role_endpoint))
        }
        HostStrategy::Stub => SessionServiceAdapter::Stub(StaticSessionService::unavailable()),
    }
}

/// Assembles the [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services(role_endpoint: &str) -> HostServices {
    HostServices {
        session: Rc::new(session_service(role_endpoint)),
        host_strategy: selected_host_strategy(),
    }
}
