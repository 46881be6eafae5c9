//! Host-bundle model shared by browser and stub runtime compositions.

use std::rc::Rc;

use crate::{SessionService, StaticSessionService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with static/no-op adapters (native builds, tests).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the window manager free of browser details.
#[derive(Clone)]
pub struct HostServices {
    /// Session verification (role lookup) service.
    pub session: Rc<dyn SessionService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a stub bundle whose session lookup always fails, leaving the shell fail-closed.
    pub fn stub() -> Self {
        Self {
            session: Rc::new(StaticSessionService::unavailable()),
            host_strategy: HostStrategy::Stub,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
