//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; timers, DOM focus, viewport measurement, and the session lookup
//! run here behind the injected [`HostServices`] bundle.

mod boot;
mod host_ui;

use std::rc::Rc;

use leptos::{logging, Callback};
use platform_host::{HostServices, SessionService};

use crate::{
    config::desktop_config,
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    session: Rc<dyn SessionService>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Creates a host context from an injected host-service bundle.
    pub fn new(services: HostServices) -> Self {
        Self {
            session: services.session,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured session verification service.
    pub fn session_service(&self) -> Rc<dyn SessionService> {
        self.session.clone()
    }

    /// Returns the stable host strategy name for diagnostics.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Starts the one-shot session lookup that settles the permission tier.
    pub fn install_session_boot(&self, dispatch: Callback<DesktopAction>) {
        boot::install_session_boot(self.clone(), dispatch);
    }

    /// Executes a single reducer-emitted [`RuntimeEffect`].
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleDockHide { delay_ms } => {
                host_ui::schedule_dock_hide(runtime, delay_ms);
            }
            RuntimeEffect::CancelDockHide => host_ui::cancel_dock_hide(runtime),
            RuntimeEffect::FocusLaunchpadSearch => host_ui::focus_launchpad_search(),
            RuntimeEffect::LaunchDenied { app_id, tier } => {
                logging::debug_warn!(
                    "launch of `{app_id}` denied for tier `{}`",
                    tier.token()
                );
            }
            RuntimeEffect::SessionTierResolved { tier } => {
                logging::log!(
                    "desktop session resolved to tier `{}` (host: {})",
                    tier.token(),
                    self.host_strategy_name
                );
            }
        }
    }

    /// Computes the desktop viewport rectangle, falling back to the configured size.
    pub fn viewport_rect(&self) -> WindowRect {
        host_ui::viewport_rect(desktop_config().fallback_viewport())
    }
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(HostServices::stub())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_host_reports_strategy_and_fallback_viewport() {
        let host = DesktopHostContext::default();
        assert_eq!(host.host_strategy_name(), "stub");
        assert_eq!(host.viewport_rect(), desktop_config().fallback_viewport());
    }
}
