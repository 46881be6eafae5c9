use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::SessionService;

use crate::{host::DesktopHostContext, reducer::DesktopAction};

/// Runs the session lookup and maps its outcome to the action that settles the tier.
pub(super) async fn resolve_session(service: &dyn SessionService) -> DesktopAction {
    match service.verify_session().await {
        Ok(identity) => DesktopAction::ApplySessionIdentity { identity },
        Err(err) => {
            logging::warn!("session lookup failed, keeping the restricted app set: {err}");
            DesktopAction::SessionLookupFailed
        }
    }
}

pub(super) fn install_session_boot(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let session = host.session_service();
        spawn_local(async move {
            let action = resolve_session(session.as_ref()).await;
            dispatch.call(action);
        });
    });
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{SessionIdentity, StaticSessionService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn successful_lookup_applies_identity() {
        let service = StaticSessionService::new(SessionIdentity::with_role("cashier"));
        assert_eq!(
            block_on(resolve_session(&service)),
            DesktopAction::ApplySessionIdentity {
                identity: SessionIdentity::with_role("cashier"),
            }
        );
    }

    #[test]
    fn failed_lookup_falls_back() {
        let service = StaticSessionService::unavailable();
        assert_eq!(
            block_on(resolve_session(&service)),
            DesktopAction::SessionLookupFailed
        );
    }
}
