//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the transient
//! pointer capture and dock timer slots, and host bootstrap wiring. UI composition stays in
//! [`crate::components`].

use leptos::{leptos_dom::helpers::TimeoutHandle, *};
use platform_host::HostServices;

use crate::{
    components::PointerCapture,
    config::desktop_config,
    effect_executor,
    host::DesktopHostContext,
    input::{route_input, InputContext, InputEvent},
    model::{DesktopState, InteractionState, WindowRect},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Last measured desktop viewport.
    pub viewport: RwSignal<WindowRect>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Window-level listeners installed while a move or resize session is active.
    pub pointer_capture: StoredValue<Option<PointerCapture>>,
    /// Pending dock auto-hide timer.
    pub dock_hide_timer: StoredValue<Option<TimeoutHandle>>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Routes a UI event through the input table and dispatches every produced action.
    ///
    /// Returns `true` when at least one rule matched.
    pub fn dispatch_input(&self, event: InputEvent) -> bool {
        let interaction = self.interaction.get_untracked();
        let actions = route_input(
            &event,
            &InputContext {
                interaction: &interaction,
                viewport: self.viewport.get_untracked(),
            },
        );
        let handled = !actions.is_empty();
        for action in actions {
            self.dispatch_action(action);
        }
        handled
    }

    /// Re-measures the viewport from the host.
    pub fn refresh_viewport(&self) {
        let viewport = self.host.get_value().viewport_rect();
        if viewport != self.viewport.get_untracked() {
            self.viewport.set(viewport);
        }
    }
}

fn install_runtime_orchestration(runtime: DesktopRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_session_boot(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and starts the session lookup.
pub fn DesktopProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let state = create_rw_signal(DesktopState::new(desktop_config()));
    let interaction = create_rw_signal(InteractionState::default());
    let viewport = create_rw_signal(host.get_value().viewport_rect());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let pointer_capture = store_value(None::<PointerCapture>);
    let dock_hide_timer = store_value(None::<TimeoutHandle>);

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        viewport,
        effects,
        dispatch,
        pointer_capture,
        dock_hide_timer,
    };

    provide_context(runtime);

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
