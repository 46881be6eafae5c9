//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod launchpad;
mod window;

use leptos::{leptos_dom::helpers::WindowListenerHandle, *};

use self::{dock::Dock, launchpad::Launchpad, window::DesktopWindow};
use crate::{
    input::{InputEvent, KeyInput},
    model::{PointerButton, PointerPosition},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Window-level pointer listeners held while a move or resize session is active.
pub struct PointerCapture {
    moves: WindowListenerHandle,
    ups: WindowListenerHandle,
    cancels: WindowListenerHandle,
}

impl PointerCapture {
    fn remove(self) {
        self.moves.remove();
        self.ups.remove();
        self.cancels.remove();
    }
}

fn begin_pointer_capture(runtime: DesktopRuntimeContext) {
    release_pointer_capture(runtime);

    let moves = window_event_listener(ev::pointermove, move |ev| {
        runtime.dispatch_input(InputEvent::PointerMove {
            pointer: pointer_from_event(&ev),
        });
    });
    let ups = window_event_listener(ev::pointerup, move |_| end_pointer_capture(runtime));
    let cancels = window_event_listener(ev::pointercancel, move |_| end_pointer_capture(runtime));

    runtime.pointer_capture.set_value(Some(PointerCapture {
        moves,
        ups,
        cancels,
    }));
}

fn end_pointer_capture(runtime: DesktopRuntimeContext) {
    release_pointer_capture(runtime);
    runtime.dispatch_input(InputEvent::PointerUp);
}

fn release_pointer_capture(runtime: DesktopRuntimeContext) {
    runtime.pointer_capture.update_value(|slot| {
        if let Some(capture) = slot.take() {
            capture.remove();
        }
    });
}

fn pointer_from_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn pointer_button(ev: &web_sys::PointerEvent) -> PointerButton {
    PointerButton::from_dom(ev.button())
}

fn key_input_from_event(ev: &web_sys::KeyboardEvent) -> KeyInput {
    KeyInput {
        key: ev.key(),
        code: ev.code(),
        ctrl: ev.ctrl_key(),
        meta: ev.meta_key(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
fn SessionBadge() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let profile = create_memo(move |_| state.with(|desktop| desktop.profile.clone()));
    let tier = create_memo(move |_| state.with(|desktop| desktop.tier));
    let pending = create_memo(move |_| state.with(|desktop| !desktop.session_resolved));

    view! {
        <div
            class="top-right-actions"
            aria-live="polite"
            aria-busy=move || pending.get().to_string()
        >
            <span class="user-name">
                {move || {
                    profile
                        .get()
                        .map(|profile| profile.display_name)
                        .unwrap_or_else(|| "Utilisateur".to_string())
                }}
            </span>
            <span class="user-role-badge" data-tier=move || tier.get().token()>
                {move || {
                    profile
                        .get()
                        .map(|profile| profile.role_label)
                        .unwrap_or_else(|| tier.get().token().to_string())
                }}
            </span>
        </div>
    }
}

#[component]
/// Renders the desktop: user indicator, window layer, launchpad, and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() {
            return;
        }
        let input = key_input_from_event(&ev);
        let modified = input.ctrl || input.meta;
        if runtime.dispatch_input(InputEvent::KeyDown(input)) && modified {
            ev.prevent_default();
        }
    });
    on_cleanup(move || key_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| runtime.refresh_viewport());
    on_cleanup(move || resize_listener.remove());
    on_cleanup(move || release_pointer_capture(runtime));

    let interacting = create_memo(move |_| runtime.interaction.with(|ui| ui.is_active()));

    view! {
        <div
            id="desktop"
            class=move || {
                if interacting.get() {
                    "desktop interacting"
                } else {
                    "desktop"
                }
            }
        >
            <SessionBadge />
            <div id="windows" class="window-layer">
                <For
                    each=move || state.get().windows
                    key=|win| win.app_id.clone()
                    let:win
                >
                    <DesktopWindow app_id=win.app_id />
                </For>
            </div>
            <Launchpad />
            <Dock />
        </div>
    }
}
