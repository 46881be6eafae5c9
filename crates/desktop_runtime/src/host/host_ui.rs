use std::time::Duration;

use leptos::{logging, set_timeout_with_handle};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    input::InputEvent, launchpad::LAUNCHPAD_SEARCH_DOM_ID, model::WindowRect,
    runtime_context::DesktopRuntimeContext,
};

/// Clears any pending dock-hide timer and starts a new one.
pub(super) fn schedule_dock_hide(runtime: DesktopRuntimeContext, delay_ms: u64) {
    cancel_dock_hide(runtime);
    let slot = runtime.dock_hide_timer;
    match set_timeout_with_handle(
        move || {
            slot.set_value(None);
            runtime.dispatch_input(InputEvent::HideTimerElapsed);
        },
        Duration::from_millis(delay_ms),
    ) {
        Ok(handle) => slot.set_value(Some(handle)),
        Err(err) => logging::warn!("dock hide timer could not be scheduled: {err:?}"),
    }
}

pub(super) fn cancel_dock_hide(runtime: DesktopRuntimeContext) {
    runtime.dock_hide_timer.update_value(|slot| {
        if let Some(handle) = slot.take() {
            handle.clear();
        }
    });
}

pub(super) fn focus_launchpad_search() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(LAUNCHPAD_SEARCH_DOM_ID) else {
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = LAUNCHPAD_SEARCH_DOM_ID;
}

pub(super) fn viewport_rect(fallback: WindowRect) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.w);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.h);

            return WindowRect {
                x: 0,
                y: 0,
                w: width,
                h: height,
            };
        }
    }

    fallback
}
