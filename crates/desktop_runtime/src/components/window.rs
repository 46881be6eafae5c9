use super::*;
use crate::model::{AppId, TileSide, WindowState};

fn window_class(window: &WindowState) -> String {
    let mut class = String::from("win");
    if !window.is_visible() {
        class.push_str(" hide");
    }
    if let Some(tile) = window.layout.css_class() {
        class.push(' ');
        class.push_str(tile);
    }
    class
}

fn window_style(window: &WindowState) -> String {
    match window.rect {
        Some(rect) => format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            rect.x, rect.y, rect.w, rect.h, window.z_index
        ),
        None => format!("z-index:{};", window.z_index),
    }
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let Some(initial) = runtime
        .state
        .with_untracked(|state| state.window(&app_id).cloned())
    else {
        return ().into_view();
    };

    let app_id = store_value(app_id);
    let window = create_memo(move |_| {
        runtime
            .state
            .with(|state| app_id.with_value(|id| state.window(id).cloned()))
    });

    let control = move |action: fn(AppId) -> DesktopAction| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(action(app_id.get_value()));
        }
    };
    let stop_pointer = |ev: web_sys::PointerEvent| ev.stop_propagation();
    let focus = move |_| {
        runtime.dispatch_input(InputEvent::WindowPointerDown {
            app_id: app_id.get_value(),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        let routed = runtime.dispatch_input(InputEvent::TitlebarPointerDown {
            app_id: app_id.get_value(),
            pointer: pointer_from_event(&ev),
            button: pointer_button(&ev),
        });
        if routed {
            ev.prevent_default();
            begin_pointer_capture(runtime);
        }
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        let routed = runtime.dispatch_input(InputEvent::ResizeHandlePointerDown {
            app_id: app_id.get_value(),
            pointer: pointer_from_event(&ev),
            button: pointer_button(&ev),
        });
        if routed {
            ev.prevent_default();
            begin_pointer_capture(runtime);
        }
    };

    // The frame URL is read once so state updates never reload the embedded page.
    view! {
        <section
            class=move || window.get().map(|win| window_class(&win)).unwrap_or_default()
            style=move || window.get().map(|win| window_style(&win)).unwrap_or_default()
            data-app=initial.app_id.to_string()
            role="dialog"
            aria-label=initial.title.clone()
            on:pointerdown=focus
        >
            <header class="win-header" on:pointerdown=begin_move>
                <div class="win-traffic">
                    <button
                        class="dot close"
                        title="Fermer"
                        aria-label="Close window"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::CloseWindow { app_id })
                    ></button>
                    <button
                        class="dot min"
                        title="Réduire"
                        aria-label="Minimize window"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::MinimizeWindow { app_id })
                    ></button>
                    <button
                        class="dot max"
                        title="Plein écran"
                        aria-label="Tile full screen"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::TileWindow {
                            app_id,
                            side: TileSide::Full,
                        })
                    ></button>
                </div>
                <div class="win-title">
                    <span class="win-icon" aria-hidden="true">{initial.icon.clone()}</span>
                    <span>{initial.title.clone()}</span>
                </div>
                <div class="win-actions">
                    <button
                        class="win-btn tile-left-btn"
                        title="Gauche"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::TileWindow {
                            app_id,
                            side: TileSide::Left,
                        })
                    >
                        "⟸"
                    </button>
                    <button
                        class="win-btn tile-right-btn"
                        title="Droite"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::TileWindow {
                            app_id,
                            side: TileSide::Right,
                        })
                    >
                        "⟹"
                    </button>
                    <button
                        class="win-btn tile-full-btn"
                        title="Plein écran"
                        on:pointerdown=stop_pointer
                        on:click=control(|app_id| DesktopAction::TileWindow {
                            app_id,
                            side: TileSide::Full,
                        })
                    >
                        "⤢"
                    </button>
                </div>
            </header>
            <div class="win-body">
                <iframe
                    src=initial.frame_url.clone()
                    title=initial.title.clone()
                    referrerpolicy="same-origin"
                ></iframe>
            </div>
            <div class="win-resize" aria-hidden="true" on:pointerdown=begin_resize></div>
        </section>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::desktop_config,
        model::{LayoutMode, Visibility, WindowRect},
    };

    fn products_window() -> WindowState {
        let descriptor = desktop_config().app("products").expect("products app");
        let mut window = WindowState::new(
            descriptor,
            "/products?embed=1".to_string(),
            WindowRect {
                x: 24,
                y: 40,
                w: 980,
                h: 640,
            },
        );
        window.z_index = 11;
        window
    }

    #[test]
    fn free_window_renders_geometry() {
        let window = products_window();
        assert_eq!(window_class(&window), "win");
        assert_eq!(
            window_style(&window),
            "left:24px;top:40px;width:980px;height:640px;z-index:11;"
        );
    }

    #[test]
    fn hidden_tiled_window_renders_classes_only() {
        let mut window = products_window();
        window.visibility = Visibility::Hidden;
        window.layout = LayoutMode::TiledRight;
        window.rect = None;
        assert_eq!(window_class(&window), "win hide tile-right");
        assert_eq!(window_style(&window), "z-index:11;");
    }
}
