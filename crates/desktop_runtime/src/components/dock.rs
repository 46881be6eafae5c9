use super::*;
use crate::{
    model::{DockEntry, DockRegion},
    reducer::Arrangement,
};

#[component]
fn DockButton(entry: DockEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let app_id = store_value(entry.app_id.clone());
    let minimized = create_memo(move |_| {
        runtime.state.with(|state| {
            app_id.with_value(|id| state.dock.entry(id).is_some_and(|entry| entry.minimized))
        })
    });

    view! {
        <button
            class=move || if minimized.get() { "dock-item minimized" } else { "dock-item" }
            title=entry.title.clone()
            data-app=entry.app_id.to_string()
            on:click=move |_| {
                runtime.dispatch_action(DesktopAction::ActivateDockEntry {
                    app_id: app_id.get_value(),
                    viewport: runtime.viewport.get_untracked(),
                })
            }
        >
            <span class="dock-icon" aria-hidden="true">{entry.icon.clone()}</span>
            <span class="dock-dot" aria-hidden="true"></span>
        </button>
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let entries = create_memo(move |_| state.with(|desktop| desktop.dock.entries.clone()));
    let hidden = create_memo(move |_| state.with(|desktop| desktop.dock.hidden));

    let enter = move |region: DockRegion| {
        move |_: web_sys::PointerEvent| {
            runtime.dispatch_input(InputEvent::RegionEnter(region));
        }
    };
    let leave = move |region: DockRegion| {
        move |_: web_sys::PointerEvent| {
            runtime.dispatch_input(InputEvent::RegionLeave(region));
        }
    };
    let arrange = move |arrangement: Arrangement| {
        move |ev: web_sys::MouseEvent| {
            stop_mouse_event(&ev);
            runtime.dispatch_action(DesktopAction::ArrangeRecentWindows { arrangement });
        }
    };

    view! {
        <div
            id="hotzone"
            class="dock-hotzone"
            aria-hidden="true"
            on:pointerenter=enter(DockRegion::Hotzone)
            on:pointerleave=leave(DockRegion::Hotzone)
        ></div>
        <nav
            id="dock"
            class=move || if hidden.get() { "dock hidden" } else { "dock" }
            aria-label="Dock"
            on:pointerenter=enter(DockRegion::Dock)
            on:pointerleave=leave(DockRegion::Dock)
        >
            <button
                id="showLaunchpad"
                class="dock-item dock-launchpad"
                title="Launchpad"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLaunchpad)
            >
                "🚀"
            </button>
            <div id="dockApps" class="dock-apps">
                <For each=move || entries.get() key=|entry| entry.app_id.clone() let:entry>
                    <DockButton entry />
                </For>
            </div>
            <div class="dock-separator" aria-hidden="true"></div>
            <button
                id="tileH"
                class="dock-item dock-tool"
                title="Mosaïque horizontale"
                on:click=arrange(Arrangement::Horizontal)
            >
                "⬌"
            </button>
            <button
                id="tileV"
                class="dock-item dock-tool"
                title="Mosaïque verticale"
                on:click=arrange(Arrangement::Vertical)
            >
                "⬍"
            </button>
            <button
                id="showAll"
                class="dock-item dock-tool"
                title="Tout afficher"
                on:click=move |_| runtime.dispatch_action(DesktopAction::ShowAllWindows)
            >
                "▦"
            </button>
        </nav>
    }
}
