use super::*;
use crate::launchpad::{launchpad_entries, LAUNCHPAD_SEARCH_DOM_ID};

#[component]
pub(super) fn Launchpad() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let visible = create_memo(move |_| state.with(|desktop| desktop.launchpad.visible));
    let query = create_memo(move |_| state.with(|desktop| desktop.launchpad.query.clone()));
    let entries = create_memo(move |_| {
        state.with(|desktop| {
            launchpad_entries(desktop.config, desktop.tier, &desktop.launchpad.query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div
            id="launchpad"
            class=move || if visible.get() { "launchpad" } else { "launchpad hidden" }
            aria-hidden=move || (!visible.get()).to_string()
        >
            <div class="launchpad-inner">
                <input
                    id=LAUNCHPAD_SEARCH_DOM_ID
                    class="launchpad-search"
                    type="search"
                    placeholder="Rechercher une application"
                    autocomplete="off"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetLaunchpadQuery {
                            query: event_target_value(&ev),
                        })
                    }
                />
                <div id="lpGrid" class="launchpad-grid">
                    <For each=move || entries.get() key=|app| app.id.clone() let:app>
                        {{
                            let app_id = store_value(app.id.clone());
                            view! {
                                <button
                                    class="app-icon"
                                    data-app=app.id.to_string()
                                    title=app.title.clone()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::LaunchApp {
                                            app_id: app_id.get_value(),
                                            viewport: runtime.viewport.get_untracked(),
                                        })
                                    }
                                >
                                    <div class="app-emoji" aria-hidden="true">{app.icon.clone()}</div>
                                    <div class="app-label">{app.title.clone()}</div>
                                </button>
                            }
                        }}
                    </For>
                </div>
                <Show when=move || entries.with(Vec::is_empty) fallback=|| ()>
                    <p class="launchpad-empty">"Aucune application"</p>
                </Show>
            </div>
        </div>
    }
}
