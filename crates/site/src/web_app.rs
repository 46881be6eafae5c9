use desktop_runtime::{desktop_config, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Bureau" />
        <Meta name="description" content="Back-office desktop shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = build_host_services(&desktop_config().shell.role_endpoint);

    view! {
        <DesktopProvider host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}
