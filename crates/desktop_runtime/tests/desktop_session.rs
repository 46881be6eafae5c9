use desktop_runtime::{
    desktop_config,
    launchpad::launchpad_entries,
    permissions::allowed_ids,
    reduce_desktop,
    window_manager::resize_dimensions,
    AppId, DesktopAction, DesktopConfig, DesktopState, DockRegion, InteractionState,
    LayoutMode, PermissionTier, PointerPosition, RuntimeEffect, TileSide, WindowRect,
};
use platform_host::SessionIdentity;
use pretty_assertions::assert_eq;

const VIEWPORT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    w: 1440,
    h: 900,
};

struct Session {
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn with_config(config: &'static DesktopConfig, role: &str) -> Self {
        let mut session = Self {
            state: DesktopState::new(config),
            interaction: InteractionState::default(),
        };
        session.apply(DesktopAction::ApplySessionIdentity {
            identity: SessionIdentity::with_role(role),
        });
        session
    }

    fn new(role: &str) -> Self {
        Self::with_config(desktop_config(), role)
    }

    fn apply(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, &mut self.interaction, action)
    }

    fn open(&mut self, id: &str) -> Vec<RuntimeEffect> {
        self.apply(DesktopAction::LaunchApp {
            app_id: AppId::from(id),
            viewport: VIEWPORT,
        })
    }

    fn z(&self, id: &str) -> u32 {
        self.state.window(&AppId::from(id)).expect("open window").z_index
    }

    fn assert_launchpad_tracks_windows(&self) {
        assert_eq!(
            self.state.launchpad.visible,
            !self.state.visibility().any_window_visible
        );
    }
}

fn four_app_config() -> &'static DesktopConfig {
    let mut config = desktop_config().clone();
    config.apps.retain(|app| {
        matches!(
            app.id.as_str(),
            "invoices" | "quotations" | "products" | "dashboard"
        )
    });
    Box::leak(Box::new(config))
}

#[test]
fn cashier_sees_sales_apps_and_cannot_launch_dashboard() {
    let config = four_app_config();
    let mut session = Session::with_config(config, "cashier");
    assert_eq!(session.state.tier, PermissionTier::Cashier);

    let mut shown: Vec<&str> = launchpad_entries(config, session.state.tier, "")
        .into_iter()
        .map(|app| app.id.as_str())
        .collect();
    shown.sort_unstable();
    assert_eq!(shown, vec!["invoices", "products", "quotations"]);

    let before = session.state.clone();
    let effects = session.open("dashboard");
    assert_eq!(session.state, before);
    assert_eq!(
        effects,
        vec![RuntimeEffect::LaunchDenied {
            app_id: AppId::from("dashboard"),
            tier: PermissionTier::Cashier,
        }]
    );
}

#[test]
fn dock_click_raises_covered_window() {
    let mut session = Session::new("admin");
    session.open("products");
    assert_eq!(session.z("products"), 11);
    session.open("clients");
    assert_eq!(session.z("clients"), 12);

    session.apply(DesktopAction::ActivateDockEntry {
        app_id: AppId::from("products"),
        viewport: VIEWPORT,
    });
    assert_eq!(session.z("products"), 13);
    assert!(session
        .state
        .window(&AppId::from("products"))
        .is_some_and(|window| window.is_visible()));
}

#[test]
fn side_by_side_tiles_keep_dock_shown() {
    let mut session = Session::new("manager");
    session.open("products");
    session.open("clients");
    session.apply(DesktopAction::TileWindow {
        app_id: AppId::from("products"),
        side: TileSide::Left,
    });
    session.apply(DesktopAction::TileWindow {
        app_id: AppId::from("clients"),
        side: TileSide::Right,
    });
    session.apply(DesktopAction::DockPointerLeft {
        region: DockRegion::Dock,
    });
    session.apply(DesktopAction::DockHideTimerElapsed);

    assert!(!session.state.visibility().any_fullscreen);
    assert!(!session.state.dock.hidden);
}

#[test]
fn fullscreen_dock_hide_is_cancelled_by_reentry() {
    let mut session = Session::new("admin");
    session.open("reports");
    session.apply(DesktopAction::TileWindow {
        app_id: AppId::from("reports"),
        side: TileSide::Full,
    });
    assert!(session.state.dock.hidden);

    session.apply(DesktopAction::DockPointerEntered {
        region: DockRegion::Hotzone,
    });
    assert!(!session.state.dock.hidden);
    let effects = session.apply(DesktopAction::DockPointerLeft {
        region: DockRegion::Hotzone,
    });
    assert_eq!(effects, vec![RuntimeEffect::ScheduleDockHide { delay_ms: 160 }]);
    let effects = session.apply(DesktopAction::DockPointerEntered {
        region: DockRegion::Dock,
    });
    assert_eq!(effects, vec![RuntimeEffect::CancelDockHide]);
    session.apply(DesktopAction::DockHideTimerElapsed);
    assert!(!session.state.dock.hidden);
}

#[test]
fn resize_never_drops_below_minimum() {
    let metrics = desktop_config().windows;
    for (start_w, start_h) in [(420, 300), (980, 640), (1280, 860)] {
        for delta in [-100_000, -5_000, -1, 0, 250] {
            let (w, h) = resize_dimensions(
                start_w,
                start_h,
                delta,
                delta,
                metrics.resize_min_width,
                metrics.resize_min_height,
            );
            assert!(w >= metrics.resize_min_width, "{start_w}+{delta}");
            assert!(h >= metrics.resize_min_height, "{start_h}+{delta}");
        }
    }
}

#[test]
fn unknown_role_gets_the_user_set() {
    let config = desktop_config();
    assert_eq!(
        allowed_ids(config, PermissionTier::resolve(Some("auditor"))),
        allowed_ids(config, PermissionTier::User)
    );

    let mut session = Session::new("auditor");
    assert_eq!(session.state.tier, PermissionTier::Unknown);
    session.open("invoices");
    session.open("bank");
    assert_eq!(session.state.windows.len(), 1);
}

#[test]
fn opening_twice_keeps_one_window_and_raises_it() {
    let mut session = Session::new("admin");
    session.open("products");
    session.open("clients");
    let highest = session.state.windows.iter().map(|w| w.z_index).max();

    session.open("products");
    let products: Vec<_> = session
        .state
        .windows
        .iter()
        .filter(|window| window.app_id.as_str() == "products")
        .collect();
    assert_eq!(products.len(), 1);
    assert!(Some(products[0].z_index) > highest);
}

#[test]
fn drag_detiles_before_first_move() {
    let mut session = Session::new("admin");
    session.open("products");
    session.apply(DesktopAction::TileWindow {
        app_id: AppId::from("products"),
        side: TileSide::Left,
    });
    session.apply(DesktopAction::BeginMove {
        app_id: AppId::from("products"),
        pointer: PointerPosition { x: 100, y: 10 },
        viewport: VIEWPORT,
    });

    let window = session.state.window(&AppId::from("products")).expect("window");
    assert_eq!(window.layout, LayoutMode::Free);
    assert_eq!(
        window.rect,
        Some(WindowRect {
            x: 0,
            y: 0,
            w: 720,
            h: 820,
        })
    );

    session.apply(DesktopAction::UpdateMove {
        pointer: PointerPosition { x: 300, y: 110 },
        viewport: VIEWPORT,
    });
    session.apply(DesktopAction::EndMove);
    let rect = session
        .state
        .window(&AppId::from("products"))
        .and_then(|window| window.rect)
        .expect("free rect");
    assert_eq!((rect.x, rect.y), (200, 0));
}

#[test]
fn launchpad_mirrors_window_visibility_after_each_operation() {
    let mut session = Session::new("admin");
    session.assert_launchpad_tracks_windows();

    session.open("products");
    session.assert_launchpad_tracks_windows();
    session.open("bank");
    session.assert_launchpad_tracks_windows();

    for id in ["products", "bank"] {
        session.apply(DesktopAction::MinimizeWindow {
            app_id: AppId::from(id),
        });
        session.assert_launchpad_tracks_windows();
    }

    session.apply(DesktopAction::RestoreWindow {
        app_id: AppId::from("bank"),
    });
    session.assert_launchpad_tracks_windows();

    for id in ["bank", "products"] {
        session.apply(DesktopAction::CloseWindow {
            app_id: AppId::from(id),
        });
        session.assert_launchpad_tracks_windows();
    }
    assert!(session.state.launchpad.visible);
}

#[test]
fn tiled_left_window_resizes_from_its_tile() {
    let mut session = Session::new("admin");
    session.open("products");
    let products = AppId::from("products");
    session.apply(DesktopAction::TileWindow {
        app_id: products.clone(),
        side: TileSide::Left,
    });
    session.apply(DesktopAction::BeginResize {
        app_id: products.clone(),
        pointer: PointerPosition { x: 700, y: 800 },
        viewport: VIEWPORT,
    });
    assert!(session.interaction.resizing.is_some());

    session.apply(DesktopAction::UpdateResize {
        pointer: PointerPosition { x: 500, y: 600 },
    });
    session.apply(DesktopAction::EndResize);

    let window = session.state.window(&products).expect("window");
    assert_eq!(window.layout, LayoutMode::Free);
    assert_eq!(
        window.rect,
        Some(WindowRect {
            x: 0,
            y: 0,
            w: 520,
            h: 620,
        })
    );
    assert!(!session.interaction.is_active());
}
