//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.
//!
//! [`reduce_desktop`] is the only writer of [`DesktopState`]. It never fails: redundant requests
//! and denied launches leave the state untouched, and anything the host must do (timers, focus,
//! diagnostics) comes back as a [`RuntimeEffect`].

use platform_host::SessionIdentity;

use crate::{
    dock::{self, DockActivation},
    launchpad,
    model::{
        AppId, DesktopState, DockRegion, InteractionState, PointerPosition, SessionProfile,
        TileSide, WindowRect,
    },
    permissions::{self, PermissionTier},
    window_manager, z_order,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Dock arrangement buttons. Both currently produce the same left/right split.
pub enum Arrangement {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Apply the identity reported by the session lookup.
    ApplySessionIdentity {
        /// Identity payload.
        identity: SessionIdentity,
    },
    /// The session lookup failed; stay on the restricted tier.
    SessionLookupFailed,
    /// Open (or re-show) an app window if the current tier allows it.
    LaunchApp {
        /// Raw catalog id.
        app_id: AppId,
        /// Viewport used for initial placement.
        viewport: WindowRect,
    },
    /// Close a window and drop its dock entry.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Hide a window, keeping its embedded page alive.
    MinimizeWindow {
        /// Window to hide.
        app_id: AppId,
    },
    /// Show and raise a hidden window.
    RestoreWindow {
        /// Window to show.
        app_id: AppId,
    },
    /// Raise a window unless it is already on top.
    FocusWindow {
        /// Window to raise.
        app_id: AppId,
    },
    /// Snap a window to a tile region.
    TileWindow {
        /// Window to tile.
        app_id: AppId,
        /// Target region.
        side: TileSide,
    },
    /// Tile the most recently opened windows side by side.
    ArrangeRecentWindows {
        /// Button that requested the arrangement.
        arrangement: Arrangement,
    },
    /// Un-hide every window.
    ShowAllWindows,
    /// Click on a dock entry.
    ActivateDockEntry {
        /// Entry clicked.
        app_id: AppId,
        /// Viewport used if the click opens a new window.
        viewport: WindowRect,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Viewport the window is constrained to.
        viewport: WindowRect,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Viewport the window is constrained to.
        viewport: WindowRect,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window from its corner handle.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Viewport used to resolve tiled geometry.
        viewport: WindowRect,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Flip launchpad visibility.
    ToggleLaunchpad,
    /// Force launchpad visibility.
    SetLaunchpadVisible {
        /// Whether the launchpad should be shown.
        visible: bool,
    },
    /// Replace the launchpad search text.
    SetLaunchpadQuery {
        /// New search text.
        query: String,
    },
    /// Pointer entered the dock or the hotzone.
    DockPointerEntered {
        /// Region entered.
        region: DockRegion,
    },
    /// Pointer left the dock or the hotzone.
    DockPointerLeft {
        /// Region left.
        region: DockRegion,
    },
    /// The delayed dock-hide re-check fired.
    DockHideTimerElapsed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// (Re)start the dock-hide timer.
    ScheduleDockHide {
        /// Delay before the re-check.
        delay_ms: u64,
    },
    /// Clear the pending dock-hide timer.
    CancelDockHide,
    /// Move keyboard focus into the launchpad search field.
    FocusLaunchpadSearch,
    /// A launch request was refused for the current tier.
    LaunchDenied {
        /// Requested id.
        app_id: AppId,
        /// Tier in effect at the time of the request.
        tier: PermissionTier,
    },
    /// The session lookup settled on a tier.
    SessionTierResolved {
        /// Resolved tier.
        tier: PermissionTier,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowChange {
    /// Some window's visibility (or the window set) may have changed.
    Visibility,
    /// Only layout or stacking changed.
    Layout,
}

/// Applies an action and returns the side effects the host should run.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();

    match action {
        DesktopAction::ApplySessionIdentity { identity } => {
            state.tier = PermissionTier::resolve(identity.role.as_deref());
            state.profile = Some(SessionProfile::from_identity(&identity));
            state.session_resolved = true;
            effects.push(RuntimeEffect::SessionTierResolved { tier: state.tier });
        }
        DesktopAction::SessionLookupFailed => {
            state.tier = PermissionTier::User;
            state.session_resolved = true;
            effects.push(RuntimeEffect::SessionTierResolved { tier: state.tier });
        }
        DesktopAction::LaunchApp { app_id, viewport } => {
            launch_app(state, &app_id, viewport, &mut effects);
        }
        DesktopAction::CloseWindow { app_id } => {
            if window_manager::close_window(state, &app_id) {
                dock::remove_dock_entry(&mut state.dock, &app_id);
                interaction.release_window(&app_id);
                after_window_change(state, WindowChange::Visibility, &mut effects);
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            if window_manager::minimize_window(state, &app_id) {
                interaction.release_window(&app_id);
                after_window_change(state, WindowChange::Visibility, &mut effects);
            }
        }
        DesktopAction::RestoreWindow { app_id } => {
            if window_manager::restore_window(state, &app_id) {
                after_window_change(state, WindowChange::Visibility, &mut effects);
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            z_order::focus_window(state, &app_id);
        }
        DesktopAction::TileWindow { app_id, side } => {
            if window_manager::tile_window(state, &app_id, side) {
                interaction.release_window(&app_id);
                after_window_change(state, WindowChange::Layout, &mut effects);
            }
        }
        DesktopAction::ArrangeRecentWindows { arrangement: _ } => {
            if window_manager::arrange_recent_windows(state) {
                *interaction = InteractionState::default();
                after_window_change(state, WindowChange::Layout, &mut effects);
            }
        }
        DesktopAction::ShowAllWindows => {
            window_manager::show_all_windows(state);
            launchpad::set_launchpad_visible(state, false);
            after_window_change(state, WindowChange::Visibility, &mut effects);
        }
        DesktopAction::ActivateDockEntry { app_id, viewport } => {
            match dock::dock_activation(state, &app_id) {
                DockActivation::Minimize => {
                    window_manager::minimize_window(state, &app_id);
                    interaction.release_window(&app_id);
                }
                DockActivation::Raise => {
                    z_order::bring_to_front(state, &app_id);
                }
                DockActivation::Restore => {
                    window_manager::restore_window(state, &app_id);
                }
                DockActivation::Open => {
                    launch_app(state, &app_id, viewport, &mut effects);
                    return effects;
                }
            }
            after_window_change(state, WindowChange::Visibility, &mut effects);
        }
        DesktopAction::BeginMove {
            app_id,
            pointer,
            viewport,
        } => {
            if window_manager::begin_move(state, interaction, &app_id, pointer, viewport) {
                z_order::focus_window(state, &app_id);
                after_window_change(state, WindowChange::Layout, &mut effects);
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            window_manager::update_move(state, interaction, pointer, viewport);
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            app_id,
            pointer,
            viewport,
        } => {
            if window_manager::begin_resize(state, interaction, &app_id, pointer, viewport) {
                z_order::focus_window(state, &app_id);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            let was_tiled = interaction
                .resizing
                .as_ref()
                .and_then(|session| state.window(&session.app_id))
                .is_some_and(|window| window.layout.is_tiled());
            if window_manager::update_resize(state, interaction, pointer) && was_tiled {
                after_window_change(state, WindowChange::Layout, &mut effects);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleLaunchpad => {
            if launchpad::toggle_launchpad(state) {
                effects.push(RuntimeEffect::FocusLaunchpadSearch);
            }
        }
        DesktopAction::SetLaunchpadVisible { visible } => {
            if launchpad::set_launchpad_visible(state, visible) {
                effects.push(RuntimeEffect::FocusLaunchpadSearch);
            }
        }
        DesktopAction::SetLaunchpadQuery { query } => {
            state.launchpad.query = query;
        }
        DesktopAction::DockPointerEntered { region } => {
            if dock::pointer_entered(&mut state.dock, region) {
                effects.push(RuntimeEffect::CancelDockHide);
            }
        }
        DesktopAction::DockPointerLeft { region } => {
            dock::pointer_left(&mut state.dock, region);
            effects.push(RuntimeEffect::ScheduleDockHide {
                delay_ms: state.config.dock.hide_delay_ms,
            });
        }
        DesktopAction::DockHideTimerElapsed => {
            dock::hide_timer_elapsed(state);
        }
    }

    effects
}

fn launch_app(
    state: &mut DesktopState,
    app_id: &AppId,
    viewport: WindowRect,
    effects: &mut Vec<RuntimeEffect>,
) {
    let config = state.config;
    let descriptor = config
        .app(app_id.as_str())
        .filter(|_| permissions::is_allowed(config, state.tier, app_id.as_str()));
    let Some(descriptor) = descriptor else {
        effects.push(RuntimeEffect::LaunchDenied {
            app_id: app_id.clone(),
            tier: state.tier,
        });
        return;
    };

    window_manager::open_window(state, descriptor, viewport);
    dock::ensure_dock_entry(&mut state.dock, descriptor);
    after_window_change(state, WindowChange::Visibility, effects);
}

/// Keeps dock markers, dock visibility, and (for visibility changes) the launchpad in sync.
fn after_window_change(
    state: &mut DesktopState,
    change: WindowChange,
    effects: &mut Vec<RuntimeEffect>,
) {
    dock::sync_dock_markers(state);
    dock::sync_dock_visibility(state);
    if change == WindowChange::Visibility && launchpad::sync_launchpad_visibility(state) {
        effects.push(RuntimeEffect::FocusLaunchpadSearch);
    }
}
