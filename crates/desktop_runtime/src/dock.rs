//! Dock entries, click semantics, and auto-hide state.
//!
//! The dock hides only while a visible window is tiled full-screen and the pointer is over neither
//! the dock nor the bottom hotzone. Leaving either region schedules a delayed re-check in the host;
//! entering one shows the dock immediately and cancels that re-check.

use crate::{
    apps::AppDescriptor,
    model::{AppId, DesktopState, DockEntry, DockRegion, DockState},
    z_order,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a click on a dock entry does, derived from the window's current state.
pub enum DockActivation {
    /// Visible and front-most: hide it.
    Minimize,
    /// Visible but covered: raise it.
    Raise,
    /// Hidden: show and raise it.
    Restore,
    /// No window yet: open one.
    Open,
}

pub fn dock_activation(state: &DesktopState, app_id: &AppId) -> DockActivation {
    match state.window(app_id) {
        None => DockActivation::Open,
        Some(window) if !window.is_visible() => DockActivation::Restore,
        Some(_) if z_order::is_front_most(state, app_id) => DockActivation::Minimize,
        Some(_) => DockActivation::Raise,
    }
}

/// Adds a dock entry for a newly opened window. Returns `false` if one already exists.
pub fn ensure_dock_entry(dock: &mut DockState, descriptor: &AppDescriptor) -> bool {
    if dock.entry(&descriptor.id).is_some() {
        return false;
    }
    dock.entries.push(DockEntry {
        app_id: descriptor.id.clone(),
        title: descriptor.title.clone(),
        icon: descriptor.icon.clone(),
        minimized: false,
    });
    true
}

pub fn remove_dock_entry(dock: &mut DockState, app_id: &AppId) -> bool {
    let before = dock.entries.len();
    dock.entries.retain(|entry| &entry.app_id != app_id);
    dock.entries.len() != before
}

/// Mirrors window visibility onto the entries' minimized markers.
pub fn sync_dock_markers(state: &mut DesktopState) {
    let windows = &state.windows;
    for entry in &mut state.dock.entries {
        entry.minimized = windows
            .iter()
            .find(|window| window.app_id == entry.app_id)
            .is_some_and(|window| !window.is_visible());
    }
}

pub fn should_hide_dock(any_fullscreen: bool, over_dock: bool, over_hotzone: bool) -> bool {
    any_fullscreen && !over_dock && !over_hotzone
}

/// Recomputes dock visibility after a window change. Returns whether it flipped.
pub fn sync_dock_visibility(state: &mut DesktopState) -> bool {
    let hidden = should_hide_dock(
        state.visibility().any_fullscreen,
        state.dock.pointer_over_dock,
        state.dock.pointer_over_hotzone,
    );
    let changed = state.dock.hidden != hidden;
    state.dock.hidden = hidden;
    changed
}

/// Pointer entered a region: show the dock. Returns whether a pending hide was cancelled.
pub fn pointer_entered(dock: &mut DockState, region: DockRegion) -> bool {
    match region {
        DockRegion::Dock => dock.pointer_over_dock = true,
        DockRegion::Hotzone => dock.pointer_over_hotzone = true,
    }
    dock.hidden = false;
    std::mem::replace(&mut dock.hide_pending, false)
}

/// Pointer left a region: a hide re-check is now pending.
pub fn pointer_left(dock: &mut DockState, region: DockRegion) {
    match region {
        DockRegion::Dock => dock.pointer_over_dock = false,
        DockRegion::Hotzone => dock.pointer_over_hotzone = false,
    }
    dock.hide_pending = true;
}

/// Delayed re-check after the pointer left. Only ever hides; showing happens on entry.
pub fn hide_timer_elapsed(state: &mut DesktopState) -> bool {
    if !state.dock.hide_pending {
        return false;
    }
    state.dock.hide_pending = false;
    let hide = should_hide_dock(
        state.visibility().any_fullscreen,
        state.dock.pointer_over_dock,
        state.dock.pointer_over_hotzone,
    );
    if hide && !state.dock.hidden {
        state.dock.hidden = true;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{LayoutMode, Visibility, WindowRect, WindowState},
        z_order::bring_to_front,
    };

    fn state_with(ids: &[&str]) -> DesktopState {
        let mut state = DesktopState::default();
        let config = state.config;
        for id in ids {
            let descriptor = config.app(id).expect("catalog app");
            state.windows.push(WindowState::new(
                descriptor,
                descriptor.url.clone(),
                WindowRect { x: 0, y: 0, w: 980, h: 640 },
            ));
            ensure_dock_entry(&mut state.dock, descriptor);
            bring_to_front(&mut state, &AppId::from(*id));
        }
        state
    }

    #[test]
    fn hide_rule_truth_table() {
        assert!(should_hide_dock(true, false, false));
        assert!(!should_hide_dock(true, true, false));
        assert!(!should_hide_dock(true, false, true));
        assert!(!should_hide_dock(false, false, false));
    }

    #[test]
    fn activation_follows_window_state() {
        let mut state = state_with(&["products", "clients"]);
        assert_eq!(dock_activation(&state, &AppId::from("clients")), DockActivation::Minimize);
        assert_eq!(dock_activation(&state, &AppId::from("products")), DockActivation::Raise);
        assert_eq!(dock_activation(&state, &AppId::from("invoices")), DockActivation::Open);
        state.windows[0].visibility = Visibility::Hidden;
        assert_eq!(dock_activation(&state, &AppId::from("products")), DockActivation::Restore);
    }

    #[test]
    fn entries_are_unique_and_markers_follow_visibility() {
        let mut state = state_with(&["products"]);
        let config = state.config;
        assert!(!ensure_dock_entry(&mut state.dock, config.app("products").expect("app")));
        state.windows[0].visibility = Visibility::Hidden;
        sync_dock_markers(&mut state);
        assert!(state.dock.entries[0].minimized);
        assert!(remove_dock_entry(&mut state.dock, &AppId::from("products")));
        assert!(state.dock.entries.is_empty());
    }

    #[test]
    fn fullscreen_hides_until_pointer_enters() {
        let mut state = state_with(&["products"]);
        state.windows[0].layout = LayoutMode::TiledFull;
        state.windows[0].rect = None;
        assert!(sync_dock_visibility(&mut state));
        assert!(state.dock.hidden);

        assert!(!pointer_entered(&mut state.dock, DockRegion::Hotzone));
        assert!(!state.dock.hidden);

        pointer_left(&mut state.dock, DockRegion::Hotzone);
        assert!(state.dock.hide_pending);
        assert!(hide_timer_elapsed(&mut state));
        assert!(state.dock.hidden);
    }

    #[test]
    fn reentry_cancels_pending_hide() {
        let mut state = state_with(&["products"]);
        pointer_left(&mut state.dock, DockRegion::Dock);
        assert!(pointer_entered(&mut state.dock, DockRegion::Dock));
        assert!(!hide_timer_elapsed(&mut state));
        assert!(!state.dock.hidden);
    }
}
