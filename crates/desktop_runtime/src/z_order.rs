//! Stacking order: a monotonically growing counter hands out z-indices.

use crate::model::{AppId, DesktopState, WindowState};

/// Raises a window above every other one, even if it is already on top.
///
/// Returns the new z-index, or `None` when no window has that id.
pub fn bring_to_front(state: &mut DesktopState, app_id: &AppId) -> Option<u32> {
    let next = state.z_top.saturating_add(1);
    let window = state
        .windows
        .iter_mut()
        .find(|window| &window.app_id == app_id)?;
    window.z_index = next;
    state.z_top = next;
    Some(next)
}

/// Raises a window unless it is already the front-most visible one.
pub fn focus_window(state: &mut DesktopState, app_id: &AppId) -> bool {
    if is_front_most(state, app_id) {
        return false;
    }
    bring_to_front(state, app_id).is_some()
}

/// Visible window with the highest z-index.
pub fn front_window(state: &DesktopState) -> Option<&WindowState> {
    state
        .windows
        .iter()
        .filter(|window| window.is_visible())
        .max_by_key(|window| window.z_index)
}

pub fn is_front_most(state: &DesktopState, app_id: &AppId) -> bool {
    front_window(state).is_some_and(|window| &window.app_id == app_id)
}
