//! Launchpad overlay: visibility rules and permission-filtered search.

use crate::{
    apps::AppDescriptor, config::DesktopConfig, model::DesktopState,
    permissions::{self, PermissionTier},
};

/// DOM id of the launchpad search field.
pub const LAUNCHPAD_SEARCH_DOM_ID: &str = "lpSearch";

/// Case-insensitive substring match on the title. An empty query matches everything.
pub fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Catalog entries `tier` may open whose title matches `query`, in catalog order.
pub fn launchpad_entries<'a>(
    config: &'a DesktopConfig,
    tier: PermissionTier,
    query: &str,
) -> Vec<&'a AppDescriptor> {
    permissions::visible_catalog(config, tier)
        .into_iter()
        .filter(|app| title_matches(&app.title, query))
        .collect()
}

/// Sets launchpad visibility. Returns `true` when it just became visible.
pub fn set_launchpad_visible(state: &mut DesktopState, visible: bool) -> bool {
    let opened = visible && !state.launchpad.visible;
    state.launchpad.visible = visible;
    opened
}

pub fn toggle_launchpad(state: &mut DesktopState) -> bool {
    let visible = !state.launchpad.visible;
    set_launchpad_visible(state, visible)
}

/// Shows the launchpad exactly when no window is visible.
pub fn sync_launchpad_visibility(state: &mut DesktopState) -> bool {
    let visible = !state.visibility().any_window_visible;
    set_launchpad_visible(state, visible)
}
