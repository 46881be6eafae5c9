use std::fmt;

use platform_host::SessionIdentity;
use serde::{Deserialize, Serialize};

use crate::{
    apps::AppDescriptor,
    config::{desktop_config, DesktopConfig},
    permissions::PermissionTier,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Catalog application id. At most one window exists per id.
pub struct AppId(pub String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Target region of a tile request. `Full` covers the viewport above the dock reserve.
pub enum TileSide {
    Left,
    Right,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Layout of a window. Tiled windows carry no free geometry.
pub enum LayoutMode {
    #[default]
    Free,
    TiledLeft,
    TiledRight,
    TiledFull,
}

impl From<TileSide> for LayoutMode {
    fn from(side: TileSide) -> Self {
        match side {
            TileSide::Left => Self::TiledLeft,
            TileSide::Right => Self::TiledRight,
            TileSide::Full => Self::TiledFull,
        }
    }
}

impl LayoutMode {
    pub fn is_tiled(self) -> bool {
        self != Self::Free
    }

    /// CSS class applied to the window element for this layout.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Free => None,
            Self::TiledLeft => Some("tile-left"),
            Self::TiledRight => Some("tile-right"),
            Self::TiledFull => Some("tile-full"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    /// Embedded page URL; fixed for the window's lifetime so the frame never reloads.
    pub frame_url: String,
    pub visibility: Visibility,
    pub layout: LayoutMode,
    /// Free geometry. `Some` exactly when `layout` is [`LayoutMode::Free`].
    pub rect: Option<WindowRect>,
    pub z_index: u32,
}

impl WindowState {
    pub fn new(descriptor: &AppDescriptor, frame_url: String, rect: WindowRect) -> Self {
        Self {
            app_id: descriptor.id.clone(),
            title: descriptor.title.clone(),
            icon: descriptor.icon.clone(),
            frame_url,
            visibility: Visibility::Shown,
            layout: LayoutMode::Free,
            rect: Some(rect),
            z_index: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_visible() && self.layout == LayoutMode::TiledFull
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockEntry {
    pub app_id: AppId,
    pub title: String,
    pub icon: String,
    /// Mirrors whether the owning window is hidden.
    pub minimized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Pointer-tracked regions that keep the dock revealed.
pub enum DockRegion {
    Dock,
    Hotzone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockState {
    pub entries: Vec<DockEntry>,
    pub hidden: bool,
    pub pointer_over_dock: bool,
    pub pointer_over_hotzone: bool,
    /// A delayed hide re-check is scheduled in the host.
    pub hide_pending: bool,
}

impl DockState {
    pub fn entry(&self, app_id: &AppId) -> Option<&DockEntry> {
        self.entries.iter().find(|entry| &entry.app_id == app_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchpadState {
    pub visible: bool,
    pub query: String,
}

impl Default for LaunchpadState {
    fn default() -> Self {
        Self {
            visible: true,
            query: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Labels shown in the user indicator once the session lookup succeeds.
pub struct SessionProfile {
    pub display_name: String,
    pub role_label: String,
}

impl SessionProfile {
    pub fn from_identity(identity: &SessionIdentity) -> Self {
        Self {
            display_name: identity.display_name(),
            role_label: identity.role_label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Aggregates derived from the window set, recomputed on demand.
pub struct DesktopVisibility {
    pub any_window_visible: bool,
    pub any_fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub config: &'static DesktopConfig,
    pub tier: PermissionTier,
    pub profile: Option<SessionProfile>,
    pub session_resolved: bool,
    /// Open windows in open order.
    pub windows: Vec<WindowState>,
    /// Last z-index handed out; only ever grows.
    pub z_top: u32,
    pub dock: DockState,
    pub launchpad: LaunchpadState,
}

impl DesktopState {
    pub fn new(config: &'static DesktopConfig) -> Self {
        Self {
            config,
            tier: PermissionTier::User,
            profile: None,
            session_resolved: false,
            windows: Vec::new(),
            z_top: config.windows.initial_z_index,
            dock: DockState::default(),
            launchpad: LaunchpadState::default(),
        }
    }

    pub fn window(&self, app_id: &AppId) -> Option<&WindowState> {
        self.windows.iter().find(|window| &window.app_id == app_id)
    }

    pub fn window_mut(&mut self, app_id: &AppId) -> Option<&mut WindowState> {
        self.windows
            .iter_mut()
            .find(|window| &window.app_id == app_id)
    }

    pub fn visibility(&self) -> DesktopVisibility {
        DesktopVisibility {
            any_window_visible: self.windows.iter().any(WindowState::is_visible),
            any_fullscreen: self.windows.iter().any(WindowState::is_fullscreen),
        }
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(desktop_config())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Other,
}

impl PointerButton {
    /// Maps a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        if button == 0 {
            Self::Primary
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    /// Pointer offset from the window origin at grab time.
    pub grab_offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    /// On-screen geometry at grab time, tiled or free.
    pub start_rect: WindowRect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient pointer-interaction state. At most one session is active.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.dragging.is_some() || self.resizing.is_some()
    }

    /// Drops any session targeting `app_id`.
    pub fn release_window(&mut self, app_id: &AppId) {
        if self
            .dragging
            .as_ref()
            .is_some_and(|session| &session.app_id == app_id)
        {
            self.dragging = None;
        }
        if self
            .resizing
            .as_ref()
            .is_some_and(|session| &session.app_id == app_id)
        {
            self.resizing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_state_starts_with_launchpad_open_and_initial_z() {
        let state = DesktopState::default();
        assert!(state.launchpad.visible);
        assert_eq!(state.z_top, 10);
        assert_eq!(state.tier, PermissionTier::User);
        assert!(!state.session_resolved);
        assert_eq!(state.visibility(), DesktopVisibility::default());
    }

    #[test]
    fn fullscreen_requires_visible_full_tile() {
        let config = desktop_config();
        let descriptor = config.app("products").expect("products app");
        let mut window = WindowState::new(
            descriptor,
            "/products?embed=1".to_string(),
            WindowRect { x: 0, y: 0, w: 980, h: 640 },
        );
        window.layout = LayoutMode::TiledFull;
        window.rect = None;
        assert!(window.is_fullscreen());
        window.visibility = Visibility::Hidden;
        assert!(!window.is_fullscreen());
    }

    #[test]
    fn pointer_button_maps_dom_values() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Other);
    }

    #[test]
    fn release_window_only_drops_matching_session() {
        let mut interaction = InteractionState {
            dragging: Some(DragSession {
                app_id: AppId::from("products"),
                grab_offset: PointerPosition::default(),
            }),
            resizing: None,
        };
        interaction.release_window(&AppId::from("clients"));
        assert!(interaction.is_active());
        interaction.release_window(&AppId::from("products"));
        assert!(!interaction.is_active());
    }
}
