//! Build-time desktop configuration: shell tunables, permission tiers, and the app catalog.
//!
//! `build.rs` validates `desktop.toml` and embeds it as JSON; this module parses the payload once
//! and hands out a `'static` reference to every consumer.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{
    apps::AppDescriptor,
    model::{AppId, WindowRect},
};

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shell-level settings that are not tied to a single window.
pub struct ShellConfig {
    /// Same-origin endpoint that reports the signed-in user's role.
    pub role_endpoint: String,
    /// Query fragment appended to every embedded application URL.
    pub embed_query: String,
    /// Viewport width used when the browser window cannot be measured.
    pub fallback_viewport_width: i32,
    /// Viewport height used when the browser window cannot be measured.
    pub fallback_viewport_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Window geometry constants: cascade placement, initial sizing, and resize minimums.
pub struct WindowMetrics {
    /// Stacking counter value before the first window is raised.
    pub initial_z_index: u32,
    /// Offset of the first cascaded window from the viewport origin.
    pub cascade_origin: i32,
    /// Horizontal cascade increment per already-open window.
    pub cascade_step_x: i32,
    /// Vertical cascade increment per already-open window.
    pub cascade_step_y: i32,
    /// Horizontal cascade offset wraps at this value.
    pub cascade_wrap_x: i32,
    /// Vertical cascade offset wraps at this value.
    pub cascade_wrap_y: i32,
    /// Share of the viewport a new window tries to cover.
    pub viewport_fraction: f64,
    /// Lower bound for the initial window width.
    pub min_width: i32,
    /// Upper bound for the initial window width.
    pub max_width: i32,
    /// Lower bound for the initial window height.
    pub min_height: i32,
    /// Upper bound for the initial window height.
    pub max_height: i32,
    /// Smallest width reachable through the resize handle.
    pub resize_min_width: i32,
    /// Smallest height reachable through the resize handle.
    pub resize_min_height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Dock geometry and auto-hide timing.
pub struct DockConfig {
    /// Vertical space kept free for the dock when dragging and tiling.
    pub reserve_px: i32,
    /// Delay between the pointer leaving the dock and the hide re-check.
    pub hide_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// App ids granted to the restricted tiers. `admin` always gets the whole catalog.
pub struct TierTables {
    /// Ids visible to managers.
    pub manager: Vec<AppId>,
    /// Ids visible to cashiers.
    pub cashier: Vec<AppId>,
    /// Ids visible to plain users and unrecognized roles.
    pub user: Vec<AppId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Complete static desktop configuration.
pub struct DesktopConfig {
    /// Config payload schema version.
    pub schema_version: u32,
    /// Shell settings.
    pub shell: ShellConfig,
    /// Window geometry constants.
    pub windows: WindowMetrics,
    /// Dock settings.
    pub dock: DockConfig,
    /// Permission tier tables.
    pub tiers: TierTables,
    /// Application catalog in presentation order.
    pub apps: Vec<AppDescriptor>,
}

impl DesktopConfig {
    /// Looks up a catalog entry by id.
    pub fn app(&self, app_id: &str) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.id.as_str() == app_id)
    }

    /// Viewport assumed when the browser window cannot be measured.
    pub fn fallback_viewport(&self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.shell.fallback_viewport_width,
            h: self.shell.fallback_viewport_height,
        }
    }
}

/// Returns the parsed build-time desktop configuration.
pub fn desktop_config() -> &'static DesktopConfig {
    static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        serde_json::from_str(DESKTOP_CONFIG_JSON)
            .expect("generated desktop config should parse")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_config_parses_with_full_catalog() {
        let config = desktop_config();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.apps.len(), 18);
        assert_eq!(config.apps[0].id.as_str(), "dashboard");
        assert_eq!(config.apps[17].id.as_str(), "guide");
        assert!(config.app("migration").is_some());
        assert!(config.app("unknown").is_none());
    }

    #[test]
    fn generated_config_carries_shell_constants() {
        let config = desktop_config();
        assert_eq!(config.shell.role_endpoint, "/api/auth/verify");
        assert_eq!(config.windows.initial_z_index, 10);
        assert_eq!(
            (config.windows.resize_min_width, config.windows.resize_min_height),
            (420, 300)
        );
        assert_eq!(config.dock, DockConfig { reserve_px: 80, hide_delay_ms: 160 });
        assert_eq!(
            config.fallback_viewport(),
            WindowRect { x: 0, y: 0, w: 1280, h: 800 }
        );
    }
}
