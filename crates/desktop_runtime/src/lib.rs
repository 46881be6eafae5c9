pub mod apps;
pub mod components;
pub mod config;
pub mod dock;
mod effect_executor;
pub mod host;
pub mod input;
pub mod launchpad;
pub mod model;
pub mod permissions;
pub mod reducer;
mod runtime_context;
pub mod window_manager;
pub mod z_order;

pub use components::{DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{desktop_config, DesktopConfig};
pub use model::*;
pub use permissions::PermissionTier;
pub use reducer::{reduce_desktop, Arrangement, DesktopAction, RuntimeEffect};
