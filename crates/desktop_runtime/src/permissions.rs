//! Role-based permission tiers and the catalog filtering they drive.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{apps::AppDescriptor, config::DesktopConfig, model::AppId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Permission tier resolved from the session role string.
pub enum PermissionTier {
    /// Full catalog.
    Admin,
    /// Everything except maintenance tools.
    Manager,
    /// Sales documents and products.
    Cashier,
    /// Same set as cashier. Also the tier before the session lookup completes.
    #[default]
    User,
    /// Unrecognized role string; granted the `user` set.
    Unknown,
}

impl PermissionTier {
    /// Resolves a raw role string (trimmed, ASCII case-insensitive).
    ///
    /// A missing or blank role resolves to [`PermissionTier::User`].
    pub fn resolve(role: Option<&str>) -> Self {
        let Some(role) = role.map(str::trim).filter(|role| !role.is_empty()) else {
            return Self::User;
        };
        match role.to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "manager" => Self::Manager,
            "cashier" => Self::Cashier,
            "user" => Self::User,
            _ => Self::Unknown,
        }
    }

    /// Stable token used in diagnostics and as the badge fallback.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Cashier => "cashier",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }

    /// Tier whose app set this tier actually receives.
    pub const fn effective(self) -> Self {
        match self {
            Self::Unknown => Self::User,
            tier => tier,
        }
    }
}

/// Returns the ids a tier may open.
pub fn allowed_ids(config: &DesktopConfig, tier: PermissionTier) -> BTreeSet<AppId> {
    let ids: &[AppId] = match tier.effective() {
        PermissionTier::Admin => {
            return config.apps.iter().map(|app| app.id.clone()).collect();
        }
        PermissionTier::Manager => &config.tiers.manager,
        PermissionTier::Cashier => &config.tiers.cashier,
        PermissionTier::User | PermissionTier::Unknown => &config.tiers.user,
    };
    ids.iter()
        .filter(|id| config.app(id.as_str()).is_some())
        .cloned()
        .collect()
}

/// Returns whether `tier` may open the app with `app_id`.
///
/// Ids missing from the catalog are never allowed.
pub fn is_allowed(config: &DesktopConfig, tier: PermissionTier, app_id: &str) -> bool {
    if config.app(app_id).is_none() {
        return false;
    }
    match tier.effective() {
        PermissionTier::Admin => true,
        PermissionTier::Manager => contains(&config.tiers.manager, app_id),
        PermissionTier::Cashier => contains(&config.tiers.cashier, app_id),
        PermissionTier::User | PermissionTier::Unknown => contains(&config.tiers.user, app_id),
    }
}

/// Returns the catalog entries `tier` may open, in catalog order.
pub fn visible_catalog(config: &DesktopConfig, tier: PermissionTier) -> Vec<&AppDescriptor> {
    config
        .apps
        .iter()
        .filter(|app| is_allowed(config, tier, app.id.as_str()))
        .collect()
}

fn contains(ids: &[AppId], app_id: &str) -> bool {
    ids.iter().any(|id| id.as_str() == app_id)
}
