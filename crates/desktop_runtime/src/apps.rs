//! Application catalog entries and embedded-frame URL construction.

use serde::{Deserialize, Serialize};

use crate::model::AppId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Catalog entry for an embeddable back-office page.
pub struct AppDescriptor {
    /// Stable application id.
    pub id: AppId,
    /// Human-readable title shown in the launchpad, dock, and window header.
    pub title: String,
    /// Emoji glyph used as the app icon.
    pub icon: String,
    /// Same-origin page URL.
    pub url: String,
}

impl AppDescriptor {
    /// Returns the page URL with the embed query appended.
    ///
    /// Uses `&` when the URL already carries a query string.
    pub fn embedded_url(&self, embed_query: &str) -> String {
        if embed_query.is_empty() {
            return self.url.clone();
        }
        let separator = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{separator}{embed_query}", self.url)
    }
}
