//! The profile synchronization engine.
//!
//! [`ProfileSwitcher`] ties the injected capabilities together:
//!
//! - capture ([`save_profile`](ProfileSwitcher::save_profile)) snapshots the
//!   live origin state into a named [`Profile`](crate::profile::Profile)
//! - apply ([`switch_profile`](ProfileSwitcher::switch_profile)) makes a
//!   stored profile the exclusive live state and signals a reload
//! - catalog operations manage the stored profiles and can wipe live state
//!   without installing a replacement
//!
//! One engine instance manages exactly one origin. User actions are
//! independent suspendable tasks; the engine enforces ordering only within
//! a single action (notably: a switch's cookie wipe completes before its
//! install begins), never across concurrently triggered actions.

mod apply;
mod capture;
mod catalog;

pub use catalog::{ProfileListing, ProfileUsage, StorageUsage};

use crate::base::error::SwitchError;
use crate::base::origin::Origin;
use crate::host::{ActiveTab, BrowserStateAccess};
use crate::store::ProfileStore;
use futures::future::try_join_all;
use std::sync::Arc;

/// Capture / apply / catalog engine for one origin.
pub struct ProfileSwitcher {
    origin: Origin,
    host: Arc<dyn BrowserStateAccess>,
    store: Arc<dyn ProfileStore>,
}

impl ProfileSwitcher {
    pub fn new(
        origin: Origin,
        host: Arc<dyn BrowserStateAccess>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            origin,
            host,
            store,
        }
    }

    /// The origin this engine manages.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Resolves the active tab and enforces the origin precondition.
    /// Nothing is read from or written to the origin before this passes.
    pub(crate) async fn guarded_tab(&self) -> Result<ActiveTab, SwitchError> {
        let tab = self.host.active_tab().await?;
        if !self.origin.matches(&tab.url) {
            return Err(SwitchError::wrong_origin(self.origin.base_url(), &tab.url));
        }
        Ok(tab)
    }

    /// Removes every cookie currently scoped to the origin. Removals are
    /// issued concurrently and all awaited; the returned count is how many
    /// cookies were enumerated for removal.
    pub(crate) async fn wipe_cookies(&self) -> Result<usize, SwitchError> {
        let existing = self
            .host
            .list_cookies(self.origin.host().to_string())
            .await?;
        let count = existing.len();

        try_join_all(existing.into_iter().map(|cookie| {
            let url = self.origin.cookie_url(&cookie.path);
            self.host.remove_cookie(url, cookie.name)
        }))
        .await?;

        tracing::debug!(origin = %self.origin, removed = count, "cookie wipe complete");
        Ok(count)
    }
}
