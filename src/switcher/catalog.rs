//! Catalog operations: delete, clear, wipe live state, listing, usage.

use crate::base::error::SwitchError;
use crate::switcher::ProfileSwitcher;
use std::collections::BTreeMap;

/// The saved profile names plus the advisory current-account marker, in
/// the shape the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListing {
    pub names: Vec<String>,
    pub current: Option<String>,
}

/// Serialized size of one saved profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUsage {
    pub name: String,
    pub kib: f64,
}

/// Serialized size of the whole store, for quota displays.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageUsage {
    pub total_kib: f64,
    pub profiles: Vec<ProfileUsage>,
}

impl ProfileSwitcher {
    /// Removes the profile `name` from the store. If it was the current
    /// account, the marker is cleared. Live browser state is untouched:
    /// the origin's cookies and storage remain whatever they were.
    pub async fn delete_profile(&self, name: &str) -> Result<(), SwitchError> {
        let mut accounts = self.store.get_accounts().await?;
        if accounts.remove(name).is_none() {
            return Err(SwitchError::missing_profile(name));
        }
        self.store.set_accounts(accounts).await?;

        if self.store.get_current_account().await?.as_deref() == Some(name) {
            self.store.set_current_account(None).await?;
        }

        tracing::info!(profile = %name, "profile deleted");
        Ok(())
    }

    /// Deletes every saved profile and clears the current-account marker.
    /// Live browser state is untouched.
    pub async fn clear_profiles(&self) -> Result<(), SwitchError> {
        self.store.set_accounts(BTreeMap::new()).await?;
        self.store.set_current_account(None).await?;
        tracing::info!("all profiles cleared");
        Ok(())
    }

    /// Removes all cookies currently scoped to the origin without
    /// installing any profile, clears the current-account marker, and
    /// signals a reload. The storage areas are left as-is. Used to fully
    /// log out without adopting another profile.
    pub async fn wipe_live_state(&self) -> Result<(), SwitchError> {
        let tab = self.guarded_tab().await?;

        let removed = self.wipe_cookies().await?;
        self.store.set_current_account(None).await?;
        self.host.reload_page(tab.id).await?;

        tracing::info!(removed, "live state wiped");
        Ok(())
    }

    /// The saved profile names and the current-account marker.
    pub async fn list_profiles(&self) -> Result<ProfileListing, SwitchError> {
        let accounts = self.store.get_accounts().await?;
        let current = self.store.get_current_account().await?;
        Ok(ProfileListing {
            names: accounts.into_keys().collect(),
            current,
        })
    }

    /// Serialized size of each saved profile and of the store as a whole.
    pub async fn storage_usage(&self) -> Result<StorageUsage, SwitchError> {
        let accounts = self.store.get_accounts().await?;
        let profiles: Vec<ProfileUsage> = accounts
            .iter()
            .map(|(name, profile)| ProfileUsage {
                name: name.clone(),
                kib: profile.size_kib(),
            })
            .collect();
        let total_kib = profiles.iter().map(|p| p.kib).sum();
        Ok(StorageUsage {
            total_kib,
            profiles,
        })
    }
}
