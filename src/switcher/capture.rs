//! Capture: snapshot the live origin state into a profile.

use crate::base::error::SwitchError;
use crate::profile::Profile;
use crate::switcher::ProfileSwitcher;

impl ProfileSwitcher {
    /// Snapshots the origin's live cookies and both storage areas into a
    /// [`Profile`] named `name`, without touching the store.
    ///
    /// Read-only with respect to browser state. Fails with
    /// [`SwitchError::WrongOrigin`] before any host read when the active
    /// tab is elsewhere. Reserved analytics keys are captured as empty
    /// strings. Cookie enumeration order is whatever the host reports and
    /// carries no meaning.
    pub async fn capture_profile(&self, name: &str) -> Result<Profile, SwitchError> {
        let tab = self.guarded_tab().await?;

        let cookies = self
            .host
            .list_cookies(self.origin.host().to_string())
            .await?;
        let storage = self.host.read_storage(tab.id).await?;

        tracing::debug!(
            profile = %name,
            cookies = cookies.len(),
            local_keys = storage.local.len(),
            session_keys = storage.session.len(),
            "captured origin state"
        );

        // Profile::new applies the reserved-key redaction.
        Ok(Profile::new(name, cookies, storage.local, storage.session))
    }

    /// Captures the live state and saves it as profile `name`, overwriting
    /// any existing profile with that name, then marks it current.
    ///
    /// The accounts map and the current-account marker are two separate
    /// store writes; the store is not assumed transactional across them.
    pub async fn save_profile(&self, name: &str) -> Result<Profile, SwitchError> {
        let profile = self.capture_profile(name).await?;

        let mut accounts = self.store.get_accounts().await?;
        accounts.insert(name.to_string(), profile.clone());
        self.store.set_accounts(accounts).await?;
        self.store
            .set_current_account(Some(name.to_string()))
            .await?;

        tracing::info!(profile = %name, "profile saved");
        Ok(profile)
    }
}
