//! Apply: make a stored profile the exclusive live state.

use crate::base::error::SwitchError;
use crate::cookies::SetCookieRequest;
use crate::host::StorageSnapshot;
use crate::profile::{redact_reserved_keys, Profile};
use crate::switcher::ProfileSwitcher;
use futures::future::try_join_all;

impl ProfileSwitcher {
    /// Switches the origin's live state to the stored profile `name`.
    ///
    /// Phases, in order: profile lookup, origin guard, cookie wipe, cookie
    /// install, storage replacement, current-account bookkeeping, reload
    /// signal. The wipe is fully awaited before any install is issued, so
    /// an old cookie can never collide with a new one that shares its name
    /// but differs in scope attributes. Within the wipe and install phases
    /// the individual host calls proceed concurrently.
    ///
    /// Not transactional: a host call rejected partway through aborts the
    /// remaining phases and leaves live state a hybrid of old and new, with
    /// no rollback. The current-account marker is only written after both
    /// mutation phases succeed, so a failed switch never claims to be live.
    /// No read-back verification is performed after the final write.
    pub async fn switch_profile(&self, name: &str) -> Result<(), SwitchError> {
        let accounts = self.store.get_accounts().await?;
        let profile = accounts
            .get(name)
            .cloned()
            .ok_or_else(|| SwitchError::missing_profile(name))?;

        let tab = self.guarded_tab().await?;

        let removed = self.wipe_cookies().await?;
        self.install_cookies(&profile).await?;
        self.replace_storage(tab.id, &profile).await?;

        self.store
            .set_current_account(Some(name.to_string()))
            .await?;
        self.host.reload_page(tab.id).await?;

        tracing::info!(
            profile = %name,
            removed,
            installed = profile.cookies.len(),
            "profile switch complete"
        );
        Ok(())
    }

    /// Installs every cookie of `profile`, re-applying the host-lock
    /// policy per record. Writes are issued concurrently and all awaited.
    async fn install_cookies(&self, profile: &Profile) -> Result<(), SwitchError> {
        try_join_all(profile.cookies.iter().map(|record| {
            self.host
                .set_cookie(SetCookieRequest::from_record(&self.origin, record))
        }))
        .await?;

        tracing::debug!(
            profile = %profile.name,
            installed = profile.cookies.len(),
            "cookie install complete"
        );
        Ok(())
    }

    /// Replaces both storage areas with the profile's contents. Redaction
    /// is re-applied on write, so a profile that predates the reserved-key
    /// list (or was edited by hand) still never replays analytics state.
    async fn replace_storage(&self, tab: crate::host::TabId, profile: &Profile) -> Result<(), SwitchError> {
        let mut snapshot = StorageSnapshot {
            local: profile.local_state.clone(),
            session: profile.session_state.clone(),
        };
        redact_reserved_keys(&mut snapshot.local);
        redact_reserved_keys(&mut snapshot.session);

        self.host.write_storage(tab, snapshot).await
    }
}
