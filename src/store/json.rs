//! JSON-file-backed `ProfileStore` implementation.
//!
//! Persists the whole store as one pretty-printed JSON document:
//! `{"accounts": {<name>: {cookies, localState, sessionState}}, "currentAccount": <name|null>}`.
//! Each set is a read-modify-write of the file, so the two keys stay
//! independently settable (and, matching the trait contract, not
//! transactional with respect to each other).

use crate::base::error::SwitchError;
use crate::profile::Profile;
use crate::store::{ProfileStore, StoreCall};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    accounts: BTreeMap<String, Profile>,
    #[serde(rename = "currentAccount", default)]
    current_account: Option<String>,
}

/// A `ProfileStore` persisted to a single JSON file.
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Uses `path` as the backing file. The file is created on first write;
    /// a missing file reads as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(path: &Path) -> Result<StoreFile, SwitchError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoreFile::default())
            }
            Err(e) => return Err(e.into()),
        };
        let mut file: StoreFile = serde_json::from_str(&raw)?;
        // Profile names live in the map keys, not the records.
        for (name, profile) in file.accounts.iter_mut() {
            profile.name = name.clone();
        }
        Ok(file)
    }

    async fn save(path: &Path, file: &StoreFile) -> Result<(), SwitchError> {
        let json = serde_json::to_string_pretty(file)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

impl ProfileStore for JsonProfileStore {
    fn get_accounts(&self) -> StoreCall<BTreeMap<String, Profile>> {
        let path = self.path.clone();
        Box::pin(async move { Ok(Self::load(&path).await?.accounts) })
    }

    fn set_accounts(&self, accounts: BTreeMap<String, Profile>) -> StoreCall<()> {
        let path = self.path.clone();
        Box::pin(async move {
            let mut file = Self::load(&path).await?;
            file.accounts = accounts;
            Self::save(&path, &file).await
        })
    }

    fn get_current_account(&self) -> StoreCall<Option<String>> {
        let path = self.path.clone();
        Box::pin(async move { Ok(Self::load(&path).await?.current_account) })
    }

    fn set_current_account(&self, name: Option<String>) -> StoreCall<()> {
        let path = self.path.clone();
        Box::pin(async move {
            let mut file = Self::load(&path).await?;
            file.current_account = name;
            Self::save(&path, &file).await
        })
    }
}
