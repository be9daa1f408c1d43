//! In-process `ProfileStore` implementation.

use crate::profile::Profile;
use crate::store::{ProfileStore, StoreCall};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A `ProfileStore` held entirely in process memory. Used by the test
/// suites and by embedders that manage durability themselves.
#[derive(Default)]
pub struct MemoryProfileStore {
    accounts: Mutex<BTreeMap<String, Profile>>,
    current_account: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get_accounts(&self) -> StoreCall<BTreeMap<String, Profile>> {
        let accounts = self.accounts.lock().unwrap().clone();
        Box::pin(async move { Ok(accounts) })
    }

    fn set_accounts(&self, accounts: BTreeMap<String, Profile>) -> StoreCall<()> {
        *self.accounts.lock().unwrap() = accounts;
        Box::pin(async { Ok(()) })
    }

    fn get_current_account(&self) -> StoreCall<Option<String>> {
        let current = self.current_account.lock().unwrap().clone();
        Box::pin(async move { Ok(current) })
    }

    fn set_current_account(&self, name: Option<String>) -> StoreCall<()> {
        *self.current_account.lock().unwrap() = name;
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    #[tokio::test]
    async fn save_and_overwrite() {
        let store = MemoryProfileStore::new();
        assert!(store.get_accounts().await.unwrap().is_empty());
        assert_eq!(store.get_current_account().await.unwrap(), None);

        let mut accounts = BTreeMap::new();
        accounts.insert(
            "work".to_string(),
            Profile::new("work", Vec::new(), BTreeMap::new(), BTreeMap::new()),
        );
        store.set_accounts(accounts).await.unwrap();
        store
            .set_current_account(Some("work".to_string()))
            .await
            .unwrap();

        assert_eq!(store.get_accounts().await.unwrap().len(), 1);
        assert_eq!(
            store.get_current_account().await.unwrap(),
            Some("work".to_string())
        );
    }
}
