//! Durable profile persistence.
//!
//! The engine keeps two pieces of process-wide state in a host-provided
//! durable key-value store: the `accounts` map (profile name → profile) and
//! the advisory `currentAccount` name. The [`ProfileStore`] trait exposes
//! one get/set pair per key; the store is assumed crash-consistent but not
//! transactional across the two keys, and the engine deliberately does not
//! paper over that.

pub mod json;
pub mod memory;

use crate::base::error::SwitchError;
use crate::profile::Profile;
use std::collections::BTreeMap;
use std::{future::Future, pin::Pin};

/// Alias for the `Future` type returned by store calls.
pub type StoreCall<T> = Pin<Box<dyn Future<Output = Result<T, SwitchError>> + Send>>;

/// Persistent, asynchronous storage for profiles and the current-account
/// marker.
///
/// `current_account`, when set, names the profile most recently made live.
/// It is advisory: nothing re-verifies that the live browser state still
/// matches it.
pub trait ProfileStore: Send + Sync {
    /// All saved profiles, keyed by name.
    fn get_accounts(&self) -> StoreCall<BTreeMap<String, Profile>>;

    /// Replaces the whole accounts map.
    fn set_accounts(&self, accounts: BTreeMap<String, Profile>) -> StoreCall<()>;

    /// The advisory current-account name.
    fn get_current_account(&self) -> StoreCall<Option<String>>;

    /// Sets or clears the advisory current-account name.
    fn set_current_account(&self, name: Option<String>) -> StoreCall<()>;
}

pub use json::JsonProfileStore;
pub use memory::MemoryProfileStore;
