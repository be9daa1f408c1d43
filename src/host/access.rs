//! The `BrowserStateAccess` capability trait.

use crate::base::error::SwitchError;
use crate::cookies::{CookieRecord, SetCookieRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{future::Future, pin::Pin};

/// Host identifier for a browser tab.
pub type TabId = u32;

/// Alias for the `Future` type returned by every host call.
pub type HostCall<T> = Pin<Box<dyn Future<Output = Result<T, SwitchError>> + Send>>;

/// The currently focused tab, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTab {
    pub id: TabId,
    pub url: String,
}

/// The full contents of the two origin-scoped storage areas, read from or
/// written into the page's own execution context as flat string maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSnapshot {
    pub local: BTreeMap<String, String>,
    pub session: BTreeMap<String, String>,
}

/// Capability set over the live browser.
///
/// Implementations must be thread-safe; the engine holds one behind
/// `Arc<dyn BrowserStateAccess>`. Methods take owned arguments and return
/// boxed futures so the trait stays object-safe.
///
/// # Design Notes
///
/// - Calls are not retried by the engine; a rejected call aborts the
///   enclosing user action.
/// - No timeouts are imposed; a stalled host call stalls the enclosing
///   action indefinitely.
/// - `write_storage` replaces both areas wholesale (clear, then
///   repopulate); partial writes are not part of the contract.
pub trait BrowserStateAccess: Send + Sync {
    /// Resolves the single currently focused tab and its URL.
    fn active_tab(&self) -> HostCall<ActiveTab>;

    /// Enumerates all cookies scoped to `domain`, in host order.
    /// Enumeration order carries no meaning.
    fn list_cookies(&self, domain: String) -> HostCall<Vec<CookieRecord>>;

    /// Removes the cookie named `name` addressed by `url`.
    fn remove_cookie(&self, url: String, name: String) -> HostCall<()>;

    /// Writes one cookie.
    fn set_cookie(&self, request: SetCookieRequest) -> HostCall<()>;

    /// Reads both storage areas from the page running in `tab`.
    fn read_storage(&self, tab: TabId) -> HostCall<StorageSnapshot>;

    /// Clears both storage areas in `tab` and repopulates them from the
    /// snapshot.
    fn write_storage(&self, tab: TabId, snapshot: StorageSnapshot) -> HostCall<()>;

    /// Reloads the page in `tab`. The only way the site's in-memory script
    /// state picks up newly installed cookies and storage.
    fn reload_page(&self, tab: TabId) -> HostCall<()>;
}
