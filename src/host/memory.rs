//! In-memory `BrowserStateAccess` implementation.
//!
//! Backs the engine's test suites and lets embedders exercise capture and
//! apply logic without a live browser. The cookie jar keys entries by
//! effective host, name, and path, so installing a cookie replaces any
//! live cookie sharing all three, mirroring real jar semantics.

use crate::base::error::SwitchError;
use crate::cookies::{CookieRecord, SetCookieRequest};
use crate::host::access::{ActiveTab, BrowserStateAccess, HostCall, StorageSnapshot, TabId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use time::OffsetDateTime;
use url::Url;

/// Jar key: (effective host, cookie name, cookie path).
type CookieKey = (String, String, String);

/// An in-memory browser host.
///
/// Holds one active tab, one cookie jar, and one pair of storage areas.
/// Individual host operations can be made to fail by name via
/// [`deny`](MemoryBrowser::deny), to exercise the engine's
/// partial-application behavior.
pub struct MemoryBrowser {
    tab: Mutex<ActiveTab>,
    cookies: DashMap<CookieKey, CookieRecord>,
    storage: Mutex<StorageSnapshot>,
    reloads: AtomicUsize,
    denied: DashMap<&'static str, ()>,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self {
            tab: Mutex::new(ActiveTab {
                id: 1,
                url: "about:blank".to_string(),
            }),
            cookies: DashMap::new(),
            storage: Mutex::new(StorageSnapshot::default()),
            reloads: AtomicUsize::new(0),
            denied: DashMap::new(),
        }
    }

    /// Points the active tab at `url`.
    pub fn set_active_tab(&self, url: impl Into<String>) {
        self.tab.lock().unwrap().url = url.into();
    }

    /// Makes every future call to `operation` fail with a `HostCall` error.
    pub fn deny(&self, operation: &'static str) {
        self.denied.insert(operation, ());
    }

    /// Lifts a [`deny`](Self::deny).
    pub fn allow(&self, operation: &'static str) {
        self.denied.remove(operation);
    }

    fn check(&self, operation: &'static str) -> Result<(), SwitchError> {
        if self.denied.contains_key(operation) {
            Err(SwitchError::host_call(operation, "injected failure"))
        } else {
            Ok(())
        }
    }

    /// Seeds a live cookie directly, bypassing the set_cookie path.
    /// Host-only records (no domain) are scoped to `host`.
    pub fn seed_cookie(&self, host: &str, record: CookieRecord) {
        let effective = Self::effective_host(record.domain.as_deref(), host);
        self.cookies
            .insert((effective, record.name.clone(), record.path.clone()), record);
    }

    /// Seeds a local-storage entry.
    pub fn seed_local(&self, key: impl Into<String>, value: impl Into<String>) {
        self.storage
            .lock()
            .unwrap()
            .local
            .insert(key.into(), value.into());
    }

    /// Seeds a session-storage entry.
    pub fn seed_session(&self, key: impl Into<String>, value: impl Into<String>) {
        self.storage
            .lock()
            .unwrap()
            .session
            .insert(key.into(), value.into());
    }

    /// Current jar size, expired cookies included.
    pub fn cookie_count(&self) -> usize {
        self.cookies.len()
    }

    /// Value of the first live cookie named `name`, if any.
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.cookies
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().value.clone())
    }

    /// A copy of the current storage areas.
    pub fn storage(&self) -> StorageSnapshot {
        self.storage.lock().unwrap().clone()
    }

    /// Number of reloads signaled so far.
    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }

    fn effective_host(domain: Option<&str>, fallback: &str) -> String {
        match domain {
            Some(d) => d.trim_start_matches('.').to_lowercase(),
            None => fallback.to_lowercase(),
        }
    }

    /// Host-style domain matching: `host` is covered by `domain` when equal
    /// or a subdomain of it.
    fn host_in_domain(host: &str, domain: &str) -> bool {
        host == domain || host.ends_with(&format!(".{domain}"))
    }

    fn url_host_and_path(
        operation: &'static str,
        url: &str,
    ) -> Result<(String, String), SwitchError> {
        let parsed = Url::parse(url).map_err(|e| SwitchError::host_call(operation, e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| SwitchError::host_call(operation, "url has no host"))?
            .to_lowercase();
        Ok((host, parsed.path().to_string()))
    }
}

impl BrowserStateAccess for MemoryBrowser {
    fn active_tab(&self) -> HostCall<ActiveTab> {
        let result = self
            .check("active_tab")
            .map(|()| self.tab.lock().unwrap().clone());
        Box::pin(async move { result })
    }

    fn list_cookies(&self, domain: String) -> HostCall<Vec<CookieRecord>> {
        let result = self.check("list_cookies").map(|()| {
            let now = OffsetDateTime::now_utc();
            let domain = domain.to_lowercase();
            self.cookies
                .iter()
                .filter(|entry| Self::host_in_domain(&entry.key().0, &domain))
                .filter(|entry| !entry.value().is_expired(now))
                .map(|entry| entry.value().clone())
                .collect()
        });
        Box::pin(async move { result })
    }

    fn remove_cookie(&self, url: String, name: String) -> HostCall<()> {
        let result = self.check("remove_cookie").and_then(|()| {
            let (host, path) = Self::url_host_and_path("remove_cookie", &url)?;
            let keys: Vec<CookieKey> = self
                .cookies
                .iter()
                .filter(|entry| {
                    let (cookie_host, cookie_name, cookie_path) = entry.key();
                    *cookie_name == name
                        && *cookie_path == path
                        && Self::host_in_domain(&host, cookie_host)
                })
                .map(|entry| entry.key().clone())
                .collect();
            for key in keys {
                self.cookies.remove(&key);
            }
            Ok(())
        });
        Box::pin(async move { result })
    }

    fn set_cookie(&self, request: SetCookieRequest) -> HostCall<()> {
        let result = self.check("set_cookie").and_then(|()| {
            let fallback = Self::url_host_and_path("set_cookie", &request.url)?.0;
            let host = Self::effective_host(request.domain.as_deref(), &fallback);
            let record = request.as_record();
            self.cookies
                .insert((host, record.name.clone(), record.path.clone()), record);
            Ok(())
        });
        Box::pin(async move { result })
    }

    fn read_storage(&self, _tab: TabId) -> HostCall<StorageSnapshot> {
        let result = self
            .check("read_storage")
            .map(|()| self.storage.lock().unwrap().clone());
        Box::pin(async move { result })
    }

    fn write_storage(&self, _tab: TabId, snapshot: StorageSnapshot) -> HostCall<()> {
        let result = self.check("write_storage").map(|()| {
            *self.storage.lock().unwrap() = snapshot;
        });
        Box::pin(async move { result })
    }

    fn reload_page(&self, _tab: TabId) -> HostCall<()> {
        let result = self.check("reload_page").map(|()| {
            self.reloads.fetch_add(1, Ordering::SeqCst);
        });
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::origin::Origin;
    use crate::cookies::SameSite;

    fn record(name: &str, path: &str) -> CookieRecord {
        CookieRecord {
            name: name.to_string(),
            value: "v".to_string(),
            path: path.to_string(),
            domain: None,
            secure: true,
            http_only: false,
            same_site: SameSite::Lax,
            expiration_date: None,
        }
    }

    #[tokio::test]
    async fn set_replaces_same_name_and_path() {
        let browser = MemoryBrowser::new();
        let origin = Origin::https("grok.com");

        let mut first = record("sid", "/");
        first.value = "old".to_string();
        browser
            .set_cookie(SetCookieRequest::from_record(&origin, &first))
            .await
            .unwrap();

        let mut second = record("sid", "/");
        second.value = "new".to_string();
        browser
            .set_cookie(SetCookieRequest::from_record(&origin, &second))
            .await
            .unwrap();

        // Same name, different path: both live.
        browser
            .set_cookie(SetCookieRequest::from_record(&origin, &record("sid", "/api")))
            .await
            .unwrap();

        assert_eq!(browser.cookie_count(), 2);
        let listed = browser.list_cookies("grok.com".to_string()).await.unwrap();
        assert!(listed.iter().any(|c| c.path == "/" && c.value == "new"));
    }

    #[tokio::test]
    async fn remove_is_scoped_by_url_path() {
        let browser = MemoryBrowser::new();
        browser.seed_cookie("grok.com", record("sid", "/"));
        browser.seed_cookie("grok.com", record("sid", "/api"));

        browser
            .remove_cookie("https://grok.com/".to_string(), "sid".to_string())
            .await
            .unwrap();

        let listed = browser.list_cookies("grok.com".to_string()).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].path, "/api");
    }

    #[tokio::test]
    async fn list_covers_subdomains_and_skips_expired() {
        let browser = MemoryBrowser::new();
        browser.seed_cookie("grok.com", record("a", "/"));
        browser.seed_cookie("api.grok.com", record("b", "/"));
        browser.seed_cookie("other.com", record("c", "/"));

        let mut expired = record("d", "/");
        expired.expiration_date = Some(1); // 1970
        browser.seed_cookie("grok.com", expired);

        let listed = browser.list_cookies("grok.com".to_string()).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"a"));
        assert!(names.contains(&"b"));
        assert!(!names.contains(&"c"));
        assert!(!names.contains(&"d"));
    }

    #[tokio::test]
    async fn denied_operations_fail() {
        let browser = MemoryBrowser::new();
        browser.deny("reload_page");
        let err = browser.reload_page(1).await.unwrap_err();
        assert!(matches!(
            err,
            SwitchError::HostCall {
                operation: "reload_page",
                ..
            }
        ));

        browser.allow("reload_page");
        browser.reload_page(1).await.unwrap();
        assert_eq!(browser.reload_count(), 1);
    }
}
