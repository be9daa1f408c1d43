use crate::base::origin::Origin;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Name prefix reserving a cookie to the exact host.
///
/// Per RFC 6265bis, a `__Host-` cookie must carry `Secure`, `Path=/`, and no
/// `Domain` attribute. The engine re-applies this policy on every install so
/// a record that was captured (or hand-edited) with divergent attributes is
/// still written back legally.
pub const HOST_LOCK_PREFIX: &str = "__Host-";

/// Cookie `SameSite` attribute, serialized with the identifiers the browser
/// host uses (`no_restriction`, `lax`, `strict`, `unspecified`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SameSite {
    #[default]
    Unspecified,
    NoRestriction,
    Lax,
    Strict,
}

/// One cookie as it existed on the origin at capture time.
///
/// `domain` is absent for host-only cookies; `expiration_date` is epoch
/// seconds and absent for session cookies. Transient metadata the host does
/// not round-trip (creation time, last access time) is not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    #[serde(default)]
    pub same_site: SameSite,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<i64>,
}

impl CookieRecord {
    /// Whether the name carries the host-lock prefix.
    pub fn is_host_locked(&self) -> bool {
        self.name.starts_with(HOST_LOCK_PREFIX)
    }

    /// Session cookies have no expiration date.
    pub fn is_session(&self) -> bool {
        self.expiration_date.is_none()
    }

    /// Expiry as an `OffsetDateTime`, if present and representable.
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.expiration_date
            .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expires_at() {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }
}

/// A cookie write request addressed to the browser host.
///
/// Built from a stored [`CookieRecord`] during apply. Host-locked cookies
/// get the mandated attributes regardless of what the record says; all other
/// cookies are written back exactly as captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookieRequest {
    pub url: String,
    pub name: String,
    pub value: String,
    pub path: String,
    pub domain: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub expiration_date: Option<i64>,
}

impl SetCookieRequest {
    /// Builds the write request for `record` on `origin`, applying the
    /// host-lock policy: `__Host-` cookies are forced to `path = "/"`,
    /// `secure = true`, and no domain.
    pub fn from_record(origin: &Origin, record: &CookieRecord) -> Self {
        let host_locked = record.is_host_locked();
        let path = if host_locked {
            "/".to_string()
        } else {
            record.path.clone()
        };

        Self {
            url: origin.cookie_url(&path),
            name: record.name.clone(),
            value: record.value.clone(),
            domain: if host_locked {
                None
            } else {
                record.domain.clone()
            },
            secure: host_locked || record.secure,
            http_only: record.http_only,
            same_site: record.same_site,
            expiration_date: record.expiration_date,
            path,
        }
    }

    /// The record this request installs, as it will read back on the next
    /// capture.
    pub fn as_record(&self) -> CookieRecord {
        CookieRecord {
            name: self.name.clone(),
            value: self.value.clone(),
            path: self.path.clone(),
            domain: self.domain.clone(),
            secure: self.secure,
            http_only: self.http_only,
            same_site: self.same_site,
            expiration_date: self.expiration_date,
        }
    }
}
