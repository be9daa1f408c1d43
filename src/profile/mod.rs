//! The profile snapshot model.
//!
//! A [`Profile`] is a named, immutable-once-saved snapshot of an origin's
//! authentication state: its cookies plus the full contents of the two
//! key-value storage areas (persistent-across-sessions and
//! session-lifetime). Profiles are the serialization contract with the
//! durable store: a map from profile name to
//! `{cookies, localState, sessionState}`.

use crate::cookies::CookieRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage keys belonging to the embedded analytics subsystem.
///
/// These hold logging-request payloads and per-user analytics identifiers
/// that must never leak across profiles or be replayed. Capture and apply
/// both force them to the empty string whenever present.
pub const RESERVED_ANALYTICS_KEYS: [&str; 2] = [
    "STATSIG_LOCAL_STORAGE_LOGGING_REQUEST",
    "STATSIG_LOCAL_STORAGE_INTERNAL_STORE_V4",
];

/// Whether `key` is one of the reserved analytics keys.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_ANALYTICS_KEYS.contains(&key)
}

/// Blanks the reserved analytics keys in a storage map. Absent keys are
/// left absent.
pub fn redact_reserved_keys(state: &mut BTreeMap<String, String>) {
    for key in RESERVED_ANALYTICS_KEYS {
        if let Some(value) = state.get_mut(key) {
            value.clear();
        }
    }
}

/// A named snapshot of an origin's cookies and two storage areas.
///
/// The name is the primary key in the store and is carried by the
/// surrounding `accounts` map rather than the serialized record, so it is
/// skipped on serialization and re-attached on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing)]
    pub name: String,
    pub cookies: Vec<CookieRecord>,
    pub local_state: BTreeMap<String, String>,
    pub session_state: BTreeMap<String, String>,
}

impl Profile {
    /// Builds a profile from captured state, applying the reserved-key
    /// redaction to both storage areas.
    pub fn new(
        name: impl Into<String>,
        cookies: Vec<CookieRecord>,
        mut local_state: BTreeMap<String, String>,
        mut session_state: BTreeMap<String, String>,
    ) -> Self {
        redact_reserved_keys(&mut local_state);
        redact_reserved_keys(&mut session_state);
        Self {
            name: name.into(),
            cookies,
            local_state,
            session_state,
        }
    }

    /// Serialized size in KiB, for storage-usage reporting against the
    /// host's durable-store quota.
    pub fn size_kib(&self) -> f64 {
        match serde_json::to_string(self) {
            Ok(json) => json.len() as f64 / 1024.0,
            Err(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::SameSite;

    fn cookie(name: &str, value: &str) -> CookieRecord {
        CookieRecord {
            name: name.to_string(),
            value: value.to_string(),
            path: "/".to_string(),
            domain: None,
            secure: true,
            http_only: false,
            same_site: SameSite::Unspecified,
            expiration_date: None,
        }
    }

    #[test]
    fn new_redacts_reserved_keys_in_both_areas() {
        let mut local = BTreeMap::new();
        local.insert("theme".to_string(), "dark".to_string());
        local.insert(
            "STATSIG_LOCAL_STORAGE_LOGGING_REQUEST".to_string(),
            "pending-events".to_string(),
        );
        let mut session = BTreeMap::new();
        session.insert(
            "STATSIG_LOCAL_STORAGE_INTERNAL_STORE_V4".to_string(),
            "store-blob".to_string(),
        );

        let profile = Profile::new("work", vec![cookie("sid", "abc")], local, session);

        assert_eq!(profile.local_state["theme"], "dark");
        assert_eq!(profile.local_state["STATSIG_LOCAL_STORAGE_LOGGING_REQUEST"], "");
        assert_eq!(
            profile.session_state["STATSIG_LOCAL_STORAGE_INTERNAL_STORE_V4"],
            ""
        );
    }

    #[test]
    fn redaction_leaves_absent_keys_absent() {
        let mut state = BTreeMap::new();
        state.insert("theme".to_string(), "dark".to_string());
        redact_reserved_keys(&mut state);
        assert_eq!(state.len(), 1);
        assert!(!state.contains_key("STATSIG_LOCAL_STORAGE_LOGGING_REQUEST"));
    }

    #[test]
    fn serialization_contract_shape() {
        let mut local = BTreeMap::new();
        local.insert("theme".to_string(), "dark".to_string());
        let profile = Profile::new("work", vec![cookie("sid", "abc")], local, BTreeMap::new());

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(json["localState"]["theme"], "dark");
        assert_eq!(json["sessionState"], serde_json::json!({}));
        assert_eq!(json["cookies"][0]["name"], "sid");
    }

    #[test]
    fn size_is_reported_in_kib() {
        let profile = Profile::new(
            "big",
            Vec::new(),
            BTreeMap::from([("k".to_string(), "x".repeat(2048))]),
            BTreeMap::new(),
        );
        assert!(profile.size_kib() > 2.0);
        assert!(profile.size_kib() < 3.0);
    }

    #[test]
    fn reserved_key_lookup() {
        assert!(is_reserved_key("STATSIG_LOCAL_STORAGE_LOGGING_REQUEST"));
        assert!(is_reserved_key("STATSIG_LOCAL_STORAGE_INTERNAL_STORE_V4"));
        assert!(!is_reserved_key("theme"));
    }
}
