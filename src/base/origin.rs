//! The origin a profile snapshot is scoped to.

use crate::base::error::SwitchError;
use std::fmt;
use url::Url;

/// A scheme+host pair identifying the single origin the engine manages.
///
/// All precondition checks compare the active tab's URL against this origin
/// by string prefix, matching the way the capture and apply guards are
/// defined: a tab is "on" the origin when its URL starts with
/// `scheme://host`.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Origin {
    scheme: Box<str>,
    host: Box<str>,
}

impl Origin {
    /// Creates an origin from an explicit scheme and host.
    pub fn new(scheme: impl Into<Box<str>>, host: impl Into<Box<str>>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// Creates an `https` origin for the given host. Login state is
    /// cookie-prefix constrained to secure origins, so this is the common
    /// constructor.
    pub fn https(host: impl Into<Box<str>>) -> Self {
        Self::new("https", host)
    }

    /// Parses a full URL and keeps only its scheme and host.
    pub fn parse(input: &str) -> Result<Self, SwitchError> {
        let url = Url::parse(input).map_err(|_| SwitchError::invalid_origin(input))?;
        let host = url
            .host_str()
            .ok_or_else(|| SwitchError::invalid_origin(input))?;
        Ok(Self::new(url.scheme(), host))
    }

    /// The host component, as passed to cookie enumeration.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// `scheme://host`, with no trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Whether a tab URL belongs to this origin (string-prefix check).
    pub fn matches(&self, tab_url: &str) -> bool {
        tab_url.starts_with(&self.base_url())
    }

    /// The URL used to address a cookie at `path` on this origin, as
    /// required by host cookie removal and installation calls.
    pub fn cookie_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)
    }
}
