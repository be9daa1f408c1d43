//! Cookie records and host write requests.
//!
//! - [`CookieRecord`](record::CookieRecord): one cookie as captured from the
//!   origin, the shape stored inside a profile
//! - [`SetCookieRequest`](record::SetCookieRequest): the write request built
//!   during apply, with the `__Host-` lock policy re-applied

pub mod record;

pub use record::{CookieRecord, SameSite, SetCookieRequest, HOST_LOCK_PREFIX};
