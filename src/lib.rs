//! # originswitch
//!
//! A profile-state synchronization engine for a single web origin.
//!
//! `originswitch` lets an embedder maintain several independent login
//! "profiles" for one origin inside one browser session and switch between
//! them on demand. A profile is a named snapshot of the origin's full
//! authentication state: its cookies plus the contents of its two key-value
//! storage areas. Switching destructively replaces the live state with the
//! snapshot and signals a page reload.
//!
//! ## Features
//!
//! - **Capture**: snapshot live cookies and both storage areas into a
//!   serializable [`Profile`](profile::Profile)
//! - **Apply**: wipe-then-install cookie replacement with `__Host-` prefix
//!   policy enforcement, full storage replacement, reload signal
//! - **Catalog**: delete, clear-all, wipe-live-state, listing, storage usage
//! - **Redaction**: two reserved analytics storage keys are never captured
//!   or restored with real content
//! - **Injected capabilities**: the live browser and the durable store are
//!   traits, so the engine runs unchanged against an in-memory fake
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use originswitch::base::origin::Origin;
//! use originswitch::switcher::ProfileSwitcher;
//!
//! #[tokio::main]
//! async fn main() {
//!     let switcher = ProfileSwitcher::new(Origin::https("example.com"), host, store);
//!     switcher.save_profile("work").await.unwrap();
//!     switcher.switch_profile("personal").await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions and the [`Origin`](base::origin::Origin) type
//! - [`cookies`] - Cookie records and the host write-request shape
//! - [`profile`] - The profile snapshot model and key redaction
//! - [`host`] - The [`BrowserStateAccess`](host::BrowserStateAccess)
//!   capability trait and an in-memory implementation
//! - [`store`] - Durable profile persistence ([`ProfileStore`](store::ProfileStore))
//! - [`switcher`] - The capture / apply / catalog engine
//!
//! ## Limitations
//!
//! Profile switching is not transactional: a host call rejected partway
//! through an apply leaves live state a hybrid of old and new, with no
//! rollback. The engine also never verifies after the fact that the live
//! state still matches the profile it last installed.

pub mod base;
pub mod cookies;
pub mod host;
pub mod profile;
pub mod store;
pub mod switcher;
