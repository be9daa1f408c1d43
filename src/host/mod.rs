//! Browser host capabilities.
//!
//! The engine never talks to a browser directly. Everything it needs from
//! the live browser context is expressed as the [`BrowserStateAccess`]
//! trait: the active-tab resolver, the cookie jar, the in-page storage
//! areas, and the reload signal. Production embedders implement it over
//! their host bridge; tests use the in-memory
//! [`MemoryBrowser`](memory::MemoryBrowser).

pub mod access;
pub mod memory;

pub use access::{ActiveTab, BrowserStateAccess, HostCall, StorageSnapshot, TabId};
pub use memory::MemoryBrowser;
