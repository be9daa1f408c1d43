//! Base types and error handling.
//!
//! - [`SwitchError`](error::SwitchError): the crate-wide error enum
//! - [`Origin`](origin::Origin): the scheme+host a snapshot is scoped to

pub mod error;
pub mod origin;

#[cfg(test)]
mod tests;
