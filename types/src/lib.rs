//! Fundamental types for the ballot engine.
//!
//! This crate defines the types shared between the engine and its callers:
//! participant identities, fixed-width proposal names, and the type-level
//! error for name encoding.

pub mod error;
pub mod identity;
pub mod name;

pub use error::NameError;
pub use identity::Identity;
pub use name::{ProposalName, NAME_LEN};
