//! Ballot engine — a deterministic voting state machine.
//!
//! The engine owns a fixed, ordered proposal list and a lazily-populated
//! voter registry. It grants voting rights, tallies weighted votes, and
//! resolves chained vote delegation with cycle prevention.
//!
//! Key invariants:
//! - Weight is conserved: the sum of all proposal tallies equals the sum of
//!   weights over voters whose ballot has been counted.
//! - A voter's weight is counted at most once, regardless of delegation depth.
//! - Delegation chains never cycle; a rejected operation mutates nothing.
//!
//! Every mutating operation is an atomic, serializable transition on an
//! explicitly owned ledger. Callers impose the single-writer discipline;
//! independent ballots are freely constructible side by side.

pub mod engine;
pub mod error;
pub mod params;
pub mod proposal;
pub mod voter;

pub use engine::Ballot;
pub use error::BallotError;
pub use params::BallotParams;
pub use proposal::Proposal;
pub use voter::Voter;
