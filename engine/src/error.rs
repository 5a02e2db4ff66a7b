//! Ballot-specific errors.
//!
//! All errors are local and recoverable: a rejected operation leaves the
//! ballot exactly as it was, and every rejection is distinguishable by kind
//! so the caller can decide whether a retry with different arguments makes
//! sense. Retry policy itself belongs to the driver, not the engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BallotError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    #[error("only the chairperson may grant voting rights")]
    Unauthorized,

    #[error("voter already has voting rights or has already voted")]
    AlreadyAuthorized,

    #[error("cannot delegate to self")]
    SelfDelegation,

    #[error("voter's ballot has already been committed")]
    AlreadyVoted,

    #[error("voter has no right to vote")]
    NoVotingRights,

    #[error("delegation would form a cycle")]
    DelegationCycle,

    #[error("proposal index {index} out of bounds ({count} proposals)")]
    InvalidProposal { index: usize, count: usize },
}
