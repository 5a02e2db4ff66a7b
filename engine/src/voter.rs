//! Per-identity voter records.

use ballot_types::Identity;
use serde::{Deserialize, Serialize};

/// The ballot state of a single identity.
///
/// Records are created lazily, the first time an identity is touched by an
/// authorization or delegation, and are never deleted. Lifecycle per voter:
/// `Unregistered → Authorized → {Delegated | Voted}`, and no transition
/// leaves `Voted`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Votes this identity controls, including weight forwarded by
    /// delegators. Zero until authorized or delegated to.
    pub weight: u64,

    /// True once this identity's weight has been counted toward a proposal.
    /// Monotonic: never reset by any operation.
    pub voted: bool,

    /// The proposal index credited. Valid only while `voted` is true.
    pub voted_proposal: Option<usize>,

    /// The identity this voter forwarded their weight to. Immutable once
    /// set; a voter with a delegate must never be counted directly again.
    pub delegate: Option<Identity>,
}

impl Voter {
    /// A record seated with an initial weight (no vote cast, no delegate).
    pub fn with_weight(weight: u64) -> Self {
        Self {
            weight,
            ..Self::default()
        }
    }

    /// The proposal this voter's ballot was credited to, if counted.
    pub fn credited_proposal(&self) -> Option<usize> {
        if self.voted {
            self.voted_proposal
        } else {
            None
        }
    }

    /// Whether this voter's ballot is committed, either cast directly or
    /// forwarded by delegation. A committed ballot can never be cast again.
    pub fn is_committed(&self) -> bool {
        self.voted || self.delegate.is_some()
    }
}
