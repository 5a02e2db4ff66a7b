//! Proposals and their tallies.

use ballot_types::ProposalName;
use serde::{Deserialize, Serialize};

/// One entry in the ballot's fixed, ordered proposal sequence.
///
/// Proposals are identified by their position in the sequence; the order is
/// significant, since ties are broken in favor of the earliest proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// The fixed-width encoded name, preserved verbatim from construction.
    pub name: ProposalName,

    /// Accumulated vote weight credited to this proposal.
    pub tally: u64,
}

impl Proposal {
    pub fn new(name: ProposalName) -> Self {
        Self { name, tally: 0 }
    }
}
