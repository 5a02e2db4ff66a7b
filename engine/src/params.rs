//! Engine-tunable ballot parameters.

use serde::{Deserialize, Serialize};

/// Parameters fixed at ballot construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotParams {
    /// Weight granted by an authorization. Must be at least 1.
    pub default_weight: u64,

    /// Whether construction seats the chairperson as a voter with
    /// `default_weight`. When false, the chairperson holds authority only
    /// and must be authorized like anyone else to cast a ballot.
    pub chairperson_votes: bool,
}

impl Default for BallotParams {
    fn default() -> Self {
        Self {
            default_weight: 1,
            chairperson_votes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grants_single_vote() {
        let params = BallotParams::default();
        assert_eq!(params.default_weight, 1);
        assert!(params.chairperson_votes);
    }
}
