//! Core ballot engine — registry, delegation resolution, tally.

use crate::error::BallotError;
use crate::params::BallotParams;
use crate::proposal::Proposal;
use crate::voter::Voter;
use ballot_types::{Identity, ProposalName};
use std::collections::HashMap;

/// A single ballot: the fixed proposal sequence plus the mutable voter and
/// tally state, owned as one ledger.
///
/// All mutating operations take `&mut self` and either fully apply their
/// effect or fail leaving every record untouched. Reads take `&self` and
/// never observe a partially-applied mutation; callers exposed to
/// concurrency serialize mutations behind their own single-writer boundary.
#[derive(Clone, Debug)]
pub struct Ballot {
    /// Immutable after construction. Order is significant: ties break in
    /// favor of the lowest index.
    proposals: Vec<Proposal>,
    /// The sole identity allowed to grant voting rights.
    chairperson: Identity,
    /// Flat registry: identity → record, populated lazily.
    voters: HashMap<Identity, Voter>,
    params: BallotParams,
}

impl Ballot {
    /// Construct a ballot over a non-empty proposal sequence with default
    /// parameters (authorization grants weight 1, chairperson is seated).
    pub fn new(names: Vec<ProposalName>, chairperson: Identity) -> Result<Self, BallotError> {
        Self::with_params(names, chairperson, BallotParams::default())
    }

    /// Construct a ballot with explicit parameters.
    pub fn with_params(
        names: Vec<ProposalName>,
        chairperson: Identity,
        params: BallotParams,
    ) -> Result<Self, BallotError> {
        if names.is_empty() {
            return Err(BallotError::InvalidConfiguration(
                "ballot requires at least one proposal",
            ));
        }
        if params.default_weight == 0 {
            return Err(BallotError::InvalidConfiguration(
                "default voting weight must be at least 1",
            ));
        }
        let mut voters = HashMap::new();
        if params.chairperson_votes {
            voters.insert(chairperson, Voter::with_weight(params.default_weight));
        }
        tracing::debug!(%chairperson, proposals = names.len(), "ballot created");
        Ok(Self {
            proposals: names.into_iter().map(Proposal::new).collect(),
            chairperson,
            voters,
            params,
        })
    }

    /// Grant `target` the right to vote. Chairperson only.
    pub fn authorize(&mut self, caller: Identity, target: Identity) -> Result<(), BallotError> {
        if caller != self.chairperson {
            return Err(BallotError::Unauthorized);
        }
        let grant = self.params.default_weight;
        let voter = self.voters.entry(target).or_default();
        if voter.weight != 0 || voter.voted {
            return Err(BallotError::AlreadyAuthorized);
        }
        voter.weight = grant;
        tracing::debug!(%target, weight = grant, "voting rights granted");
        Ok(())
    }

    /// Forward the caller's voting weight to `to`, following any delegation
    /// chain from `to` to its final target.
    ///
    /// The chain walk is read-only and bounded by the registry size, so a
    /// rejected call (self-delegation, cycle, malformed chain) leaves every
    /// record exactly as it was.
    pub fn delegate(&mut self, caller: Identity, to: Identity) -> Result<(), BallotError> {
        if to == caller {
            return Err(BallotError::SelfDelegation);
        }
        let sender_weight = match self.voters.get(&caller) {
            Some(v) if v.is_committed() => return Err(BallotError::AlreadyVoted),
            Some(v) if v.weight > 0 => v.weight,
            _ => return Err(BallotError::NoVotingRights),
        };

        let step_limit = self.voters.len();
        let mut target = to;
        let mut steps = 0usize;
        while let Some(next) = self.voters.get(&target).and_then(|v| v.delegate) {
            steps += 1;
            if steps > step_limit {
                // Chains are cycle-free by construction, so a walk longer
                // than the registry means a malformed chain.
                tracing::warn!(%caller, %to, steps, "delegation walk exceeded registry size");
                return Err(BallotError::DelegationCycle);
            }
            target = next;
            if target == caller {
                return Err(BallotError::DelegationCycle);
            }
        }

        match self.voters.get(&target).and_then(|v| v.credited_proposal()) {
            Some(index) => {
                // The chain ends in an already-cast vote: the caller's
                // weight is consumed into it now, and the caller's own
                // ballot is thereby counted.
                let sender = self
                    .voters
                    .get_mut(&caller)
                    .ok_or(BallotError::NoVotingRights)?;
                sender.delegate = Some(target);
                sender.voted = true;
                sender.voted_proposal = Some(index);
                self.proposals[index].tally =
                    self.proposals[index].tally.saturating_add(sender_weight);
                tracing::debug!(%caller, %target, index, weight = sender_weight, "delegated into a cast vote");
            }
            None => {
                // Weight accumulates at the chain's end, to be counted when
                // the target votes or delegates further. The caller's own
                // weight field is not zeroed; the set delegate marks it as
                // spent.
                let sender = self
                    .voters
                    .get_mut(&caller)
                    .ok_or(BallotError::NoVotingRights)?;
                sender.delegate = Some(target);
                let resolved = self.voters.entry(target).or_default();
                resolved.weight = resolved.weight.saturating_add(sender_weight);
                tracing::debug!(%caller, %target, weight = sender_weight, "weight forwarded");
            }
        }
        Ok(())
    }

    /// Cast the caller's accumulated weight for the proposal at `index`.
    pub fn vote(&mut self, caller: Identity, index: usize) -> Result<(), BallotError> {
        let count = self.proposals.len();
        let voter = match self.voters.get_mut(&caller) {
            Some(v) => v,
            None => return Err(BallotError::NoVotingRights),
        };
        if voter.is_committed() {
            return Err(BallotError::AlreadyVoted);
        }
        if voter.weight == 0 {
            return Err(BallotError::NoVotingRights);
        }
        if index >= count {
            return Err(BallotError::InvalidProposal { index, count });
        }
        voter.voted = true;
        voter.voted_proposal = Some(index);
        let weight = voter.weight;
        // Weight forwarded to the caller before it voted is already folded
        // into `weight`, so one tally addition counts the whole chain.
        self.proposals[index].tally = self.proposals[index].tally.saturating_add(weight);
        tracing::debug!(%caller, index, weight, "vote cast");
        Ok(())
    }

    /// The winning proposal: strictly greatest tally, ties broken by the
    /// lowest index. With all tallies zero this is the proposal at index 0.
    pub fn winning_proposal(&self) -> (usize, &ProposalName) {
        let mut winner = 0;
        for (index, proposal) in self.proposals.iter().enumerate().skip(1) {
            if proposal.tally > self.proposals[winner].tally {
                winner = index;
            }
        }
        (winner, &self.proposals[winner].name)
    }

    /// Name of the winning proposal.
    pub fn winner_name(&self) -> &ProposalName {
        self.winning_proposal().1
    }

    pub fn chairperson(&self) -> Identity {
        self.chairperson
    }

    pub fn params(&self) -> &BallotParams {
        &self.params
    }

    /// Look up a voter record. `None` for identities never touched by an
    /// authorization or delegation.
    pub fn voter(&self, id: &Identity) -> Option<&Voter> {
        self.voters.get(id)
    }

    /// Iterate all known voter records.
    pub fn voters(&self) -> impl Iterator<Item = (&Identity, &Voter)> {
        self.voters.iter()
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }
}
