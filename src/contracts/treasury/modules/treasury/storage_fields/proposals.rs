use ink::storage::Mapping;
use pendzl::{math::errors::MathError, traits::Timestamp};
use upgrade_registry::gate::SelfCall;

use crate::modules::treasury::{
    errors::TreasuryError,
    structs::{ProposalId, TreasurySettings},
};

/// Queue of scheduled proposals and the settings governing it.
///
/// A proposal is queued while a non-zero eta is stored for its id. Entries are only ever
/// inserted by `schedule`, which never stores a zero eta, and removed by `take` (execution) or `cancel`.
#[derive(Debug)]
#[pendzl::storage_item]
pub struct ProposalsStorage {
    #[lazy]
    settings: TreasurySettings,
    eta: Mapping<ProposalId, Timestamp>,
    executing: Mapping<ProposalId, ()>,
}

impl ProposalsStorage {
    pub fn new(delay: Timestamp, grace_period: Timestamp) -> Self {
        let mut instance = ProposalsStorage {
            settings: Default::default(),
            eta: Mapping::new(),
            executing: Mapping::new(),
        };
        instance.settings.set(&TreasurySettings {
            delay,
            grace_period,
        });
        instance
    }

    pub fn settings(&self) -> TreasurySettings {
        self.settings.get().unwrap_or_default()
    }

    pub fn delay(&self) -> Timestamp {
        self.settings().delay
    }

    pub fn grace_period(&self) -> Timestamp {
        self.settings().grace_period
    }

    /// Returns the previous delay.
    pub fn set_delay(&mut self, _self_call: &SelfCall, delay: Timestamp) -> Timestamp {
        let mut settings = self.settings();
        let prev_delay = settings.delay;
        settings.delay = delay;
        self.settings.set(&settings);
        prev_delay
    }

    /// Returns the previous grace period.
    pub fn set_grace_period(&mut self, _self_call: &SelfCall, grace_period: Timestamp) -> Timestamp {
        let mut settings = self.settings();
        let prev_grace_period = settings.grace_period;
        settings.grace_period = grace_period;
        self.settings.set(&settings);
        prev_grace_period
    }

    /// Eta of the proposal, 0 if it is not queued.
    pub fn timestamp(&self, id: &ProposalId) -> Timestamp {
        self.eta.get(id).unwrap_or_default()
    }

    pub fn is_queued(&self, id: &ProposalId) -> bool {
        self.timestamp(id) != 0
    }

    pub fn is_ready(&self, id: &ProposalId, now: Timestamp) -> bool {
        match self.eta.get(id) {
            Some(eta) => now >= eta,
            None => false,
        }
    }

    /// Does not check whether the proposal is queued.
    pub fn is_expired(&self, id: &ProposalId, now: Timestamp) -> bool {
        now > self.timestamp(id).saturating_add(self.grace_period())
    }

    pub fn is_executing(&self, id: &ProposalId) -> bool {
        self.executing.contains(id)
    }

    /// Queues the proposal for execution at `now + delay` and returns that eta.
    pub fn schedule(&mut self, id: &ProposalId, now: Timestamp) -> Result<Timestamp, TreasuryError> {
        if self.is_executing(id) {
            return Err(TreasuryError::ExecutionInProgress(*id));
        }
        if self.is_queued(id) {
            return Err(TreasuryError::AlreadyQueued(*id));
        }

        let eta = now.checked_add(self.delay()).ok_or(MathError::Overflow)?;
        if eta == 0 {
            return Err(TreasuryError::ZeroEta(*id));
        }
        self.eta.insert(id, &eta);
        Ok(eta)
    }

    /// Removes the proposal from the queue and returns its eta.
    pub fn take(&mut self, id: &ProposalId) -> Result<Timestamp, TreasuryError> {
        self.eta.take(id).ok_or(TreasuryError::NotQueued(*id))
    }

    /// Puts back an entry removed by `take` when its execution did not go through.
    pub fn restore(&mut self, id: &ProposalId, eta: Timestamp) {
        self.eta.insert(id, &eta);
    }

    pub fn lock(&mut self, id: &ProposalId) -> Result<(), TreasuryError> {
        if self.is_executing(id) {
            return Err(TreasuryError::ExecutionInProgress(*id));
        }
        self.executing.insert(id, &());
        Ok(())
    }

    pub fn unlock(&mut self, id: &ProposalId) {
        self.executing.remove(id);
    }
}
