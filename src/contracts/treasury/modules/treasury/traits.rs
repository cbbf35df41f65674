use super::{dispatch::CallDispatcher, errors::TreasuryError, structs::ProposalId};
use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, Balance, Hash, Timestamp};

#[ink::trait_definition]
/// Trait defining the time-locked execution of proposals by the Treasury.
pub trait Treasury {
    /// Schedules the proposal identified by `proposal_id` for execution after the delay.
    ///
    /// On success Emits 'ProposalScheduled' event.
    ///
    /// # Returns
    ///
    /// Returns the eta - the earliest timestamp at which the proposal can be executed.
    ///
    /// # Errors
    ///
    /// Returns 'AccessControlError' if the caller is not the owner.
    /// Returns 'AlreadyQueued' if the proposal is already scheduled.
    /// Returns 'ExecutionInProgress' if the proposal is being executed.
    /// Returns 'MathError' if the eta overflows.
    /// Returns 'ZeroEta' if the eta would be 0 (zero delay at genesis time).
    #[ink(message)]
    fn schedule(&mut self, proposal_id: ProposalId) -> Result<Timestamp, TreasuryError>;

    /// Executes the scheduled proposal consisting of the given calls and description hash.
    /// Calls are performed one after another in the given order. Either all of them succeed or none is applied.
    ///
    /// On success Emits 'ProposalExecuted' event.
    ///
    /// # Errors
    ///
    /// Returns 'AccessControlError' if the caller is not the owner.
    /// Returns 'LengthMismatch' if `targets`, `values` and `calldatas` differ in length.
    /// Returns 'NotReady' if the proposal is not scheduled or its eta has not been reached.
    /// Returns 'Expired' if the grace period of the proposal has elapsed.
    /// Returns 'ExecutionInProgress' if the proposal is already being executed.
    /// Returns 'ExecutionFailed' with the index of the first call that failed.
    #[ink(message)]
    fn execute(
        &mut self,
        targets: Vec<AccountId>,
        values: Vec<Balance>,
        calldatas: Vec<Vec<u8>>,
        description_hash: Hash,
    ) -> Result<ProposalId, TreasuryError>;

    /// Cancels the scheduled proposal.
    ///
    /// On success Emits 'ProposalCanceled' event.
    ///
    /// # Errors
    ///
    /// Returns 'AccessControlError' if the caller is not the owner.
    /// Returns 'NotQueued' if the proposal is not scheduled.
    #[ink(message)]
    fn cancel(&mut self, proposal_id: ProposalId) -> Result<(), TreasuryError>;
}

#[ink::trait_definition]
pub trait TreasuryView {
    /// Returns the eta of the proposal, 0 if it is not scheduled.
    #[ink(message)]
    fn timestamp(&self, proposal_id: ProposalId) -> Timestamp;

    #[ink(message)]
    fn is_queued(&self, proposal_id: ProposalId) -> bool;

    /// Returns true if the proposal is scheduled and its eta has been reached.
    #[ink(message)]
    fn is_ready(&self, proposal_id: ProposalId) -> bool;

    /// Returns true if the grace period after the proposal's eta has elapsed.
    /// Meaningful only for scheduled proposals.
    #[ink(message)]
    fn is_expired(&self, proposal_id: ProposalId) -> bool;

    /// Returns the id the given calls and description hash are scheduled under.
    #[ink(message)]
    fn hash_proposal(
        &self,
        targets: Vec<AccountId>,
        values: Vec<Balance>,
        calldatas: Vec<Vec<u8>>,
        description_hash: Hash,
    ) -> ProposalId;

    #[ink(message)]
    fn delay(&self) -> Timestamp;

    #[ink(message)]
    fn grace_period(&self) -> Timestamp;

    /// Returns the account of the registry consulted before upgrades.
    #[ink(message)]
    fn upgrade_registry(&self) -> AccountId;
}

#[ink::trait_definition]
/// Messages reachable only by the Treasury itself, i.e. through an executed proposal.
pub trait TreasuryManage {
    /// Sets the delay applied to proposals scheduled from now on.
    ///
    /// On success Emits 'DelayUpdated' event.
    ///
    /// # Errors
    ///
    /// Returns 'GateError::OnlySelf' if the caller is not the Treasury.
    #[ink(message)]
    fn update_delay(&mut self, new_delay: Timestamp) -> Result<(), TreasuryError>;

    /// Sets the grace period.
    ///
    /// On success Emits 'GracePeriodUpdated' event.
    ///
    /// # Errors
    ///
    /// Returns 'GateError::OnlySelf' if the caller is not the Treasury.
    #[ink(message)]
    fn update_grace_period(&mut self, new_grace_period: Timestamp) -> Result<(), TreasuryError>;

    /// Replaces the code of the Treasury with `code_hash`.
    ///
    /// On success Emits 'Upgraded' event.
    ///
    /// # Errors
    ///
    /// Returns 'GateError::OnlySelf' if the caller is not the Treasury.
    /// Returns 'GateError::UnapprovedUpgrade' if the registry doesn't approve the upgrade.
    /// Returns 'SetCodeHashFailed' if the code hash couldn't be set.
    #[ink(message)]
    fn upgrade_to(&mut self, code_hash: Hash) -> Result<(), TreasuryError>;
}

#[ink::trait_definition]
pub trait TokenReceiver {
    /// Accepts native currency.
    #[ink(message, payable)]
    fn receive(&mut self);

    /// Acknowledges receiving `value` of tokens sent by `from`.
    #[ink(message)]
    fn before_received(
        &mut self,
        operator: AccountId,
        from: AccountId,
        value: Balance,
        data: Vec<u8>,
    ) -> Result<(), TreasuryError>;
}

pub trait TreasuryInternal {
    fn _schedule(&mut self, proposal_id: ProposalId) -> Result<Timestamp, TreasuryError>;

    /// Executes the proposal performing its calls with `dispatcher`.
    ///
    /// The proposal is removed from the queue and locked before the first call. If a call fails
    /// the entry is put back and the lock released before returning the error.
    fn _execute<D: CallDispatcher>(
        &mut self,
        dispatcher: &mut D,
        targets: &[AccountId],
        values: &[Balance],
        calldatas: &[Vec<u8>],
        description_hash: &Hash,
    ) -> Result<ProposalId, TreasuryError>;

    fn _cancel(&mut self, proposal_id: &ProposalId) -> Result<(), TreasuryError>;
}
