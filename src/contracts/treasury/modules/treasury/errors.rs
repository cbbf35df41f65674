use pendzl::{contracts::access_control::AccessControlError, math::errors::MathError};
use upgrade_registry::gate::GateError;

use super::structs::ProposalId;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum TreasuryError {
    MathError(MathError),
    AccessControlError(AccessControlError),
    GateError(GateError),

    /// The proposal is already scheduled - it has to be executed or canceled first.
    AlreadyQueued(ProposalId),
    /// The proposal is not scheduled - it was never scheduled, or it was already executed or canceled.
    NotQueued(ProposalId),
    /// The proposal is not scheduled or its eta has not been reached yet.
    NotReady(ProposalId),
    /// The grace period of the proposal has elapsed.
    Expired(ProposalId),
    /// The eta of the proposal would be 0, which marks unscheduled proposals.
    ZeroEta(ProposalId),
    /// The proposal is being executed right now.
    ExecutionInProgress(ProposalId),
    /// Targets, values and calldatas differ in length.
    LengthMismatch,
    /// The call with the given index reverted. Nothing of the proposal was applied.
    ExecutionFailed(u32),
    SetCodeHashFailed,
}

impl From<MathError> for TreasuryError {
    fn from(e: MathError) -> Self {
        TreasuryError::MathError(e)
    }
}

impl From<AccessControlError> for TreasuryError {
    fn from(e: AccessControlError) -> Self {
        TreasuryError::AccessControlError(e)
    }
}

impl From<GateError> for TreasuryError {
    fn from(e: GateError) -> Self {
        TreasuryError::GateError(e)
    }
}
