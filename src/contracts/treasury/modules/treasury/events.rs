pub use ink::{prelude::vec::Vec, primitives::AccountId};
use pendzl::traits::{Balance, Hash, Timestamp};

use super::structs::ProposalId;

#[ink::event]
pub struct ProposalScheduled {
    #[ink(topic)]
    pub proposal_id: ProposalId,
    pub eta: Timestamp,
}

#[ink::event]
pub struct ProposalExecuted {
    #[ink(topic)]
    pub proposal_id: ProposalId,
    pub targets: Vec<AccountId>,
    pub values: Vec<Balance>,
    pub calldatas: Vec<Vec<u8>>,
    pub description_hash: Hash,
}

#[ink::event]
pub struct ProposalCanceled {
    #[ink(topic)]
    pub proposal_id: ProposalId,
}

#[ink::event]
pub struct DelayUpdated {
    pub prev_delay: Timestamp,
    pub new_delay: Timestamp,
}

#[ink::event]
pub struct GracePeriodUpdated {
    pub prev_grace_period: Timestamp,
    pub new_grace_period: Timestamp,
}

#[ink::event]
pub struct Upgraded {
    #[ink(topic)]
    pub code_hash: Hash,
}
