use pendzl::traits::{Hash, Timestamp};

/// Digest of a proposal's calls and description hash. See `hashes::hash_proposal`.
pub type ProposalId = Hash;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct TreasurySettings {
    /// Minimum time between scheduling a proposal and its earliest execution.
    pub delay: Timestamp,
    /// Time after the eta during which a proposal may still be executed.
    pub grace_period: Timestamp,
}
