use pendzl::contracts::access_control::AccessControlError;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum UpgradeRegistryError {
    AccessControlError(AccessControlError),

    /// The (base, upgrade) pair is already an approved upgrade path.
    AlreadyRegistered,
    /// The (base, upgrade) pair was never registered or has been removed.
    NotRegistered,
}

impl From<AccessControlError> for UpgradeRegistryError {
    fn from(e: AccessControlError) -> Self {
        UpgradeRegistryError::AccessControlError(e)
    }
}
