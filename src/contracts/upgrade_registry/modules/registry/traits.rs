use super::errors::UpgradeRegistryError;
use pendzl::traits::Hash;

#[ink::trait_definition]
/// Read side of the registry, consulted by upgradeable modules before they swap their code.
pub trait UpgradeRegistry {
    /// Returns true if migrating from the `base` code hash to the `upgrade` code hash was approved.
    #[ink(message)]
    fn is_registered_upgrade(&self, base: Hash, upgrade: Hash) -> bool;
}

#[ink::trait_definition]
pub trait UpgradeRegistryManage {
    /// Approves the migration from `base` to `upgrade`.
    ///
    /// On success emits `UpgradeRegistered` event.
    ///
    /// # Errors
    ///
    /// Returns `AccessControlError` if the caller is not allowed to manage upgrades.
    /// Returns `AlreadyRegistered` if the pair is already approved.
    #[ink(message)]
    fn register_upgrade(&mut self, base: Hash, upgrade: Hash) -> Result<(), UpgradeRegistryError>;

    /// Withdraws the approval of the migration from `base` to `upgrade`.
    ///
    /// On success emits `UpgradeRemoved` event.
    ///
    /// # Errors
    ///
    /// Returns `AccessControlError` if the caller is not allowed to manage upgrades.
    /// Returns `NotRegistered` if the pair is not approved.
    #[ink(message)]
    fn remove_upgrade(&mut self, base: Hash, upgrade: Hash) -> Result<(), UpgradeRegistryError>;
}
