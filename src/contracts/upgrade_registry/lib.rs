#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod modules;

pub use modules::{
    gate,
    registry::{errors::UpgradeRegistryError, traits::UpgradeRegistry},
};

/// Registry of approved implementation migrations.
/// Upgradeable modules (treasury, metadata renderer, ...) consult it through the `gate` module before swapping their code hash.
/// The registry is never mutated by the modules themselves - only accounts with the `UPGRADE_ADMIN` role manage it.
#[pendzl::implementation(AccessControl)]
#[ink::contract]
pub mod upgrade_registry {
    use crate::modules::registry::{
        errors::UpgradeRegistryError,
        events::{UpgradeRegistered, UpgradeRemoved},
        storage_fields::upgrades::UpgradesStorage,
        traits::{UpgradeRegistry, UpgradeRegistryManage},
    };

    pub const UPGRADE_ADMIN: RoleType = ink::selector_id!("UPGRADE_ADMIN");

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct UpgradeRegistryContract {
        #[storage_field]
        access: AccessControlData,
        #[storage_field]
        upgrades: UpgradesStorage,
    }

    impl UpgradeRegistryContract {
        #[ink(constructor)]
        pub fn new(admin: AccountId) -> Result<Self, UpgradeRegistryError> {
            let mut instance = UpgradeRegistryContract {
                access: AccessControlData::new(Some(admin)),
                upgrades: Default::default(),
            };

            instance._grant_role(UPGRADE_ADMIN, Some(admin))?;

            Ok(instance)
        }
    }

    impl UpgradeRegistry for UpgradeRegistryContract {
        #[ink(message)]
        fn is_registered_upgrade(&self, base: Hash, upgrade: Hash) -> bool {
            self.upgrades.is_registered(&base, &upgrade)
        }
    }

    impl UpgradeRegistryManage for UpgradeRegistryContract {
        #[ink(message)]
        fn register_upgrade(&mut self, base: Hash, upgrade: Hash) -> Result<(), UpgradeRegistryError> {
            self._ensure_has_role(UPGRADE_ADMIN, Some(self.env().caller()))?;

            self.upgrades.register(&base, &upgrade)?;
            self.env()
                .emit_event::<UpgradeRegistered>(UpgradeRegistered { base, upgrade });
            Ok(())
        }

        #[ink(message)]
        fn remove_upgrade(&mut self, base: Hash, upgrade: Hash) -> Result<(), UpgradeRegistryError> {
            self._ensure_has_role(UPGRADE_ADMIN, Some(self.env().caller()))?;

            self.upgrades.remove(&base, &upgrade)?;
            self.env()
                .emit_event::<UpgradeRemoved>(UpgradeRemoved { base, upgrade });
            Ok(())
        }
    }

}
