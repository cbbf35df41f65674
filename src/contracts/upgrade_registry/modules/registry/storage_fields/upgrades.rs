use ink::storage::Mapping;
use pendzl::traits::Hash;

use crate::modules::registry::errors::UpgradeRegistryError;

#[derive(Default, Debug)]
#[pendzl::storage_item]
pub struct UpgradesStorage {
    registered: Mapping<(Hash, Hash), ()>,
}

impl UpgradesStorage {
    pub fn is_registered(&self, base: &Hash, upgrade: &Hash) -> bool {
        self.registered.contains((*base, *upgrade))
    }

    pub fn register(&mut self, base: &Hash, upgrade: &Hash) -> Result<(), UpgradeRegistryError> {
        if self.is_registered(base, upgrade) {
            return Err(UpgradeRegistryError::AlreadyRegistered);
        }
        self.registered.insert((*base, *upgrade), &());
        Ok(())
    }

    pub fn remove(&mut self, base: &Hash, upgrade: &Hash) -> Result<(), UpgradeRegistryError> {
        if !self.is_registered(base, upgrade) {
            return Err(UpgradeRegistryError::NotRegistered);
        }
        self.registered.remove((*base, *upgrade));
        Ok(())
    }
}
