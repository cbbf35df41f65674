use pendzl::traits::AccountId;

#[derive(Debug)]
#[pendzl::storage_item]
pub struct UpgradeStorage {
    registry: AccountId,
}

impl UpgradeStorage {
    pub fn new(registry: &AccountId) -> Self {
        UpgradeStorage {
            registry: *registry,
        }
    }

    /// Account of the `UpgradeRegistry` consulted before every code swap.
    pub fn registry(&self) -> AccountId {
        self.registry
    }
}
