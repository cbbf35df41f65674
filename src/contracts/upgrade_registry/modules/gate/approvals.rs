use ink::codegen::TraitCallBuilder;
use pendzl::traits::{AccountId, Hash};

use crate::modules::registry::traits::UpgradeRegistry;

/// Read-only view of the approved upgrade paths.
pub trait UpgradeApprovals {
    fn approves(&self, base: &Hash, upgrade: &Hash) -> bool;
}

/// Queries an on-chain `UpgradeRegistry` contract.
///
/// A registry that cannot be reached or reverts approves nothing.
#[derive(Debug, Clone, Copy)]
pub struct RegistryApprovals {
    registry: AccountId,
}

impl RegistryApprovals {
    pub fn new(registry: AccountId) -> Self {
        Self { registry }
    }
}

impl UpgradeApprovals for RegistryApprovals {
    fn approves(&self, base: &Hash, upgrade: &Hash) -> bool {
        let registry: ink::contract_ref!(UpgradeRegistry, ink::env::DefaultEnvironment) = self.registry.into();
        matches!(
            registry
                .call()
                .is_registered_upgrade(*base, *upgrade)
                .call_v1()
                .try_invoke(),
            Ok(Ok(true))
        )
    }
}
