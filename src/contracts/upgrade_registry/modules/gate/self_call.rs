use pendzl::traits::AccountId;

use super::errors::GateError;

/// Capability proving that the running message was dispatched by the module to itself,
/// i.e. it is reachable only through the module's own governed execution path.
///
/// The only way to obtain one is [`SelfCall::verify`]; mutators that must never be
/// reachable by an owner directly take a `&SelfCall` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfCall {
    module: AccountId,
}

impl SelfCall {
    pub fn verify(caller: &AccountId, module: &AccountId) -> Result<Self, GateError> {
        if caller != module {
            return Err(GateError::OnlySelf);
        }
        Ok(Self { module: *module })
    }

    pub fn module(&self) -> AccountId {
        self.module
    }
}
