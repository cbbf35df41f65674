//! Authorization gate run right before an upgradeable module swaps its code hash.
//!
//! A swap is permitted only when the module is acting on itself and the
//! `(current, candidate)` code hash pair is a registered upgrade.

pub mod approvals;
pub mod errors;
pub mod self_call;

use pendzl::traits::Hash;

pub use approvals::{RegistryApprovals, UpgradeApprovals};
pub use errors::GateError;
pub use self_call::SelfCall;

pub fn authorize_upgrade<A: UpgradeApprovals + ?Sized>(
    _self_call: &SelfCall,
    approvals: &A,
    current: &Hash,
    candidate: &Hash,
) -> Result<(), GateError> {
    if !approvals.approves(current, candidate) {
        return Err(GateError::UnapprovedUpgrade(*candidate));
    }
    Ok(())
}
