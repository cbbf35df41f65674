#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod modules;



/// DAO Treasury holding the assets of the DAO.
/// Anything the treasury does - spending, changing its own settings, upgrading its code - is a proposal:
/// a batch of calls that the owner schedules, and that can be executed only after the delay has passed and before the grace period elapses.
/// A proposal is identified by the hash of its content, so executed or canceled proposals can be scheduled again.
///
/// Settings and code upgrades are reachable only through the Treasury's own executed proposals.
#[pendzl::implementation(AccessControl)]
#[ink::contract]
pub mod treasury {
    pub use crate::modules::treasury::{
        dispatch::{CallDispatcher, DispatchError, EnvDispatcher},
        errors::TreasuryError,
        events::{
            DelayUpdated, GracePeriodUpdated, ProposalCanceled, ProposalExecuted,
            ProposalScheduled, Upgraded,
        },
        hashes::{hash_description, hash_proposal},
        storage_fields::{proposals::ProposalsStorage, upgrade::UpgradeStorage},
        structs::{ProposalId, TreasurySettings},
        traits::{TokenReceiver, Treasury, TreasuryInternal, TreasuryManage, TreasuryView},
    };
    pub use ink::prelude::vec::Vec;
    use ink::codegen::Env;
    use pendzl::traits::Flush;
    pub use upgrade_registry::gate::{
        authorize_upgrade, GateError, RegistryApprovals, SelfCall, UpgradeApprovals,
    };

    pub const OWNER: RoleType = ink::selector_id!("OWNER");
    pub const INITIAL_GRACE_PERIOD: Timestamp = 14 * 24 * 60 * 60 * 1000;

    #[ink(storage)]
    #[derive(pendzl::traits::StorageFieldGetter)]
    pub struct TreasuryContract {
        #[storage_field]
        access: AccessControlData,
        #[storage_field]
        proposals: ProposalsStorage,
        #[storage_field]
        upgrade: UpgradeStorage,
    }

    impl TreasuryContract {
        #[ink(constructor)]
        pub fn new(
            owner: AccountId,
            upgrade_registry: AccountId,
            delay: Timestamp,
        ) -> Result<Self, TreasuryError> {
            let mut instance = TreasuryContract {
                access: AccessControlData::new(Some(owner)),
                proposals: ProposalsStorage::new(delay, INITIAL_GRACE_PERIOD),
                upgrade: UpgradeStorage::new(&upgrade_registry),
            };

            instance._grant_role(OWNER, Some(owner))?;

            Ok(instance)
        }

        fn _self_call(&self) -> Result<SelfCall, TreasuryError> {
            Ok(SelfCall::verify(
                &self.env().caller(),
                &self.env().account_id(),
            )?)
        }
    }

    impl Treasury for TreasuryContract {
        #[ink(message)]
        fn schedule(&mut self, proposal_id: ProposalId) -> Result<Timestamp, TreasuryError> {
            self._ensure_has_role(OWNER, Some(self.env().caller()))?;
            self._schedule(proposal_id)
        }

        #[ink(message)]
        fn execute(
            &mut self,
            targets: Vec<AccountId>,
            values: Vec<Balance>,
            calldatas: Vec<Vec<u8>>,
            description_hash: Hash,
        ) -> Result<ProposalId, TreasuryError> {
            self._ensure_has_role(OWNER, Some(self.env().caller()))?;
            self._execute(
                &mut EnvDispatcher,
                &targets,
                &values,
                &calldatas,
                &description_hash,
            )
        }

        #[ink(message)]
        fn cancel(&mut self, proposal_id: ProposalId) -> Result<(), TreasuryError> {
            self._ensure_has_role(OWNER, Some(self.env().caller()))?;
            self._cancel(&proposal_id)
        }
    }

    impl TreasuryInternal for TreasuryContract {
        fn _schedule(&mut self, proposal_id: ProposalId) -> Result<Timestamp, TreasuryError> {
            let eta = self
                .proposals
                .schedule(&proposal_id, self.env().block_timestamp())?;

            self.env()
                .emit_event::<ProposalScheduled>(ProposalScheduled { proposal_id, eta });

            Ok(eta)
        }

        fn _execute<D: CallDispatcher>(
            &mut self,
            dispatcher: &mut D,
            targets: &[AccountId],
            values: &[Balance],
            calldatas: &[Vec<u8>],
            description_hash: &Hash,
        ) -> Result<ProposalId, TreasuryError> {
            if targets.len() != values.len() || targets.len() != calldatas.len() {
                return Err(TreasuryError::LengthMismatch);
            }

            let proposal_id = hash_proposal(targets, values, calldatas, description_hash);
            let now = self.env().block_timestamp();

            if self.proposals.is_executing(&proposal_id) {
                return Err(TreasuryError::ExecutionInProgress(proposal_id));
            }
            if !self.proposals.is_ready(&proposal_id, now) {
                return Err(TreasuryError::NotReady(proposal_id));
            }
            if self.proposals.is_expired(&proposal_id, now) {
                return Err(TreasuryError::Expired(proposal_id));
            }

            let eta = self.proposals.take(&proposal_id)?;
            self.proposals.lock(&proposal_id)?;

            for (index, ((target, value), calldata)) in
                targets.iter().zip(values).zip(calldatas).enumerate()
            {
                self.flush();
                let result = dispatcher.dispatch(target, *value, calldata);
                self.load();

                if let Err(e) = result {
                    ink::env::debug_println!(
                        "call {} of proposal {:?} failed: {:?}",
                        index,
                        proposal_id,
                        e
                    );
                    self.proposals.unlock(&proposal_id);
                    self.proposals.restore(&proposal_id, eta);
                    return Err(TreasuryError::ExecutionFailed(index as u32));
                }
            }

            self.proposals.unlock(&proposal_id);

            self.env().emit_event::<ProposalExecuted>(ProposalExecuted {
                proposal_id,
                targets: targets.to_vec(),
                values: values.to_vec(),
                calldatas: calldatas.to_vec(),
                description_hash: *description_hash,
            });

            Ok(proposal_id)
        }

        fn _cancel(&mut self, proposal_id: &ProposalId) -> Result<(), TreasuryError> {
            self.proposals.take(proposal_id)?;

            self.env()
                .emit_event::<ProposalCanceled>(ProposalCanceled {
                    proposal_id: *proposal_id,
                });

            Ok(())
        }
    }

    impl TreasuryView for TreasuryContract {
        #[ink(message)]
        fn timestamp(&self, proposal_id: ProposalId) -> Timestamp {
            self.proposals.timestamp(&proposal_id)
        }

        #[ink(message)]
        fn is_queued(&self, proposal_id: ProposalId) -> bool {
            self.proposals.is_queued(&proposal_id)
        }

        #[ink(message)]
        fn is_ready(&self, proposal_id: ProposalId) -> bool {
            self.proposals
                .is_ready(&proposal_id, self.env().block_timestamp())
        }

        #[ink(message)]
        fn is_expired(&self, proposal_id: ProposalId) -> bool {
            self.proposals
                .is_expired(&proposal_id, self.env().block_timestamp())
        }

        #[ink(message)]
        fn hash_proposal(
            &self,
            targets: Vec<AccountId>,
            values: Vec<Balance>,
            calldatas: Vec<Vec<u8>>,
            description_hash: Hash,
        ) -> ProposalId {
            hash_proposal(&targets, &values, &calldatas, &description_hash)
        }

        #[ink(message)]
        fn delay(&self) -> Timestamp {
            self.proposals.delay()
        }

        #[ink(message)]
        fn grace_period(&self) -> Timestamp {
            self.proposals.grace_period()
        }

        #[ink(message)]
        fn upgrade_registry(&self) -> AccountId {
            self.upgrade.registry()
        }
    }

    impl TreasuryManage for TreasuryContract {
        #[ink(message)]
        fn update_delay(&mut self, new_delay: Timestamp) -> Result<(), TreasuryError> {
            let self_call = self._self_call()?;

            let prev_delay = self.proposals.set_delay(&self_call, new_delay);
            self.env().emit_event::<DelayUpdated>(DelayUpdated {
                prev_delay,
                new_delay,
            });

            Ok(())
        }

        #[ink(message)]
        fn update_grace_period(&mut self, new_grace_period: Timestamp) -> Result<(), TreasuryError> {
            let self_call = self._self_call()?;

            let prev_grace_period = self
                .proposals
                .set_grace_period(&self_call, new_grace_period);
            self.env()
                .emit_event::<GracePeriodUpdated>(GracePeriodUpdated {
                    prev_grace_period,
                    new_grace_period,
                });

            Ok(())
        }

        #[ink(message)]
        fn upgrade_to(&mut self, code_hash: Hash) -> Result<(), TreasuryError> {
            let self_call = self._self_call()?;

            let current = self
                .env()
                .own_code_hash()
                .map_err(|_| TreasuryError::SetCodeHashFailed)?;
            let registry = RegistryApprovals::new(self.upgrade.registry());
            if let Err(e) = authorize_upgrade(&self_call, &registry, &current, &code_hash) {
                ink::env::debug_println!("upgrade to {:?} rejected: {:?}", code_hash, e);
                return Err(e.into());
            }

            self.env()
                .set_code_hash(&code_hash)
                .map_err(|_| TreasuryError::SetCodeHashFailed)?;
            self.env()
                .emit_event::<Upgraded>(Upgraded { code_hash });

            Ok(())
        }
    }

    impl TokenReceiver for TreasuryContract {
        #[ink(message, payable)]
        fn receive(&mut self) {}

        #[ink(message)]
        fn before_received(
            &mut self,
            _operator: AccountId,
            _from: AccountId,
            _value: Balance,
            _data: Vec<u8>,
        ) -> Result<(), TreasuryError> {
            Ok(())
        }
    }
}
