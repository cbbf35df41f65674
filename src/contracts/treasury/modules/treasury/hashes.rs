use ink::{
    env::hash::{HashOutput, Sha2x256},
    prelude::vec::Vec,
    primitives::{AccountId, Hash},
};
use pendzl::traits::Balance;

use super::structs::ProposalId;

pub fn hash_description(description: &str) -> Hash {
    let mut output = <Sha2x256 as HashOutput>::Type::default();
    ink::env::hash_bytes::<Sha2x256>(description.as_bytes(), &mut output);
    output.into()
}

/// SCALE prefixes every sequence with its length, so the digest commits to the
/// number of calls and to the boundaries between calldatas, not only to their bytes.
pub fn hash_proposal(
    targets: &[AccountId],
    values: &[Balance],
    calldatas: &[Vec<u8>],
    description_hash: &Hash,
) -> ProposalId {
    let hash_data: Vec<u8> =
        scale::Encode::encode(&(targets, values, calldatas, description_hash));

    let mut output = <Sha2x256 as HashOutput>::Type::default();
    ink::env::hash_bytes::<Sha2x256>(&hash_data, &mut output);
    output.into()
}
