pub use ink::primitives::Hash;

#[ink::event]
pub struct UpgradeRegistered {
    #[ink(topic)]
    pub base: Hash,
    #[ink(topic)]
    pub upgrade: Hash,
}

#[ink::event]
pub struct UpgradeRemoved {
    #[ink(topic)]
    pub base: Hash,
    #[ink(topic)]
    pub upgrade: Hash,
}
