use pendzl::traits::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum GateError {
    /// The message was not invoked by the module on itself.
    OnlySelf,
    /// The registry does not approve migrating the current code to the given code hash.
    UnapprovedUpgrade(Hash),
}
