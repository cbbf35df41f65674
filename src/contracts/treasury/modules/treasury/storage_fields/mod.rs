pub mod proposals;
pub mod upgrade;
