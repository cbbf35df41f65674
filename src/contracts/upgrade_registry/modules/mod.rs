pub mod gate;
pub mod registry;
