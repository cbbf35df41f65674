pub mod treasury;
