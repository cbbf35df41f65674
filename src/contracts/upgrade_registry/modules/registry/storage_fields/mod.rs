pub mod upgrades;
