pub mod dispatch;
pub mod errors;
pub mod events;
pub mod hashes;
pub mod storage_fields;
pub mod structs;
pub mod traits;
