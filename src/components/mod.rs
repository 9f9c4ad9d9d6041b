pub mod layout;
pub mod status;

pub use status::{ErrorBlock, ReadingsTable, StatusPage};
