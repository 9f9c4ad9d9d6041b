mod error_block;
mod readings_table;
mod status_page;

pub use error_block::ErrorBlock;
pub use readings_table::ReadingsTable;
pub use status_page::StatusPage;
