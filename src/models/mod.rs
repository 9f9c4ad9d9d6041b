pub mod status;

pub use status::{reading_text, RawReading, StatusSnapshot};
