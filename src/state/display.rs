use crate::api::ApiError;
use crate::models::{reading_text, StatusSnapshot};

/// Shown in the data fields until the first successful poll
pub const PLACEHOLDER: &str = "-";

/// Prepended to transport, protocol and parse failures
pub const FAILURE_PREFIX: &str = "Failed to update wall-eno status: ";

/// Text currently shown in the five live regions of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub home_power: String,
    pub home_raw: String,
    pub wallbox_power: String,
    pub wallbox_current: String,
    pub error: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            home_power: PLACEHOLDER.to_string(),
            home_raw: PLACEHOLDER.to_string(),
            wallbox_power: PLACEHOLDER.to_string(),
            wallbox_current: PLACEHOLDER.to_string(),
            error: String::new(),
        }
    }
}

impl DisplayState {
    /// Project one poll outcome onto the display.
    ///
    /// A snapshot replaces every field, including the error (so an empty
    /// device error clears the block). A failure only replaces the error and
    /// keeps the last known readings.
    pub fn settle(&self, outcome: &Result<StatusSnapshot, ApiError>) -> Self {
        match outcome {
            Ok(snapshot) => Self {
                home_power: reading_text(&snapshot.home_power),
                home_raw: snapshot.home_raw.to_string(),
                wallbox_power: reading_text(&snapshot.wallbox_power),
                wallbox_current: reading_text(&snapshot.wallbox_current),
                error: snapshot.device_error().to_string(),
            },
            Err(err) => Self {
                error: format!("{}{}", FAILURE_PREFIX, err),
                ..self.clone()
            },
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
