pub mod board;
pub mod display;
pub mod poller;

pub use board::{CycleTicket, StatusBoard};
pub use display::{DisplayState, FAILURE_PREFIX, PLACEHOLDER};
pub use poller::StatusPoller;
