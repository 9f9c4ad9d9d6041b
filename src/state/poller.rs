use std::cell::RefCell;
use std::rc::Rc;

use crate::api::StatusSource;

use super::board::StatusBoard;
use super::display::DisplayState;

/// Drives the fetch/render cycle against a status source.
///
/// Every cycle settles exactly once and never stops the cadence; failures end
/// up as text in the display's error field.
pub struct StatusPoller<S> {
    source: Rc<S>,
    board: Rc<RefCell<StatusBoard>>,
    render: Rc<dyn Fn(DisplayState)>,
}

impl<S> Clone for StatusPoller<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            board: Rc::clone(&self.board),
            render: Rc::clone(&self.render),
        }
    }
}

impl<S: StatusSource + 'static> StatusPoller<S> {
    /// Create a poller that hands every applied display state to `render`
    pub fn new(source: S, render: impl Fn(DisplayState) + 'static) -> Self {
        Self {
            source: Rc::new(source),
            board: Rc::new(RefCell::new(StatusBoard::default())),
            render: Rc::new(render),
        }
    }

    /// The display as of the last applied settle
    pub fn display(&self) -> DisplayState {
        self.board.borrow().display().clone()
    }

    /// Run one request/response/render cycle
    pub async fn poll_once(&self) {
        let ticket = self.board.borrow_mut().begin_cycle();
        log::debug!("Polling wall-eno status (cycle {})", ticket.sequence());

        let outcome = self.source.fetch_status().await;
        if let Err(e) = &outcome {
            log::warn!("wall-eno status cycle {} failed: {}", ticket.sequence(), e);
        }

        let settled = self.board.borrow_mut().settle(ticket, outcome);
        if let Some(state) = settled {
            (self.render)(state);
        }
    }

    /// Poll now, then every `interval_ms`. Dropping the returned handle stops
    /// the timer.
    #[cfg(target_arch = "wasm32")]
    pub fn start(&self, interval_ms: u32) -> gloo_timers::callback::Interval {
        use gloo_timers::callback::Interval;

        self.spawn_cycle();

        let poller = self.clone();
        Interval::new(interval_ms, move || poller.spawn_cycle())
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_cycle(&self) {
        let poller = self.clone();
        wasm_bindgen_futures::spawn_local(async move { poller.poll_once().await });
    }
}
