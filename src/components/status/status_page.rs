use leptos::*;

use crate::api::ApiClient;
use crate::config::Config;
use crate::state::{DisplayState, StatusPoller};

use super::error_block::ErrorBlock;
use super::readings_table::ReadingsTable;

/// Live status page, polling the device for as long as it is mounted
#[component]
pub fn StatusPage() -> impl IntoView {
    let config = Config::from_env();
    let display = create_rw_signal(DisplayState::default());

    let poller = StatusPoller::new(ApiClient::new(&config), move |state| display.set(state));

    #[cfg(target_arch = "wasm32")]
    {
        log::info!(
            "Polling {}{} every {} ms",
            config.api_url,
            config.status_path,
            config.poll_interval_ms
        );

        let interval = poller.start(config.poll_interval_ms);
        on_cleanup(move || drop(interval));
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = (poller, config);

    view! {
        <ReadingsTable display=display.read_only() />
        <ErrorBlock message=Signal::derive(move || display.with(|d| d.error.clone())) />
    }
}
