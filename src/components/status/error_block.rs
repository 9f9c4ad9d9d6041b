use leptos::*;

/// Error banner, rendered only while there is something to report.
///
/// The warning marker comes from the stylesheet, so the element's text is
/// exactly the message.
#[component]
pub fn ErrorBlock(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty())>
            <div id="error-block">{move || message.get()}</div>
        </Show>
    }
}
