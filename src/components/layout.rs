use leptos::*;

/// Page frame with the title card and footer
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="status">
            <h1>
                <span class="emoji">"⚡"</span>
                "wall-eno"
                <span class="emoji">"⚡"</span>
            </h1>
            {children()}
            <footer>"🌱 Smart charging powered by wall-eno 🤖"</footer>
        </div>
    }
}
