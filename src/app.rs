use leptos::*;

use crate::components::layout::Layout;
use crate::components::StatusPage;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Layout>
            <StatusPage />
        </Layout>
    }
}
