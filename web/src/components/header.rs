//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="header">
            <div class="logo">"trimmer"</div>
        </nav>
    }
}
