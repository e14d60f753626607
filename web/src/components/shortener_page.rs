//! The shortener page: long url form, short url display, copy button.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::HttpBackend;
use crate::clipboard::BrowserClipboard;
use crate::components::toast::{ToastNotifier, Toaster};
use crate::config::Config;
use crate::shortener::{spawn_warm_up, Shortener};
use crate::state::{Event, PageState};

#[component]
pub fn ShortenerPage(config: Config) -> impl IntoView {
    let state = RwSignal::new(PageState::default());
    let notifier = ToastNotifier::new();
    let shortener = Shortener::new(HttpBackend::new(config), BrowserClipboard, notifier);

    // heroku-style hosts sleep; poke the backend before the user pastes a link
    spawn_warm_up(shortener.backend().clone());

    let shortener = StoredValue::new(shortener);
    let send = move |event: Event| {
        let shortener = shortener.get_value();
        leptos::task::spawn_local(async move {
            shortener.dispatch(&state, event).await;
        });
    };

    let is_loading = move || state.with(PageState::is_loading);

    view! {
        <main class="main-container">
            <section class="card long-url">
                <h4>"Paste your long URL here:"</h4>
                <form
                    class="input-container"
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        send(Event::Submit);
                    }
                >
                    <input
                        type="text"
                        placeholder="Long url"
                        prop:value=move || state.with(|s| s.long_url.clone())
                        prop:disabled=is_loading
                        on:input=move |ev| send(Event::Input(event_target_value(&ev)))
                    />
                    <Show when=is_loading>
                        <span class="spinner"></span>
                    </Show>
                    <button type="submit" disabled=is_loading>
                        "Shorten"
                    </button>
                </form>
            </section>

            <section class="card short-url">
                <h4>"Your short URL:"</h4>
                <div class="input-container">
                    <input
                        type="text"
                        placeholder="Short url"
                        readonly=true
                        prop:value=move || state.with(|s| s.short_url.clone())
                    />
                    <button type="button" on:click=move |_| send(Event::CopyRequested)>
                        "Copy"
                    </button>
                </div>
            </section>
        </main>

        <Toaster notifier=notifier />
    }
}
