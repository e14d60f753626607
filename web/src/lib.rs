//! ==============================================================================
//! lib.rs - trimmer url shortener page
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm page for shortening a long url through the trimmer
//!     backend and copying the result to the clipboard.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - backend address baked in at build time (TRIMMER_BACKEND_URL)
//!     - page logic is a pure state machine (state.rs) driven by
//!       shortener.rs, so it runs natively under test
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use tracing::{error, info};
use wasm_bindgen::prelude::*;

pub mod api;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod shortener;
pub mod state;
pub mod validate;

use components::{Header, ShortenerPage};
use config::Config;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match Config::from_build_env() {
        Ok(config) => {
            info!(backend = config.backend_url(), "starting trimmer");
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            error!(error = %e, "trimmer is misconfigured");
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigNotice message=message /> });
        }
    }
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App(config: Config) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="trimmer" />
        <Meta name="description" content="Paste a long url, get a short one" />
        <Header />
        <div class="container">
            <ShortenerPage config=config />
        </div>
    }
}

#[component]
fn ConfigNotice(message: String) -> impl IntoView {
    view! {
        <Header />
        <div class="container">
            <div class="result error">
                <div class="result-label">"Configuration error"</div>
                <div class="result-value">{message}</div>
            </div>
        </div>
    }
}
