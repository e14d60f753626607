//! ==============================================================================
//! shortener.rs - runs the page state machine against the outside world
//! ==============================================================================
//!
//! `Shortener::dispatch` feeds an event into the state, performs the effect
//! that comes back and keeps going while effects produce follow-up events
//! (a backend reply, a resolved clipboard write).
//!
//! the backend, the clipboard and the toast sink are traits so the whole
//! flow can run natively in tests against in-memory fakes.
//!
//! ==============================================================================

use std::cell::RefCell;

use leptos::prelude::*;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, Backend};
use crate::clipboard::Clipboard;
use crate::state::{Effect, Event, PageState, Toast};

/// Where toasts end up.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Something holding a `PageState` that events can be applied to.
pub trait StateStore {
    fn apply(&self, event: Event) -> Effect;
}

impl StateStore for RwSignal<PageState> {
    fn apply(&self, event: Event) -> Effect {
        let mut effect = Effect::None;
        self.update(|state| effect = state.apply(event));
        effect
    }
}

impl StateStore for RefCell<PageState> {
    fn apply(&self, event: Event) -> Effect {
        self.borrow_mut().apply(event)
    }
}

/// Maps a shorten call result onto the event the state machine expects.
pub fn outcome_event(result: Result<String, ApiError>) -> Event {
    match result {
        Ok(short_url) => Event::Shortened(short_url),
        Err(ApiError::Status(status)) => Event::Rejected(status),
        Err(other) => Event::Failed(other.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct Shortener<B, C, N> {
    backend: B,
    clipboard: C,
    notifier: N,
}

impl<B, C, N> Shortener<B, C, N>
where
    B: Backend,
    C: Clipboard,
    N: Notifier,
{
    pub fn new(backend: B, clipboard: C, notifier: N) -> Self {
        Self {
            backend,
            clipboard,
            notifier,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Applies `event` and every event its effects lead to.
    pub async fn dispatch(&self, store: &impl StateStore, event: Event) {
        let mut next = Some(event);
        while let Some(event) = next.take() {
            let effect = store.apply(event);
            next = self.run(effect).await;
        }
    }

    async fn run(&self, effect: Effect) -> Option<Event> {
        match effect {
            Effect::None => None,
            Effect::Toast(toast) => {
                debug!(kind = ?toast.kind, message = %toast.message, "toast");
                self.notifier.notify(toast);
                None
            }
            Effect::Log(reason) => {
                error!(%reason, "shorten request failed");
                None
            }
            Effect::Shorten { long_url } => {
                debug!(%long_url, "submitting long url");
                Some(outcome_event(self.backend.shorten(&long_url).await))
            }
            Effect::WriteClipboard(text) => match self.clipboard.write_text(&text).await {
                Ok(()) => Some(Event::Copied),
                Err(e) => {
                    warn!(error = %e, "could not copy short url");
                    None
                }
            },
        }
    }
}

/// Best-effort `GET` to wake the backend host; the outcome is only logged.
pub async fn warm_up(backend: &impl Backend) {
    match backend.ping().await {
        Ok(()) => debug!("backend warm-up ping answered"),
        Err(e) => info!(error = %e, "backend warm-up ping failed"),
    }
}

/// Detaches the warm-up ping from the page. Nothing observes its result.
pub fn spawn_warm_up<B: Backend + 'static>(backend: B) {
    leptos::task::spawn_local(async move { warm_up(&backend).await });
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::config::Config;
    use crate::state::{Phase, COPIED_MESSAGE, INVALID_URL_MESSAGE, NOTHING_TO_COPY_MESSAGE, REQUEST_FAILED_MESSAGE};

    struct FakeBackend {
        config: Config,
        reply: Result<String, ApiError>,
        posted: RefCell<Vec<String>>,
        pings: Cell<usize>,
    }

    impl FakeBackend {
        fn replying(reply: Result<&str, ApiError>) -> Self {
            Self {
                config: Config::new("https://short.ly").unwrap(),
                reply: reply.map(str::to_string),
                posted: RefCell::new(Vec::new()),
                pings: Cell::new(0),
            }
        }
    }

    impl Backend for FakeBackend {
        async fn ping(&self) -> Result<(), ApiError> {
            self.pings.set(self.pings.get() + 1);
            Err(ApiError::Network("asleep".to_string()))
        }

        async fn shorten(&self, long_url: &str) -> Result<String, ApiError> {
            self.posted.borrow_mut().push(long_url.to_string());
            self.reply.clone().map(|code| self.config.short_url(&code))
        }
    }

    #[derive(Default)]
    struct FakeClipboard {
        fail: bool,
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Rejected("denied".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        toasts: RefCell<Vec<Toast>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }

    type TestShortener = Shortener<FakeBackend, FakeClipboard, RecordingNotifier>;

    fn shortener(reply: Result<&str, ApiError>) -> TestShortener {
        Shortener::new(
            FakeBackend::replying(reply),
            FakeClipboard::default(),
            RecordingNotifier::default(),
        )
    }

    async fn submit(shortener: &TestShortener, store: &RefCell<PageState>, input: &str) {
        shortener.dispatch(store, Event::Input(input.to_string())).await;
        shortener.dispatch(store, Event::Submit).await;
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_backend() {
        let shortener = shortener(Ok("abc123"));
        let store = RefCell::new(PageState::default());

        for input in ["example.com/page", "www.example.com", "ftp://example.com"] {
            submit(&shortener, &store, input).await;
        }

        assert!(shortener.backend.posted.borrow().is_empty());
        assert_eq!(shortener.notifier.toasts.borrow().len(), 3);
        assert!(shortener
            .notifier
            .toasts
            .borrow()
            .iter()
            .all(|t| *t == Toast::error(INVALID_URL_MESSAGE)));
        assert!(!store.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_success_sets_short_url() {
        let shortener = shortener(Ok("abc123"));
        let store = RefCell::new(PageState::default());

        submit(&shortener, &store, " https://example.com/page ").await;

        assert_eq!(*shortener.backend.posted.borrow(), vec!["https://example.com/page"]);
        let state = store.borrow();
        assert_eq!(state.short_url, "https://short.ly/abc123");
        assert_eq!(state.phase, Phase::Succeeded);
        assert!(!state.is_loading());
        assert!(shortener.notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_non_200_toasts_and_keeps_short_url() {
        let shortener = shortener(Err(ApiError::Status(404)));
        let store = RefCell::new(PageState {
            short_url: "https://short.ly/old".to_string(),
            ..PageState::default()
        });

        submit(&shortener, &store, "https://example.com/page").await;

        assert_eq!(store.borrow().short_url, "https://short.ly/old");
        assert!(!store.borrow().is_loading());
        assert_eq!(
            *shortener.notifier.toasts.borrow(),
            vec![Toast::error(REQUEST_FAILED_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_network_error_is_silent() {
        let shortener = shortener(Err(ApiError::Network("offline".to_string())));
        let store = RefCell::new(PageState::default());

        submit(&shortener, &store, "https://example.com/page").await;

        assert_eq!(shortener.backend.posted.borrow().len(), 1);
        assert!(!store.borrow().is_loading());
        assert!(store.borrow().short_url.is_empty());
        assert!(shortener.notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_decode_error_is_silent() {
        let shortener = shortener(Err(ApiError::Decode("missing field".to_string())));
        let store = RefCell::new(PageState::default());

        submit(&shortener, &store, "https://example.com/page").await;

        assert_eq!(store.borrow().phase, Phase::Failed);
        assert!(shortener.notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_copy_without_result_skips_clipboard() {
        let shortener = shortener(Ok("abc123"));
        let store = RefCell::new(PageState::default());

        shortener.dispatch(&store, Event::CopyRequested).await;

        assert!(shortener.clipboard.written.borrow().is_empty());
        assert_eq!(
            *shortener.notifier.toasts.borrow(),
            vec![Toast::error(NOTHING_TO_COPY_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_copy_writes_exact_url_then_clears() {
        let shortener = shortener(Ok("abc123"));
        let store = RefCell::new(PageState::default());

        submit(&shortener, &store, "https://example.com/page").await;
        shortener.dispatch(&store, Event::CopyRequested).await;

        assert_eq!(*shortener.clipboard.written.borrow(), vec!["https://short.ly/abc123"]);
        assert!(store.borrow().short_url.is_empty());
        assert_eq!(
            *shortener.notifier.toasts.borrow(),
            vec![Toast::success(COPIED_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn test_failed_copy_keeps_short_url() {
        let shortener = Shortener::new(
            FakeBackend::replying(Ok("abc123")),
            FakeClipboard {
                fail: true,
                ..FakeClipboard::default()
            },
            RecordingNotifier::default(),
        );
        let store = RefCell::new(PageState::default());

        submit(&shortener, &store, "https://example.com/page").await;
        shortener.dispatch(&store, Event::CopyRequested).await;

        assert_eq!(store.borrow().short_url, "https://short.ly/abc123");
        assert!(shortener.notifier.toasts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_warm_up_swallows_failure() {
        let backend = FakeBackend::replying(Ok("abc123"));
        warm_up(&backend).await;
        assert_eq!(backend.pings.get(), 1);
        assert!(backend.posted.borrow().is_empty());
    }

    #[test]
    fn test_outcome_event_mapping() {
        assert_eq!(
            outcome_event(Ok("https://short.ly/a".to_string())),
            Event::Shortened("https://short.ly/a".to_string())
        );
        assert_eq!(outcome_event(Err(ApiError::Status(503))), Event::Rejected(503));
        assert!(matches!(
            outcome_event(Err(ApiError::Network("x".to_string()))),
            Event::Failed(_)
        ));
    }
}
