//! ==============================================================================
//! state.rs - page state machine
//! ==============================================================================
//!
//! the page moves Idle -> Submitting -> {Succeeded, Failed}. the terminal
//! phases behave exactly like Idle, they only remember the last outcome.
//!
//! `PageState::apply` is pure: it mutates the state and returns the single
//! side effect the caller has to perform. nothing here touches the network,
//! the clipboard or the dom.
//!
//! ==============================================================================

use crate::validate::is_valid_url;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";
pub const REQUEST_FAILED_MESSAGE: &str =
    "there was a problem processing your request, please try again";
pub const NOTHING_TO_COPY_MESSAGE: &str = "shorten your url first";
pub const COPIED_MESSAGE: &str = "Copied";

// ==============================================================================
// toasts
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// a transient user-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

// ==============================================================================
// state, events, effects
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// raw input, exactly as typed
    pub long_url: String,
    /// empty until the backend hands out a code
    pub short_url: String,
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// keystroke in the long url input
    Input(String),
    Submit,
    /// backend answered 200, carries the full short url
    Shortened(String),
    /// backend answered with any other status
    Rejected(u16),
    /// network or decode failure during submission
    Failed(String),
    CopyRequested,
    /// clipboard write resolved
    Copied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Toast(Toast),
    /// POST the (trimmed) long url to the backend
    Shorten { long_url: String },
    WriteClipboard(String),
    /// diagnostics only, never shown to the user
    Log(String),
}

impl PageState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Applies one event and returns the effect to run.
    pub fn apply(&mut self, event: Event) -> Effect {
        match event {
            Event::Input(text) => {
                self.long_url = text;
                Effect::None
            }
            Event::Submit => self.submit(),
            Event::Shortened(short_url) => {
                self.short_url = short_url;
                self.phase = Phase::Succeeded;
                Effect::None
            }
            Event::Rejected(_) => {
                self.phase = Phase::Failed;
                Effect::Toast(Toast::error(REQUEST_FAILED_MESSAGE))
            }
            // no toast on this path, only a log line
            Event::Failed(reason) => {
                self.phase = Phase::Failed;
                Effect::Log(reason)
            }
            Event::CopyRequested => {
                if self.short_url.is_empty() {
                    Effect::Toast(Toast::error(NOTHING_TO_COPY_MESSAGE))
                } else {
                    Effect::WriteClipboard(self.short_url.clone())
                }
            }
            Event::Copied => {
                self.short_url.clear();
                Effect::Toast(Toast::success(COPIED_MESSAGE))
            }
        }
    }

    fn submit(&mut self) -> Effect {
        if self.is_loading() {
            return Effect::None;
        }

        let long_url = self.long_url.trim();
        if !is_valid_url(long_url) {
            return Effect::Toast(Toast::error(INVALID_URL_MESSAGE));
        }

        let long_url = long_url.to_string();
        self.phase = Phase::Submitting;
        Effect::Shorten { long_url }
    }
}

// ==============================================================================
// tests
// ==============================================================================
