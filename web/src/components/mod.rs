//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header;
mod shortener_page;
mod toast;

pub use header::Header;
pub use shortener_page::ShortenerPage;
pub use toast::{ToastNotifier, Toaster};
