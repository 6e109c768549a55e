pub mod browse;
pub mod catalog;
pub mod clipboard;
pub mod filter;
pub mod keys;
pub mod models;
pub mod speech;
pub mod store;

use std::sync::mpsc::Receiver;

use log::{info, warn};

use catalog::Catalog;
use clipboard::Clipboard;
use models::symbol::Symbol;
use speech::{SpeechEvent, SpeechPlayer, SpeechSynth, Utterance};
use store::{storage::StorageBackend, UserDataStore};

/// Initialize logging (reads RUST_LOG env var). Call once at startup.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A one-shot transient notice for the UI's toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
        }
    }
}

/// Wires the catalog, the user data store and the injected capabilities
/// together and exposes the user-facing operations. Presentation layers
/// hold one of these for the lifetime of the session.
pub struct App {
    catalog: Catalog,
    store: UserDataStore,
    speech: SpeechPlayer,
    clipboard: Box<dyn Clipboard>,
}

impl App {
    /// Loads persisted user data before returning, so `store().is_loaded()`
    /// holds from the first frame. The returned receiver carries speech
    /// playback events.
    pub fn new(
        catalog: Catalog,
        storage: Box<dyn StorageBackend>,
        synth: Box<dyn SpeechSynth>,
        clipboard: Box<dyn Clipboard>,
    ) -> (Self, Receiver<SpeechEvent>) {
        let store = UserDataStore::new(storage);
        store.load();
        let (speech, speech_events) = SpeechPlayer::new(synth);
        info!("Catalog ready with {} symbols", catalog.symbols().len());

        (
            Self {
                catalog,
                store,
                speech,
                clipboard,
            },
            speech_events,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &UserDataStore {
        &self.store
    }

    /// Detail lookup; `None` is the explicit not-found state the detail
    /// view renders.
    pub fn symbol(&self, symbol_id: &str) -> Option<&Symbol> {
        self.catalog.symbol(symbol_id)
    }

    /// Copies the symbol's glyph to the clipboard and records the use.
    /// Returns the toast notice for the outcome; a failed copy is reported
    /// once and not retried.
    pub fn copy_symbol(&self, symbol_id: &str) -> Notice {
        let Some(symbol) = self.catalog.symbol(symbol_id) else {
            return Notice::info("Symbol not found");
        };
        match self.clipboard.write_text(&symbol.symbol) {
            Ok(()) => {
                self.store.add_to_recently_used(symbol_id);
                Notice::success(format!("Copied \"{}\" to clipboard", symbol.symbol))
            }
            Err(err) => {
                warn!("Clipboard write failed: {err}");
                Notice::error("Copy failed, please try again")
            }
        }
    }

    /// Copies an arbitrary text field (the detail page's pinyin button).
    pub fn copy_text(&self, text: &str) -> Notice {
        match self.clipboard.write_text(text) {
            Ok(()) => Notice::success(format!("Copied \"{text}\" to clipboard")),
            Err(err) => {
                warn!("Clipboard write failed: {err}");
                Notice::error("Copy failed, please try again")
            }
        }
    }

    /// Requests pronunciation playback. Any playback already in flight is
    /// cancelled first; the outcome arrives on the speech event stream.
    pub fn speak_symbol(&self, symbol_id: &str) {
        if let Some(symbol) = self.catalog.symbol(symbol_id) {
            self.speech.speak(Utterance::chinese(&symbol.symbol));
        }
    }

    pub fn stop_speech(&self) {
        self.speech.cancel();
    }

    /// Records a symbol interaction (detail view, quick-access click) in
    /// the recently-used list.
    pub fn touch_symbol(&self, symbol_id: &str) {
        self.store.add_to_recently_used(symbol_id);
    }
}
