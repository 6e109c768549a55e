//! Text-to-speech playback.
//!
//! The synthesizer itself is an external capability; this module owns the
//! playback discipline around it: requests are serialized on a dedicated
//! thread and any in-flight playback is cancelled before the next one
//! starts, so there is at most one active playback at a time.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Result;
use log::error;

/// A single speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Playback settings for Chinese character pronunciation.
    pub fn chinese(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: "zh-CN".to_string(),
            rate: 0.8,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

/// Playback progress, surfaced to the UI as one-shot transient notices.
/// A failed request is reported once and never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Started,
    Ended,
    Errored(String),
}

/// External speech capability. `speak` starts playback without blocking
/// and reports progress through the event sender; `cancel` drops whatever
/// is currently playing.
pub trait SpeechSynth: Send {
    fn speak(&mut self, utterance: &Utterance, events: &Sender<SpeechEvent>) -> Result<()>;
    fn cancel(&mut self);
}

enum SpeechCommand {
    Speak(Utterance),
    Cancel,
}

/// Handle to the playback thread. Requests are fire-and-forget; outcomes
/// arrive on the event receiver returned from `new`.
pub struct SpeechPlayer {
    tx: Sender<SpeechCommand>,
}

impl SpeechPlayer {
    pub fn new(mut synth: Box<dyn SpeechSynth>) -> (Self, Receiver<SpeechEvent>) {
        let (tx, rx) = mpsc::channel::<SpeechCommand>();
        let (events_tx, events_rx) = mpsc::channel::<SpeechEvent>();

        let spawned = thread::Builder::new()
            .name("speech-player".to_string())
            .spawn(move || {
                while let Ok(command) = rx.recv() {
                    match command {
                        SpeechCommand::Speak(utterance) => {
                            // At most one active playback: drop the previous
                            // one before starting the next.
                            synth.cancel();
                            if let Err(err) = synth.speak(&utterance, &events_tx) {
                                let _ = events_tx.send(SpeechEvent::Errored(err.to_string()));
                            }
                        }
                        SpeechCommand::Cancel => synth.cancel(),
                    }
                }
            });
        if let Err(err) = spawned {
            error!("Failed to spawn speech thread: {err}");
        }

        (Self { tx }, events_rx)
    }

    pub fn speak(&self, utterance: Utterance) {
        let _ = self.tx.send(SpeechCommand::Speak(utterance));
    }

    pub fn cancel(&self) {
        let _ = self.tx.send(SpeechCommand::Cancel);
    }
}
