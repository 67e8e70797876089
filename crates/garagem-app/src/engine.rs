//! Engine - shared orchestration state for TUI and headless runners
//!
//! Owns the TEA state, the message channel and the registry client. Runners
//! feed it input messages and drain action results from `msg_rx`.

use tokio::sync::mpsc;
use tracing::debug;

use garagem_api::VehicleApi;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for Garagem.
pub struct Engine<A> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, action tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    api: A,

    /// Dispatched actions whose result message has not been processed yet
    in_flight: usize,
}

impl<A> Engine<A>
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    pub fn new(settings: Settings, api: A) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            api,
            in_flight: 0,
        }
    }

    /// Mount the root screen (first focus event, first fetch)
    pub fn start(&mut self) {
        self.process_message(Message::FocusGained);
    }

    /// Route Ctrl+C / SIGTERM into the message channel
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        if msg.is_action_result() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        self.in_flight += process::process_message(&mut self.state, msg, &self.msg_tx, &self.api);
    }

    /// Process every message already queued, without waiting.
    ///
    /// Returns how many were processed.
    pub fn drain_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            processed += 1;
        }
        processed
    }

    /// Wait until every dispatched action has reported back and been
    /// processed, including actions those results trigger in turn.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }
        debug!("Engine settled");
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
