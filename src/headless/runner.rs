//! Headless mode runner - line commands in, NDJSON events out
//!
//! Every command drives the same messages the TUI keys produce, then waits
//! for the engine to settle before reporting.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use garagem_api::VehicleApi;
use garagem_app::config::Settings;
use garagem_app::navigation::Screen;
use garagem_app::{Engine, Message};
use garagem_core::prelude::Result;
use garagem_core::{FieldErrors, FilterField, FormField, LoadPhase, VehicleId};

use super::HeadlessEvent;

/// A parsed stdin command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Refresh and print the list
    List,
    /// Set one filter field (empty text clears it) and print the list
    Filter { field: FilterField, text: String },
    /// Clear every filter and print the list
    Clear,
    Show(VehicleId),
    Delete(VehicleId),
    Create(Vec<(FormField, String)>),
    Update(VehicleId, Vec<(FormField, String)>),
    Quit,
}

fn filter_field(key: &str) -> Option<FilterField> {
    match key {
        "placa" => Some(FilterField::Plate),
        "marca" => Some(FilterField::Make),
        "modelo" => Some(FilterField::Model),
        _ => None,
    }
}

/// `placa=ABC1234 modelo=Gol G5` → field assignments.
///
/// Words without `=` continue the previous value.
fn parse_assignments(input: &str) -> std::result::Result<Vec<(FormField, String)>, String> {
    let mut fields: Vec<(FormField, String)> = Vec::new();
    for word in input.split_whitespace() {
        match word.split_once('=') {
            Some((key, value)) => {
                let field =
                    FormField::from_key(key).ok_or_else(|| format!("unknown field '{key}'"))?;
                fields.push((field, value.to_string()));
            }
            None => match fields.last_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(word);
                }
                None => return Err(format!("expected field=value, got '{word}'")),
            },
        }
    }
    Ok(fields)
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let require_id = |rest: &str| -> std::result::Result<(VehicleId, String), String> {
        let (id, tail) = match rest.split_once(char::is_whitespace) {
            Some((id, tail)) => (id, tail.trim()),
            None => (rest, ""),
        };
        if id.is_empty() {
            return Err(format!("'{name}' needs a vehicle id"));
        }
        Ok((VehicleId::parse(id), tail.to_string()))
    };

    let command = match name {
        "list" | "ls" => Command::List,
        "clear" => Command::Clear,
        "filter" => {
            let (key, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = filter_field(key)
                .ok_or_else(|| format!("unknown filter '{key}' (placa, marca, modelo)"))?;
            Command::Filter {
                field,
                text: text.trim().to_string(),
            }
        }
        "show" => Command::Show(require_id(rest)?.0),
        "delete" | "rm" => Command::Delete(require_id(rest)?.0),
        "create" | "new" => Command::Create(parse_assignments(rest)?),
        "update" | "edit" => {
            let (id, tail) = require_id(rest)?;
            Command::Update(id, parse_assignments(&tail)?)
        }
        "quit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Engine plus the bookkeeping that turns state into events
pub struct HeadlessSession<A> {
    engine: Engine<A>,
}

impl<A> HeadlessSession<A>
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    pub fn new(settings: Settings, api: A) -> Self {
        Self {
            engine: Engine::new(settings, api),
        }
    }

    pub fn engine(&self) -> &Engine<A> {
        &self.engine
    }

    pub fn should_quit(&self) -> bool {
        self.engine.should_quit()
    }

    /// Mount the list and wait for its first fetch
    pub async fn start(&mut self) -> Vec<HeadlessEvent> {
        self.engine.start();
        self.engine.settle().await;

        let mut events = vec![HeadlessEvent::ready(
            self.engine.state.settings.api.base_url.clone(),
        )];
        self.take_notice(&mut events);
        self.push_list(&mut events);
        events
    }

    pub async fn execute(&mut self, command: Command) -> Vec<HeadlessEvent> {
        debug!("Headless command: {:?}", command);
        let mut events = Vec::new();

        match command {
            Command::List => {
                self.return_to_root().await;
                self.send(Message::Refresh);
                self.engine.settle().await;
                self.take_notice(&mut events);
                self.push_list(&mut events);
            }
            Command::Filter { field, text } => {
                self.return_to_root().await;
                self.send(Message::FilterInput { field, text });
                self.push_list(&mut events);
            }
            Command::Clear => {
                self.return_to_root().await;
                self.send(Message::ClearFilters);
                self.push_list(&mut events);
            }
            Command::Show(id) => {
                if let Some(vehicle) = self.open_detail(id, &mut events).await {
                    events.push(HeadlessEvent::vehicle(vehicle));
                }
            }
            Command::Delete(id) => {
                if self.open_detail(id.clone(), &mut events).await.is_some() {
                    self.send(Message::RequestDelete);
                    let accept = self
                        .engine
                        .state
                        .confirm_dialog
                        .as_ref()
                        .and_then(|d| d.accept_message());
                    if let Some(msg) = accept {
                        self.send(msg);
                    }
                    self.engine.settle().await;

                    // The detail screen pops itself only when the delete succeeded
                    if self.engine.state.navigator.is_root() {
                        events.push(HeadlessEvent::deleted(&id));
                    }
                    self.take_notice(&mut events);
                }
            }
            Command::Create(fields) => {
                self.return_to_root().await;
                self.send(Message::NewVehicle);
                self.submit_form(fields, &mut events).await;
            }
            Command::Update(id, fields) => {
                if self.open_detail(id, &mut events).await.is_some() {
                    self.send(Message::EditVehicle);
                    self.engine.settle().await;
                    let hydrated = matches!(
                        &self.engine.state.navigator.top().screen,
                        Screen::Form(form) if form.phase == LoadPhase::Ready
                    );
                    if hydrated {
                        self.submit_form(fields, &mut events).await;
                    } else {
                        self.take_notice(&mut events);
                    }
                }
            }
            Command::Quit => self.send(Message::Quit),
        }
        events
    }

    fn send(&mut self, msg: Message) {
        self.engine.process_message(msg);
    }

    /// Close overlays and pop back to the list, letting refetches land
    async fn return_to_root(&mut self) {
        self.send(Message::DismissNotice);
        let cancel = self
            .engine
            .state
            .confirm_dialog
            .as_ref()
            .and_then(|d| d.cancel_message());
        if let Some(msg) = cancel {
            self.send(msg);
        }
        self.engine.settle().await;

        while !self.engine.state.navigator.is_root() {
            let depth = self.engine.state.navigator.depth();
            self.send(Message::NavigateBack);
            if self.engine.state.navigator.depth() == depth {
                warn!("Navigation back blocked at depth {}", depth);
                break;
            }
            self.engine.settle().await;
        }
    }

    /// Navigate to the detail screen; returns the loaded record
    async fn open_detail(
        &mut self,
        vehicle_id: VehicleId,
        events: &mut Vec<HeadlessEvent>,
    ) -> Option<garagem_core::Vehicle> {
        self.return_to_root().await;
        self.send(Message::OpenVehicle { vehicle_id });
        self.engine.settle().await;

        let vehicle = match &self.engine.state.navigator.top().screen {
            Screen::Detail(detail) if detail.phase == LoadPhase::Ready => detail.vehicle.clone(),
            _ => None,
        };
        self.take_notice(events);
        vehicle
    }

    /// Type `fields` into the open form and submit it
    ///
    /// Values the form would silently filter (letters in the year) are
    /// reported instead of submitted.
    async fn submit_form(
        &mut self,
        fields: Vec<(FormField, String)>,
        events: &mut Vec<HeadlessEvent>,
    ) {
        let rejected: FieldErrors = fields
            .iter()
            .filter(|(field, text)| !text.chars().all(|c| field.accepts(c)))
            .map(|(field, _)| (*field, field.invalid_chars_message().to_string()))
            .collect();
        if !rejected.is_empty() {
            debug!("Refusing form input with rejected characters: {:?}", rejected);
            events.push(HeadlessEvent::validation_failed(&rejected));
            return;
        }

        for (field, text) in fields {
            self.send(Message::FormInput { field, text });
        }
        self.send(Message::SubmitForm);

        if let Screen::Form(form) = &self.engine.state.navigator.top().screen {
            if !form.busy && !form.errors.is_empty() {
                events.push(HeadlessEvent::validation_failed(&form.errors));
                return;
            }
        }

        self.engine.settle().await;
        self.take_notice(events);
    }

    /// Report and dismiss a pending notice
    fn take_notice(&mut self, events: &mut Vec<HeadlessEvent>) {
        let Some(event) = self.engine.state.notice.as_ref().map(HeadlessEvent::notice) else {
            return;
        };
        events.push(event);
        self.send(Message::DismissNotice);
    }

    fn push_list(&self, events: &mut Vec<HeadlessEvent>) {
        if let Screen::List(list) = &self.engine.state.navigator.top().screen {
            if list.phase.is_ready() {
                events.push(HeadlessEvent::vehicle_list(
                    list.visible().cloned().collect(),
                    list.snapshot().len(),
                ));
            }
        }
    }
}

/// Run in headless mode until `quit`, EOF on stdin, or a termination signal
pub async fn run_headless<A>(settings: Settings, api: A) -> Result<()>
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    info!("Garagem starting in HEADLESS mode against {}", settings.api.base_url);

    let mut session = HeadlessSession::new(settings, api);
    session.engine.spawn_signal_handler();
    for event in session.start().await {
        event.emit();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while !session.should_quit() {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => match parse_command(&line) {
                    Ok(Some(command)) => {
                        for event in session.execute(command).await {
                            event.emit();
                        }
                    }
                    Ok(None) => {}
                    Err(message) => {
                        warn!("Bad headless command {:?}: {}", line, message);
                        HeadlessEvent::error(message).emit();
                    }
                },
                Ok(None) => {
                    info!("Stdin closed");
                    break;
                }
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            },
            Some(msg) = session.engine.msg_rx.recv() => session.engine.process_message(msg),
        }
    }

    info!("Garagem headless mode exiting");
    Ok(())
}
