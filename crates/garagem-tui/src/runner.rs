//! Main TUI runner - entry point and event loop

use std::time::Duration;

use garagem_api::VehicleApi;
use garagem_app::config::Settings;
use garagem_app::Engine;
use garagem_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive TUI against `api` until the user quits
pub async fn run<A>(settings: Settings, api: A) -> Result<()>
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(10));
    info!(
        "Starting TUI against {} (tick {}ms)",
        settings.api.base_url,
        tick_rate.as_millis()
    );

    let mut term = terminal::init()?;

    let mut engine = Engine::new(settings, api);
    engine.spawn_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine, tick_rate);

    terminal::restore();
    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    info!("TUI exited with {} request(s) in flight", engine.in_flight());
    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<A>,
    tick_rate: Duration,
) -> Result<()>
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Action results, signals
        engine.drain_pending();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }
    Ok(())
}
