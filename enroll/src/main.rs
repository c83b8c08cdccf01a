//! A TUI for registering an account with an invite link.

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Form field helpers
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> io::Result<ExitCode> {
    let config = config::Config::parse();

    // Logs go to a file; stdout belongs to the terminal UI.
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, "enroll.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, &config).await;
    ratatui::restore();
    res
}

/// Manage the lifecycle of the app
async fn run(mut terminal: DefaultTerminal, config: &config::Config) -> io::Result<ExitCode> {
    let mut app = App::new(config.invite_token());
    let ctx = Arc::new(EffectContext::new(config));

    // We expect side-effectful behaviors (that is, things like network
    // access) to take place via async tasks. Once those tasks are done, we
    // read their results off of a channel. We keep track of outstanding
    // effects so we can exit cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // First thing we do is wait for an event. This can be either
        // external input or the async result of an effect. This is an
        // `Option<_>` because we don't necessarily need to pay attention to
        // every single piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        // Once we have an action, we send it to `app.handle` to get any
        // next effects, each of which runs on its own task.
        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&ctx),
                    effect,
                ));
            }
        }

        // Now that we handled the event, we re-render to display any
        // changes the app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // If the message we just handled was from an outstanding effect, we
        // need to remove the completed `JoinHandle` from the list. This
        // list should never be too long (since we do this on every pass
        // through the event loop) so a full scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        // Finally, if the app indicates that it should exit, we wait for
        // all outstanding effects to finish before exiting the loop with
        // the exit code from the app.
        if let Some(code) = app.should_exit() {
            for effect in outstanding_effects.drain(..) {
                let _ = effect.await;
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    ctx: Arc<EffectContext>,
    effect: app::Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Some(next_action) = effect.run(&ctx).await {
            // If the channel is closed we're shutting down and it's fine to
            // drop the message.
            let _ = effect_tx.send(next_action);
        }
    })
}
