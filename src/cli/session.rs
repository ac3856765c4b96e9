//! Interactive terminal session.
//!
//! Wires the countdown engine to the terminal: stdin lines become user
//! intents, timer events are rendered, and notifications go through the
//! [`TerminalNotifier`].

use std::io::BufRead;
use std::thread;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use super::commands::RunArgs;
use super::display::Display;
use super::input::{parse_command, SessionCommand};
use crate::engine::{intent_channel, CountdownEngine, TimerEvent, UserIntent};
use crate::notification::TerminalNotifier;

/// Runs the countdown until the user quits, stdin closes or Ctrl-C.
///
/// With `exit_on_complete`, the session also ends after the first completion
/// and keeps running after stdin closes.
pub async fn run_session(args: RunArgs) -> Result<()> {
    let config = args
        .resolve_config()
        .context("Failed to load configuration")?;
    tracing::debug!(?config, "Starting session");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut engine = CountdownEngine::new(&config, TerminalNotifier::new(args.json), event_tx);
    Display::show_state(&engine.display(), args.json);

    let (handle, intents) = intent_channel();
    let engine_task = tokio::spawn(async move {
        engine.run(intents).await;
    });

    if args.autostart {
        handle.send(UserIntent::Start)?;
    }

    let mut lines = spawn_stdin_reader();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            event = event_rx.recv() => match event {
                Some(event) => {
                    render(&event, args.json);
                    if args.exit_on_complete && matches!(event, TimerEvent::Completed { .. }) {
                        break;
                    }
                }
                None => break,
            },
            line = lines.recv(), if stdin_open => match line {
                Some(line) => match parse_command(&line) {
                    Ok(Some(SessionCommand::Intent(intent))) => handle.send(intent)?,
                    Ok(Some(SessionCommand::Help)) => Display::show_help(),
                    Ok(Some(SessionCommand::Quit)) => break,
                    Ok(None) => {}
                    Err(e) => Display::show_error(&e.to_string()),
                },
                None => {
                    stdin_open = false;
                    if !args.exit_on_complete {
                        break;
                    }
                }
            },
            result = &mut ctrl_c => {
                result.context("Failed to listen for Ctrl-C")?;
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    // The engine may already be gone if it stopped on its own.
    let _ = handle.shutdown();
    engine_task.await.context("Countdown engine task failed")?;

    // Intents queued before quitting may still have produced updates.
    while let Ok(event) = event_rx.try_recv() {
        render(&event, args.json);
    }

    Ok(())
}

fn render(event: &TimerEvent, json: bool) {
    if let Some(state) = event.display() {
        Display::show_state(&state, json);
    } else if let TimerEvent::ConfiguredDurationChanged { minutes, seconds } = *event {
        Display::show_configured(minutes, seconds, json);
    }
}

/// Reads stdin lines on a plain thread so a pending read never blocks exit.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
