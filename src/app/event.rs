//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards key presses and resizes
//! over a channel.  When nothing arrives within the frame interval it sends
//! a `Tick` instead, which advances the pager's settle animation.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

/// High-level events consumed by the main loop.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Spawns the reader task and returns the receiving end of its channel.
pub fn spawn_event_reader(frame: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let app_event = match event::poll(frame) {
                Ok(true) => match event::read() {
                    // Release/repeat events would double every key on
                    // terminals that report them.
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                    Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!("terminal read failed: {e}");
                        break;
                    }
                },
                Ok(false) => AppEvent::Tick,
                Err(e) => {
                    tracing::warn!("terminal poll failed: {e}");
                    break;
                }
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
