use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use signal_hook::consts::{SIGHUP, SIGTERM};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    /// SIGTERM or SIGHUP received.
    Shutdown,
}

/// Reads terminal input on a background thread and hands it to the UI
/// thread over a channel. Never touches presenters or models.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        let terminate = Arc::new(AtomicBool::new(false));
        for signal in [SIGTERM, SIGHUP] {
            if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&terminate)) {
                tracing::warn!(signal, error = %err, "failed to register signal handler");
            }
        }

        let spawned = thread::Builder::new()
            .name("term-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if terminate.swap(false, Ordering::Relaxed) {
                        let _ = tx.send(AppEvent::Shutdown);
                        break;
                    }

                    // Short poll so the signal flag is checked frequently
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    let forwarded = match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Input(key)),
                            Ok(Event::Mouse(mouse)) => tx.send(AppEvent::Mouse(mouse)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(Event::FocusGained) => tx.send(AppEvent::FocusGained),
                            Ok(Event::FocusLost) => tx.send(AppEvent::FocusLost),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "terminal poll failed");
                            break;
                        }
                    };
                    // UI thread is gone
                    if forwarded.is_err() {
                        break;
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::error!(error = %err, "failed to spawn input thread");
        }

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
