use crate::config::UiConfig;
use crate::error::MvpError;
use crate::mvp::{AppController, Lifecycle};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{classify_key, classify_mouse, KeyAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Host loop: owns the terminal and drives the controller until quit.
///
/// `Start` is broadcast before the first frame; focus changes map to
/// `Pause`/`Resume`. `Stop` is broadcast however the loop ends, including
/// when a presenter error aborts it. The terminal is restored before the
/// error is returned.
pub fn run<E: 'static>(controller: &AppController<E>, settings: &UiConfig) -> Result<(), MvpError> {
    let (mut terminal, guard) = setup_terminal(settings.mouse)?;
    let tick_rate = settings.tick_rate();
    let events = EventHandler::new(tick_rate);

    let outcome = drive(
        controller,
        || {
            terminal.draw(|frame| draw(frame, controller))?;
            Ok(())
        },
        || events.next(tick_rate),
    );
    let outcome = finish(controller, outcome);
    drop(guard);
    outcome
}

fn drive<E, D, N>(controller: &AppController<E>, mut redraw: D, mut next: N) -> Result<(), MvpError>
where
    E: 'static,
    D: FnMut() -> Result<(), MvpError>,
    N: FnMut() -> Result<AppEvent, RecvTimeoutError>,
{
    controller.notify_lifecycle(Lifecycle::Start)?;
    let mut paused = false;

    loop {
        redraw()?;
        if step(controller, next(), &mut paused)? == Flow::Quit {
            return Ok(());
        }
    }
}

fn step<E: 'static>(
    controller: &AppController<E>,
    event: Result<AppEvent, RecvTimeoutError>,
    paused: &mut bool,
) -> Result<Flow, MvpError> {
    match event {
        Ok(AppEvent::Input(key)) => match classify_key(key) {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::Forward => controller.dispatch_key(key)?,
            KeyAction::Ignore => {}
        },
        Ok(AppEvent::Mouse(mouse)) => {
            if classify_mouse(mouse) {
                controller.dispatch_mouse(mouse)?;
            }
        }
        Ok(AppEvent::FocusLost) if !*paused => {
            *paused = true;
            controller.notify_lifecycle(Lifecycle::Pause)?;
        }
        Ok(AppEvent::FocusGained) if *paused => {
            *paused = false;
            controller.notify_lifecycle(Lifecycle::Resume)?;
        }
        Ok(AppEvent::FocusLost | AppEvent::FocusGained) => {}
        Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
        Ok(AppEvent::Shutdown) => {
            tracing::info!("termination signal received");
            return Ok(Flow::Quit);
        }
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Broadcast `Stop`. An error from the loop takes precedence over one
/// raised while stopping.
fn finish<E: 'static>(
    controller: &AppController<E>,
    outcome: Result<(), MvpError>,
) -> Result<(), MvpError> {
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "ui loop aborted");
    }
    let stopped = controller.notify_lifecycle(Lifecycle::Stop);
    outcome.and(stopped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvp::AppHandler;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// Records lifecycle stages; fails on any bus event.
    struct Stages(Rc<RefCell<Vec<Lifecycle>>>);

    impl AppHandler<u8> for Stages {
        fn receive(&self, _controller: &AppController<u8>, event: &u8) -> Result<(), MvpError> {
            Err(MvpError::UnknownModel {
                name: event.to_string(),
            })
        }

        fn on_lifecycle(
            &self,
            _controller: &AppController<u8>,
            stage: Lifecycle,
        ) -> Result<(), MvpError> {
            self.0.borrow_mut().push(stage);
            Ok(())
        }
    }

    fn press(code: KeyCode) -> Result<AppEvent, RecvTimeoutError> {
        Ok(AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn focus_changes_map_to_pause_and_resume_once() {
        let stages = Rc::new(RefCell::new(Vec::new()));
        let controller = AppController::new(Stages(Rc::clone(&stages)));
        let mut paused = false;

        for event in [
            AppEvent::FocusLost,
            AppEvent::FocusLost,
            AppEvent::FocusGained,
            AppEvent::FocusGained,
        ] {
            assert_eq!(step(&controller, Ok(event), &mut paused).unwrap(), Flow::Continue);
        }

        assert_eq!(*stages.borrow(), vec![Lifecycle::Pause, Lifecycle::Resume]);
    }

    #[test]
    fn quit_keys_and_signals_end_the_loop() {
        let controller = AppController::new(Stages(Rc::default()));
        let mut paused = false;

        assert_eq!(step(&controller, press(KeyCode::Esc), &mut paused).unwrap(), Flow::Quit);
        assert_eq!(
            step(&controller, Ok(AppEvent::Shutdown), &mut paused).unwrap(),
            Flow::Quit
        );
        assert_eq!(
            step(&controller, Err(RecvTimeoutError::Timeout), &mut paused).unwrap(),
            Flow::Continue
        );
    }

    #[test]
    fn quitting_broadcasts_start_then_stop() {
        let stages = Rc::new(RefCell::new(Vec::new()));
        let controller = AppController::new(Stages(Rc::clone(&stages)));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut queue = VecDeque::from([Ok(AppEvent::Tick), press(KeyCode::Char('q'))]);

        let mut frames = 0;

        let outcome = drive(
            &controller,
            || {
                terminal.draw(|frame| draw(frame, &controller)).unwrap();
                frames += 1;
                Ok(())
            },
            || queue.pop_front().unwrap_or(Err(RecvTimeoutError::Disconnected)),
        );
        finish(&controller, outcome).unwrap();

        assert_eq!(frames, 2);
        assert_eq!(*stages.borrow(), vec![Lifecycle::Start, Lifecycle::Stop]);
    }

    #[test]
    fn aborted_loop_still_broadcasts_stop() {
        let stages = Rc::new(RefCell::new(Vec::new()));
        let controller = AppController::new(Stages(Rc::clone(&stages)));

        let failed = controller.bus().emit(&9);
        let err = finish(&controller, failed).unwrap_err();

        assert!(matches!(err, MvpError::UnknownModel { ref name } if name == "9"));
        assert_eq!(*stages.borrow(), vec![Lifecycle::Stop]);
    }
}
