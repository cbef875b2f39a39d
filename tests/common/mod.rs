//! Shared test utilities and probe presenters.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use mvpterm::error::MvpError;
use mvpterm::mvp::{
    AppController, AppHandler, BusListener, Lifecycle, Model, ModelListener, Presenter, View,
};
use mvpterm::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Shared, ordered log of everything the probes observed.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Bus listener and model subscriber that writes `<name>:<event>` for
/// every callback. A failing probe errors on the named bus event or model.
pub struct Probe {
    pub name: &'static str,
    pub journal: Journal,
    pub fail_on: Option<String>,
}

impl Probe {
    pub fn new(name: &'static str, journal: &Journal) -> Rc<Self> {
        Rc::new(Self {
            name,
            journal: Rc::clone(journal),
            fail_on: None,
        })
    }

    pub fn failing(name: &'static str, journal: &Journal, event: &str) -> Rc<Self> {
        Rc::new(Self {
            name,
            journal: Rc::clone(journal),
            fail_on: Some(event.to_string()),
        })
    }

    fn log(&self, what: &str) {
        self.journal.borrow_mut().push(format!("{}:{}", self.name, what));
    }
}

impl BusListener<String> for Probe {
    fn receive(&self, event: &String) -> Result<(), MvpError> {
        self.log(event);
        if self.fail_on.as_deref() == Some(event.as_str()) {
            return Err(MvpError::UnknownModel {
                name: event.clone(),
            });
        }
        Ok(())
    }

    fn on_start(&self) -> Result<(), MvpError> {
        self.log("start");
        Ok(())
    }

    fn on_pause(&self) -> Result<(), MvpError> {
        self.log("pause");
        Ok(())
    }

    fn on_resume(&self) -> Result<(), MvpError> {
        self.log("resume");
        Ok(())
    }

    fn on_stop(&self) -> Result<(), MvpError> {
        self.log("stop");
        Ok(())
    }
}

impl ModelListener<u32, i64> for Probe {
    fn model_event(&self, model: &Model<u32, i64>, id: &u32) -> Result<(), MvpError> {
        let seen = model.get(id)?;
        self.log(&format!("{}[{}]={:?}", model.name(), id, seen));
        if self.fail_on.as_deref() == Some(model.name()) {
            return Err(MvpError::UnknownModel {
                name: model.name().to_string(),
            });
        }
        Ok(())
    }
}

/// Records what the controller's bus delivers to it.
pub struct RecordingHandler {
    pub journal: Journal,
}

impl AppHandler<String> for RecordingHandler {
    fn receive(&self, controller: &AppController<String>, event: &String) -> Result<(), MvpError> {
        self.journal.borrow_mut().push(format!("controller:{event}"));
        if let Some(target) = event.strip_prefix("goto:") {
            controller.switch(target);
        }
        Ok(())
    }

    fn on_lifecycle(
        &self,
        _controller: &AppController<String>,
        stage: Lifecycle,
    ) -> Result<(), MvpError> {
        self.journal.borrow_mut().push(format!("controller:{stage}"));
        Ok(())
    }
}

/// View that turns any character key into a string event.
#[derive(Default)]
pub struct TextView {
    pub text: String,
}

impl View for TextView {
    type Event = String;
    type Data = String;

    fn update(&mut self, data: String) {
        self.text = data;
    }

    fn translate_key(&self, key: KeyEvent) -> Option<String> {
        match key.code {
            KeyCode::Char(ch) => Some(ch.to_string()),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Paragraph::new(self.text.clone()), area);
    }
}

/// Presenter that journals user events and re-emits those starting with
/// `goto:` onto the bus.
pub struct EchoPresenter {
    pub name: &'static str,
    pub journal: Journal,
    pub bus: Rc<mvpterm::mvp::EventBus<String>>,
    pub view: RefCell<TextView>,
}

impl EchoPresenter {
    pub fn new(name: &'static str, controller: &AppController<String>, journal: &Journal) -> Rc<Self> {
        Rc::new(Self {
            name,
            journal: Rc::clone(journal),
            bus: controller.bus(),
            view: RefCell::new(TextView {
                text: name.to_string(),
            }),
        })
    }
}

impl BusListener<String> for EchoPresenter {
    fn receive(&self, event: &String) -> Result<(), MvpError> {
        self.journal
            .borrow_mut()
            .push(format!("{}:{}", self.name, event));
        Ok(())
    }

    fn on_start(&self) -> Result<(), MvpError> {
        self.journal.borrow_mut().push(format!("{}:start", self.name));
        Ok(())
    }
}

impl Presenter<String> for EchoPresenter {
    type View = TextView;

    fn name(&self) -> &str {
        self.name
    }

    fn view(&self) -> &RefCell<TextView> {
        &self.view
    }

    fn user_event(&self, event: String) -> Result<(), MvpError> {
        self.journal
            .borrow_mut()
            .push(format!("{}:user:{}", self.name, event));
        match event.as_str() {
            "g" => self.bus.emit(&"goto:other".to_string()),
            "u" => {
                self.view.borrow_mut().update("updated".to_string());
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Render the whole controller into a test buffer and return its text.
pub fn render_text<E: 'static>(controller: &AppController<E>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, controller)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
