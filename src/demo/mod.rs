//! The bundled two-screen demo.
//!
//! A single integer lives in the `counter` model. The black screen adds
//! one, the white screen subtracts one, and either can hand over to the
//! other.

mod controller;
mod presenter;
mod view;

pub use controller::SwitchHandler;
pub use presenter::{CounterContext, CounterPresenter};
pub use view::{Button, CounterAction, CounterView};

use crate::config::{DemoConfig, UiConfig};
use crate::error::MvpError;
use crate::mvp::{AppController, Model, PresenterContext};
use std::rc::Rc;

pub const COUNTER_MODEL: &str = "counter";
pub const COUNTER_ID: u32 = 0;

/// Events travelling on the demo bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    /// A presenter is done; show the other screen.
    Switch,
}

/// Everything the demo wires together.
pub struct DemoApp {
    pub controller: Rc<AppController<DemoEvent>>,
    pub model: Rc<Model<u32, i64>>,
    pub black: Rc<CounterPresenter>,
    pub white: Rc<CounterPresenter>,
}

impl DemoApp {
    /// Seed the counter, build both presenters and register them (white
    /// first, then black). The first screen is chosen by [`DemoApp::run`].
    pub fn build(config: &DemoConfig) -> Result<Self, MvpError> {
        let controller = AppController::new(SwitchHandler);

        let model: Rc<Model<u32, i64>> = Rc::new(Model::in_memory(COUNTER_MODEL));
        model.set(COUNTER_ID, config.initial_value)?;

        let black = CounterPresenter::black(PresenterContext::new(
            controller.bus(),
            [Rc::clone(&model)],
        ));
        let white = CounterPresenter::white(PresenterContext::new(
            controller.bus(),
            [Rc::clone(&model)],
        ));

        controller.add(Rc::clone(&white))?;
        controller.add(Rc::clone(&black))?;

        Ok(Self {
            controller,
            model,
            black,
            white,
        })
    }

    /// Show `first` and block in the terminal loop until the user quits.
    pub fn run(&self, first: &str, ui: &UiConfig) -> Result<(), MvpError> {
        self.controller.go(first, ui)
    }

    /// Current counter value.
    pub fn value(&self) -> Result<Option<i64>, MvpError> {
        self.model.get(&COUNTER_ID)
    }
}
