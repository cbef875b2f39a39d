//! Application controller: bus owner, screen manager and presenter registry.

use crate::config::UiConfig;
use crate::error::MvpError;
use crate::mvp::bus::{BusListener, EventBus, Lifecycle};
use crate::mvp::presenter::{Presenter, Screen};
use crossterm::event::{KeyEvent, MouseEvent};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Application-level reaction to bus traffic.
///
/// The controller registers itself on its own bus and forwards every
/// callback here together with a reference to itself.
pub trait AppHandler<E> {
    fn receive(&self, controller: &AppController<E>, event: &E) -> Result<(), MvpError>;

    fn on_lifecycle(
        &self,
        _controller: &AppController<E>,
        _stage: Lifecycle,
    ) -> Result<(), MvpError> {
        Ok(())
    }
}

/// Tracks which named screen is visible.
///
/// Any name may become current, registered or not.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScreenManager {
    current: Option<String>,
}

impl ScreenManager {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn switch(&mut self, name: impl Into<String>) {
        self.current = Some(name.into());
    }
}

type ScreenEntry<E> = (String, Rc<dyn Screen<E>>);

pub struct AppController<E: 'static> {
    bus: Rc<EventBus<E>>,
    screens: RefCell<ScreenManager>,
    presenters: RefCell<Vec<ScreenEntry<E>>>,
    handler: Box<dyn AppHandler<E>>,
}

impl<E: 'static> fmt::Debug for AppController<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppController")
            .field("current", &self.current())
            .field("presenters", &self.presenter_names())
            .field("listeners", &self.bus.len())
            .finish()
    }
}

impl<E: 'static> AppController<E> {
    /// Build a controller registered as the first listener on a new bus.
    pub fn new(handler: impl AppHandler<E> + 'static) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| {
            let bus = Rc::new(EventBus::new());
            let listener: Weak<dyn BusListener<E>> = this.clone();
            bus.register(listener);
            Self {
                bus,
                screens: RefCell::new(ScreenManager::default()),
                presenters: RefCell::new(Vec::new()),
                handler: Box::new(handler),
            }
        })
    }

    /// Handle presenters use to emit onto this controller's bus.
    pub fn bus(&self) -> Rc<EventBus<E>> {
        Rc::clone(&self.bus)
    }

    /// Register `presenter` under its name and subscribe it to the bus.
    ///
    /// Fails without side effects when the name is taken.
    pub fn add<P>(&self, presenter: Rc<P>) -> Result<(), MvpError>
    where
        P: Presenter<E> + 'static,
    {
        let name = presenter.name().to_string();
        let mut presenters = self.presenters.borrow_mut();
        if presenters.iter().any(|(existing, _)| *existing == name) {
            return Err(MvpError::DuplicatePresenter { name });
        }

        let listener: Weak<dyn BusListener<E>> = Rc::<P>::downgrade(&presenter);
        self.bus.register(listener);
        tracing::debug!(presenter = %name, "presenter added");
        let screen: Rc<dyn Screen<E>> = presenter;
        presenters.push((name, screen));
        Ok(())
    }

    pub fn presenter_names(&self) -> Vec<String> {
        self.presenters
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn current(&self) -> Option<String> {
        self.screens.borrow().current().map(str::to_string)
    }

    pub fn switch(&self, name: impl Into<String>) {
        let name = name.into();
        tracing::debug!(screen = %name, "switching screen");
        self.screens.borrow_mut().switch(name);
    }

    /// Screen registered under the current name, if any.
    pub fn current_screen(&self) -> Option<Rc<dyn Screen<E>>> {
        let current = self.current()?;
        self.presenters
            .borrow()
            .iter()
            .find(|(name, _)| *name == current)
            .map(|(_, screen)| Rc::clone(screen))
    }

    /// Forward a host lifecycle signal to every bus listener.
    pub fn notify_lifecycle(&self, stage: Lifecycle) -> Result<(), MvpError> {
        self.bus.broadcast(stage)
    }

    pub fn dispatch_key(&self, key: KeyEvent) -> Result<(), MvpError> {
        match self.current_screen() {
            Some(screen) => screen.handle_key(key),
            None => Ok(()),
        }
    }

    pub fn dispatch_mouse(&self, mouse: MouseEvent) -> Result<(), MvpError> {
        match self.current_screen() {
            Some(screen) => screen.handle_mouse(mouse),
            None => Ok(()),
        }
    }

    /// Show `first` and run the terminal loop until the user quits.
    pub fn go(&self, first: impl Into<String>, settings: &UiConfig) -> Result<(), MvpError> {
        self.switch(first);
        crate::ui::runtime::run(self, settings)
    }
}

impl<E: 'static> BusListener<E> for AppController<E> {
    fn receive(&self, event: &E) -> Result<(), MvpError> {
        self.handler.receive(self, event)
    }

    fn on_start(&self) -> Result<(), MvpError> {
        self.handler.on_lifecycle(self, Lifecycle::Start)
    }

    fn on_pause(&self) -> Result<(), MvpError> {
        self.handler.on_lifecycle(self, Lifecycle::Pause)
    }

    fn on_resume(&self) -> Result<(), MvpError> {
        self.handler.on_lifecycle(self, Lifecycle::Resume)
    }

    fn on_stop(&self) -> Result<(), MvpError> {
        self.handler.on_lifecycle(self, Lifecycle::Stop)
    }
}
