//! Synchronous broadcast bus shared by the controller and its presenters.

use crate::error::MvpError;
use std::cell::RefCell;
use std::fmt;
use std::rc::Weak;

/// Lifecycle stages delivered by the host runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Start,
    Pause,
    Resume,
    Stop,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Lifecycle::Start => "start",
            Lifecycle::Pause => "pause",
            Lifecycle::Resume => "resume",
            Lifecycle::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// Anything registered on an [`EventBus`].
///
/// Every callback defaults to a no-op so listeners only implement what
/// they care about.
pub trait BusListener<E> {
    fn receive(&self, _event: &E) -> Result<(), MvpError> {
        Ok(())
    }

    fn on_start(&self) -> Result<(), MvpError> {
        Ok(())
    }

    fn on_pause(&self) -> Result<(), MvpError> {
        Ok(())
    }

    fn on_resume(&self) -> Result<(), MvpError> {
        Ok(())
    }

    fn on_stop(&self) -> Result<(), MvpError> {
        Ok(())
    }
}

/// Flat, ordered fan-out of events to every registered listener.
///
/// The bus does not own its listeners. A listener that has been dropped is
/// skipped on delivery.
pub struct EventBus<E> {
    listeners: RefCell<Vec<Weak<dyn BusListener<E>>>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Append a listener. Registering the same listener twice delivers
    /// every event to it twice.
    pub fn register(&self, listener: Weak<dyn BusListener<E>>) {
        self.listeners.borrow_mut().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Deliver `event` to every listener in registration order.
    ///
    /// Stops at the first listener error and returns it.
    pub fn emit(&self, event: &E) -> Result<(), MvpError>
    where
        E: fmt::Debug,
    {
        tracing::trace!(?event, listeners = self.len(), "bus emit");
        self.each(|listener| listener.receive(event))
    }

    /// Call the dedicated lifecycle hook on every listener.
    pub fn broadcast(&self, stage: Lifecycle) -> Result<(), MvpError> {
        tracing::info!(%stage, listeners = self.len(), "lifecycle");
        self.each(|listener| match stage {
            Lifecycle::Start => listener.on_start(),
            Lifecycle::Pause => listener.on_pause(),
            Lifecycle::Resume => listener.on_resume(),
            Lifecycle::Stop => listener.on_stop(),
        })
    }

    fn each<F>(&self, mut deliver: F) -> Result<(), MvpError>
    where
        F: FnMut(&dyn BusListener<E>) -> Result<(), MvpError>,
    {
        // Snapshot so handlers can register or emit while we iterate.
        let listeners = self.listeners.borrow().clone();
        for listener in listeners.iter().filter_map(Weak::upgrade) {
            deliver(&*listener)?;
        }
        Ok(())
    }
}
