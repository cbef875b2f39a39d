//! Presenter contract and the screen adapter the controller drives.

use crate::error::MvpError;
use crate::mvp::bus::{BusListener, EventBus};
use crate::mvp::model::{Model, ModelListener};
use crate::mvp::view::{KeyHint, View};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Coordinates one view with its models and the application bus.
///
/// Model notifications are a separate contract: a presenter that shows
/// model data also implements [`ModelListener`] and subscribes through
/// [`PresenterContext::subscribe`]. Keeping the two apart leaves the bus
/// free of model key and value types, so presenters without models need
/// no dummy `model_event`.
pub trait Presenter<E>: BusListener<E> {
    type View: View;

    /// Unique name within an [`AppController`](crate::mvp::AppController).
    fn name(&self) -> &str;

    fn view(&self) -> &RefCell<Self::View>;

    /// Handle an event originating from this presenter's view.
    fn user_event(&self, event: <Self::View as View>::Event) -> Result<(), MvpError>;
}

/// What the controller needs from a registered presenter.
pub trait Screen<E> {
    fn render(&self, frame: &mut Frame<'_>, area: Rect);

    fn handle_key(&self, key: KeyEvent) -> Result<(), MvpError>;

    fn handle_mouse(&self, mouse: MouseEvent) -> Result<(), MvpError>;

    fn hints(&self) -> Vec<KeyHint>;
}

impl<E, P> Screen<E> for P
where
    P: Presenter<E>,
{
    fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        self.view().borrow_mut().render(frame, area);
    }

    fn handle_key(&self, key: KeyEvent) -> Result<(), MvpError> {
        // The view borrow must end before the presenter pushes updates back.
        let event = self.view().borrow().translate_key(key);
        match event {
            Some(event) => self.user_event(event),
            None => Ok(()),
        }
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Result<(), MvpError> {
        let event = self.view().borrow().translate_mouse(mouse);
        match event {
            Some(event) => self.user_event(event),
            None => Ok(()),
        }
    }

    fn hints(&self) -> Vec<KeyHint> {
        self.view().borrow().hints()
    }
}

/// Shared collaborators injected into a presenter at construction.
pub struct PresenterContext<E, K, V> {
    bus: Rc<EventBus<E>>,
    models: Vec<Rc<Model<K, V>>>,
}

impl<E, K, V> fmt::Debug for PresenterContext<E, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresenterContext")
            .field("models", &self.models)
            .finish()
    }
}

impl<E, K, V> PresenterContext<E, K, V> {
    pub fn new(bus: Rc<EventBus<E>>, models: impl IntoIterator<Item = Rc<Model<K, V>>>) -> Self {
        Self {
            bus,
            models: models.into_iter().collect(),
        }
    }

    /// Broadcast on the owning controller's bus.
    pub fn emit(&self, event: &E) -> Result<(), MvpError>
    where
        E: fmt::Debug,
    {
        self.bus.emit(event)
    }

    pub fn model(&self, name: &str) -> Result<&Rc<Model<K, V>>, MvpError> {
        self.models
            .iter()
            .find(|model| model.name() == name)
            .ok_or_else(|| MvpError::UnknownModel {
                name: name.to_string(),
            })
    }

    pub fn models(&self) -> impl Iterator<Item = &Rc<Model<K, V>>> {
        self.models.iter()
    }

    /// Subscribe `presenter` to every model in this context.
    pub fn subscribe<P>(&self, presenter: &Rc<P>)
    where
        P: ModelListener<K, V> + 'static,
    {
        for model in &self.models {
            let listener: Weak<dyn ModelListener<K, V>> = Rc::<P>::downgrade(presenter);
            model.subscribe(listener);
        }
    }
}
