use crate::demo::view::{CounterAction, CounterView};
use crate::demo::{DemoEvent, COUNTER_ID, COUNTER_MODEL};
use crate::error::MvpError;
use crate::mvp::{BusListener, Model, ModelListener, Presenter, PresenterContext, View};
use std::cell::RefCell;
use std::rc::Rc;

pub type CounterContext = PresenterContext<DemoEvent, u32, i64>;

/// Presenter of one counter screen.
///
/// Reacts to exactly one arithmetic action (`step` is added to the shared
/// counter) and to `Done`, which asks the controller to switch screens.
pub struct CounterPresenter {
    name: &'static str,
    action: CounterAction,
    step: i64,
    context: CounterContext,
    view: RefCell<CounterView>,
}

impl CounterPresenter {
    /// Increments on `Add`.
    pub fn black(context: CounterContext) -> Rc<Self> {
        Self::build("black", CounterAction::Add, 1, context, CounterView::black())
    }

    /// Decrements on `Subtract`.
    pub fn white(context: CounterContext) -> Rc<Self> {
        Self::build("white", CounterAction::Subtract, -1, context, CounterView::white())
    }

    fn build(
        name: &'static str,
        action: CounterAction,
        step: i64,
        context: CounterContext,
        view: CounterView,
    ) -> Rc<Self> {
        let presenter = Rc::new(Self {
            name,
            action,
            step,
            context,
            view: RefCell::new(view),
        });
        presenter.context.subscribe(&presenter);
        presenter
    }

    /// Text currently shown by the view.
    pub fn displayed(&self) -> String {
        self.view.borrow().text().to_string()
    }

    fn counter(&self) -> Result<&Rc<Model<u32, i64>>, MvpError> {
        self.context.model(COUNTER_MODEL)
    }

    fn step_counter(&self) -> Result<(), MvpError> {
        let model = self.counter()?;
        let value = model
            .get(&COUNTER_ID)?
            .ok_or_else(|| MvpError::MissingValue {
                model: model.name().to_string(),
                id: COUNTER_ID.to_string(),
            })?;
        let next = value
            .checked_add(self.step)
            .ok_or_else(|| MvpError::Overflow {
                model: model.name().to_string(),
                id: COUNTER_ID.to_string(),
            })?;
        model.set(COUNTER_ID, next)
    }

    fn refresh(&self, model: &Model<u32, i64>) -> Result<(), MvpError> {
        let text = match model.get(&COUNTER_ID)? {
            Some(value) => value.to_string(),
            None => "n/a".to_string(),
        };
        self.view.borrow_mut().update(text);
        Ok(())
    }
}

impl Presenter<DemoEvent> for CounterPresenter {
    type View = CounterView;

    fn name(&self) -> &str {
        self.name
    }

    fn view(&self) -> &RefCell<CounterView> {
        &self.view
    }

    fn user_event(&self, event: CounterAction) -> Result<(), MvpError> {
        tracing::debug!(presenter = self.name, ?event, "user event");
        match event {
            CounterAction::Done => self.context.emit(&DemoEvent::Switch),
            action if action == self.action => self.step_counter(),
            _ => Ok(()),
        }
    }
}

impl ModelListener<u32, i64> for CounterPresenter {
    fn model_event(&self, model: &Model<u32, i64>, _id: &u32) -> Result<(), MvpError> {
        self.refresh(model)
    }
}

impl BusListener<DemoEvent> for CounterPresenter {
    /// Show the current value before the first frame.
    fn on_start(&self) -> Result<(), MvpError> {
        self.refresh(self.counter()?)
    }
}
