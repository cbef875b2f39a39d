//! Model-View-Presenter primitives.
//!
//! ```text
//!  key/mouse ──→ View ──→ Presenter ──→ Model ──┐
//!                  ↑          │  ↑              │ model_event
//!                  └─ update ─┘  └──────────────┘
//!                             │
//!                           emit ──→ EventBus ──→ AppController, Presenters
//! ```
//!
//! Everything runs on one thread. Bus emission and model notification are
//! synchronous and reentrant; a handler may emit or set while being
//! notified.

mod bus;
mod controller;
mod model;
mod presenter;
mod view;

pub use bus::{BusListener, EventBus, Lifecycle};
pub use controller::{AppController, AppHandler, ScreenManager};
pub use model::{DictStore, Model, ModelListener, ModelStore};
pub use presenter::{Presenter, PresenterContext, Screen};
pub use view::{KeyHint, View};
