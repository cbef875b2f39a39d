use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;

/// One shortcut advertised in the footer, e.g. `a/+` for `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: String,
    pub label: String,
}

/// Thin adapter between the terminal and a presenter.
///
/// A view translates raw input into presenter events and draws whatever
/// the presenter last pushed through [`View::update`].
pub trait View {
    /// Event type forwarded to the owning presenter.
    type Event;
    /// State pushed by the presenter.
    type Data;

    fn update(&mut self, data: Self::Data);

    fn translate_key(&self, key: KeyEvent) -> Option<Self::Event>;

    fn translate_mouse(&self, _mouse: MouseEvent) -> Option<Self::Event> {
        None
    }

    /// Shortcuts this view accepts, shown while it is on screen.
    fn hints(&self) -> Vec<KeyHint> {
        Vec::new()
    }

    /// Draw into `area`. Takes `&mut self` so a view can remember hit
    /// regions for mouse translation.
    fn render(&mut self, frame: &mut Frame<'_>, area: Rect);
}
