//! Colour-coded counter screens.

use crate::mvp::{KeyHint, View};
use crate::ui::layout::counter_regions;
use crate::ui::theme::{Palette, BLACK_SCREEN, WHITE_SCREEN};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Events a counter view forwards to its presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Add,
    Subtract,
    Done,
}

/// A clickable button with its keyboard shortcuts.
#[derive(Debug, Clone)]
pub struct Button {
    pub label: &'static str,
    pub keys: &'static [KeyCode],
    pub action: CounterAction,
}

impl Button {
    /// Keys joined for display, e.g. `w/Tab`.
    pub fn key_label(&self) -> String {
        self.keys
            .iter()
            .map(|code| match code {
                KeyCode::Char(ch) => ch.to_string(),
                KeyCode::Tab => "Tab".to_string(),
                other => format!("{other:?}"),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

const PLACEHOLDER: &str = "TEST";

#[derive(Debug)]
pub struct CounterView {
    palette: Palette,
    text: String,
    buttons: Vec<Button>,
    hit_regions: Vec<Rect>,
}

impl CounterView {
    pub fn new(palette: Palette, buttons: Vec<Button>) -> Self {
        Self {
            palette,
            text: PLACEHOLDER.to_string(),
            buttons,
            hit_regions: Vec::new(),
        }
    }

    /// Dark screen with "add" and "to white".
    pub fn black() -> Self {
        Self::new(
            BLACK_SCREEN,
            vec![
                Button {
                    label: "add",
                    keys: &[KeyCode::Char('a'), KeyCode::Char('+')],
                    action: CounterAction::Add,
                },
                Button {
                    label: "to white",
                    keys: &[KeyCode::Char('w'), KeyCode::Tab],
                    action: CounterAction::Done,
                },
            ],
        )
    }

    /// Light screen with "subtract" and "to black".
    pub fn white() -> Self {
        Self::new(
            WHITE_SCREEN,
            vec![
                Button {
                    label: "subtract",
                    keys: &[KeyCode::Char('s'), KeyCode::Char('-')],
                    action: CounterAction::Subtract,
                },
                Button {
                    label: "to black",
                    keys: &[KeyCode::Char('b'), KeyCode::Tab],
                    action: CounterAction::Done,
                },
            ],
        )
    }

    /// Text currently shown in the label.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

impl View for CounterView {
    type Event = CounterAction;
    type Data = String;

    fn update(&mut self, data: String) {
        self.text = data;
    }

    fn translate_key(&self, key: KeyEvent) -> Option<CounterAction> {
        self.buttons
            .iter()
            .find(|button| button.keys.contains(&key.code))
            .map(|button| button.action)
    }

    fn translate_mouse(&self, mouse: MouseEvent) -> Option<CounterAction> {
        let position = Position::new(mouse.column, mouse.row);
        self.hit_regions
            .iter()
            .zip(&self.buttons)
            .find(|(region, _)| region.contains(position))
            .map(|(_, button)| button.action)
    }

    fn hints(&self) -> Vec<KeyHint> {
        self.buttons
            .iter()
            .map(|button| KeyHint {
                keys: button.key_label(),
                label: button.label.to_string(),
            })
            .collect()
    }

    fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let palette = self.palette;
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let (label_area, button_areas) = counter_regions(area, self.buttons.len());
        // Bottom-align the number inside its region.
        let label_line = Rect {
            y: label_area.y + label_area.height.saturating_sub(1),
            height: label_area.height.min(1),
            ..label_area
        };
        let label = Paragraph::new(Span::styled(
            self.text.clone(),
            Style::default()
                .fg(palette.label)
                .bg(palette.background)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(label, label_line);

        for (button, region) in self.buttons.iter().zip(&button_areas) {
            let hint = match button.keys.first() {
                Some(KeyCode::Char(ch)) => format!(" [{ch}]"),
                _ => String::new(),
            };
            let widget = Paragraph::new(Line::from(vec![
                Span::raw(button.label),
                Span::styled(hint, Style::default().add_modifier(Modifier::DIM)),
            ]))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.button_text)
                    .bg(palette.button),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.button_text)),
            );
            frame.render_widget(widget, *region);
        }
        self.hit_regions = button_areas;
    }
}
