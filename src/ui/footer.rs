use crate::mvp::KeyHint;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";
const QUIT_HINT: &str = "q/Esc: Quit";

/// Bottom bar: the current screen's shortcuts, then the global ones.
pub struct Footer<'a> {
    hints: &'a [KeyHint],
}

impl<'a> Footer<'a> {
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled(" ", text_style)];
        for hint in self.hints {
            spans.push(Span::styled(hint.keys.clone(), key_style));
            spans.push(Span::styled(format!(": {}", hint.label), text_style));
            spans.push(Span::styled(SEPARATOR, separator_style));
        }
        spans.push(Span::styled(QUIT_HINT, text_style));

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
