use crate::mvp::AppController;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw<E: 'static>(frame: &mut Frame<'_>, controller: &AppController<E>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let current = controller.current();

    frame.render_widget(Header::new().widget(current.as_deref()), header);
    frame.render_widget(Clear, body);
    let screen = controller.current_screen();
    let hints = match &screen {
        Some(screen) => {
            screen.render(frame, body);
            screen.hints()
        }
        None => {
            let message = match current {
                Some(name) => format!("No screen registered as '{name}'"),
                None => "No screen selected".to_string(),
            };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(STATUS_ERROR))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, body);
            Vec::new()
        }
    };
    frame.render_widget(Footer::new(&hints).widget(footer), footer);
}
