use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split `area` into a label row on top and a stack of button rows.
pub fn counter_regions(area: Rect, buttons: usize) -> (Rect, Vec<Rect>) {
    let mut constraints = vec![Constraint::Percentage(40)];
    constraints.extend((0..buttons).map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let buttons = rows
        .iter()
        .skip(1)
        .take(buttons)
        .map(|row| centered_columns(60, *row))
        .collect();
    (rows[0], buttons)
}

fn centered_columns(percent_x: u16, area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 24);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn tiny_area_collapses_body() {
        let area = Rect::new(0, 0, 10, 4);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn counter_regions_stack_buttons_below_label() {
        let area = Rect::new(0, 3, 80, 18);
        let (label, buttons) = counter_regions(area, 2);
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].y >= label.y + label.height);
        assert!(buttons[1].y > buttons[0].y);
        assert_eq!(buttons[0].height, 3);
    }
}
