use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the runtime does with a key before any screen sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Leave the loop.
    Quit,
    /// Hand to the current screen.
    Forward,
    /// Repeat/release events and the like.
    Ignore,
}

pub fn classify_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    if is_ctrl_char(key, 'c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('q') if key.modifiers.is_empty() => KeyAction::Quit,
        _ => KeyAction::Forward,
    }
}

/// Only left clicks reach the views.
pub fn classify_mouse(mouse: MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(classify_key(press(KeyCode::Char('q'), KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(classify_key(press(KeyCode::Esc, KeyModifiers::NONE)), KeyAction::Quit);
        assert_eq!(
            classify_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn other_keys_are_forwarded() {
        assert_eq!(classify_key(press(KeyCode::Char('a'), KeyModifiers::NONE)), KeyAction::Forward);
        assert_eq!(classify_key(press(KeyCode::Tab, KeyModifiers::NONE)), KeyAction::Forward);
        assert_eq!(classify_key(press(KeyCode::Char('c'), KeyModifiers::NONE)), KeyAction::Forward);
    }

    #[test]
    fn release_is_ignored() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(classify_key(key), KeyAction::Ignore);
    }

    #[test]
    fn only_left_click_counts() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click
        };
        assert!(classify_mouse(click));
        assert!(!classify_mouse(scroll));
    }
}
