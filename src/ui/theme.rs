use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colours of one demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub label: Color,
    pub button: Color,
    pub button_text: Color,
}

pub const BLACK_SCREEN: Palette = Palette {
    background: Color::Rgb(0x12, 0x12, 0x12),
    label: Color::Rgb(0xf5, 0xd0, 0x42),
    button: Color::Rgb(0x2a, 0x2a, 0x2a),
    button_text: Color::Rgb(0xf5, 0xd0, 0x42),
};

pub const WHITE_SCREEN: Palette = Palette {
    background: Color::Rgb(0xf5, 0xf5, 0xf5),
    label: Color::Rgb(0xbf, 0xbf, 0xbf),
    button: Color::Rgb(0xe0, 0xe0, 0xe0),
    button_text: Color::Rgb(0x30, 0x30, 0x30),
};
