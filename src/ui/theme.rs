use ratatui::style::Color;

pub const CASE_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const BRAND_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SPEAKER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SCREEN_BG: Color = Color::Rgb(0x9b, 0xbc, 0x0f);
pub const SCREEN_TEXT: Color = Color::Rgb(0x0f, 0x38, 0x0f);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x30, 0x62, 0x30);
pub const KEY_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const KEY_LETTERS: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const CALL_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const HANG_RED: Color = Color::Rgb(0xef, 0x44, 0x44);
