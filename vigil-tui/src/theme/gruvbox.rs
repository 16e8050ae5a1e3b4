use ratatui::style::Color;

use super::{colors::hex_to_color, Theme};

pub struct GruvboxDark;

impl Theme for GruvboxDark {
    fn name(&self) -> &'static str {
        "Gruvbox Dark"
    }

    fn background(&self) -> Color {
        hex_to_color(0x282828)
    }

    fn foreground(&self) -> Color {
        hex_to_color(0xebdbb2)
    }

    fn foreground_dim(&self) -> Color {
        hex_to_color(0x928374)
    }

    fn surface(&self) -> Color {
        hex_to_color(0x3c3836)
    }

    fn border(&self) -> Color {
        hex_to_color(0x504945)
    }

    fn accent(&self) -> Color {
        hex_to_color(0x83a598)
    }

    fn success(&self) -> Color {
        hex_to_color(0xb8bb26)
    }

    fn warning(&self) -> Color {
        hex_to_color(0xfabd2f)
    }

    fn error(&self) -> Color {
        hex_to_color(0xfb4934)
    }

    fn info(&self) -> Color {
        hex_to_color(0x8ec07c)
    }
}
