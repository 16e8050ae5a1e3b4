mod colors;
mod gruvbox;
mod styles;
mod tokyo_night;

pub use colors::hex_to_color;
pub use gruvbox::GruvboxDark;
pub use styles::{status_color, status_style};
pub use tokyo_night::TokyoNight;

use ratatui::style::Color;

pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn foreground_dim(&self) -> Color;

    fn surface(&self) -> Color;
    fn border(&self) -> Color;

    fn accent(&self) -> Color;

    fn success(&self) -> Color;
    fn warning(&self) -> Color;
    fn error(&self) -> Color;
    fn info(&self) -> Color;
}

pub struct ThemeManager {
    themes: Vec<Box<dyn Theme>>,
    current_index: usize,
}

impl ThemeManager {
    /// Build the theme set, starting on the named theme when it exists and
    /// on the first one otherwise.
    pub fn new(initial: &str) -> Self {
        let themes: Vec<Box<dyn Theme>> = vec![Box::new(TokyoNight), Box::new(GruvboxDark)];
        let current_index = themes
            .iter()
            .position(|theme| theme.name() == initial)
            .unwrap_or(0);

        Self {
            themes,
            current_index,
        }
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.themes[self.current_index].as_ref()
    }

    pub fn current_theme_name(&self) -> &'static str {
        self.current_theme().name()
    }

    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.themes.len();
    }
}
