use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

pub struct Spinner {
    frames: Vec<&'static str>,
    message: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frames: vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            message: None,
        }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn frame(&self, tick: u64) -> &'static str {
        let idx = (tick as usize) % self.frames.len();
        self.frames[idx]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, tick: u64) {
        let spinner_char = self.frame(tick);

        let mut spans = vec![Span::styled(
            spinner_char,
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(ref msg) = self.message {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                msg.clone(),
                Style::default().fg(theme.foreground_dim()),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
