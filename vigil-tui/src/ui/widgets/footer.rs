use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let keybinds = [("q", "Quit"), ("r", "Refresh"), ("t", "Theme")];

        let keybind_spans: Vec<Span> = keybinds
            .iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(":{desc} "),
                        Style::default().fg(theme.foreground_dim()),
                    ),
                ]
            })
            .collect();

        let keybinds_widget = Paragraph::new(Line::from(keybind_spans))
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(keybinds_widget, chunks[0]);

        let status_widget = Paragraph::new(Self::status_line(app))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.surface()));
        frame.render_widget(status_widget, chunks[1]);
    }

    fn status_line(app: &App) -> Line<'_> {
        let theme = app.current_theme();

        if let Some(message) = &app.status_message {
            return Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(theme.foreground_dim()),
            ));
        }

        let mut spans = Vec::new();
        if app.last_error.is_some() && app.summary.is_some() {
            // Stale data on screen: the last poll failed but the previous
            // summary is still being shown.
            spans.push(Span::styled(
                "⚠ refresh failed │ ",
                Style::default().fg(theme.warning()),
            ));
        }
        if let Some(summary) = &app.summary {
            spans.push(Span::styled(
                format!("Last updated: {} ", summary.last_updated),
                Style::default().fg(theme.foreground_dim()),
            ));
            spans.push(Span::styled(
                format!("│ {} ", summary.current_directory),
                Style::default().fg(theme.foreground_dim()),
            ));
        }

        Line::from(spans)
    }
}
