use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(22),
                Constraint::Min(16),
                Constraint::Length(10),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("◆ ", Style::default().fg(theme.accent())),
            Span::styled(
                "Vigil ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", VERSION),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(title, chunks[0]);

        let badge = match &app.summary {
            Some(summary) => {
                let color = if summary.active_count > 0 {
                    theme.success()
                } else {
                    theme.foreground_dim()
                };
                Line::from(vec![
                    Span::styled(
                        "AI Agents  ",
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}/{} active", summary.active_count, summary.total_agents),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "AI Agents",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
        };
        let badge_widget = Paragraph::new(badge)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().bg(theme.background()));
        frame.render_widget(badge_widget, chunks[1]);

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let time_widget = Paragraph::new(Line::from(Span::styled(
            time,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(time_widget, chunks[2]);
    }
}
