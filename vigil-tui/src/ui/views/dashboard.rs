use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use vigil_core::AgentInfo;

use crate::app::{App, DashboardState};
use crate::theme::{status_style, Theme};
use crate::ui::widgets::Spinner;

pub struct DashboardView;

impl DashboardView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        match app.state {
            DashboardState::Loading => Self::render_loading(frame, area, app),
            DashboardState::Error => Self::render_error(frame, area, app),
            DashboardState::Ready => Self::render_agents(frame, area, app),
        }
    }

    fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let inner = Self::panel(frame, area, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        Spinner::new()
            .with_message("Loading agents...")
            .render(frame, chunks[1], theme, app.animation_tick);
    }

    fn render_error(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let inner = Self::panel(frame, area, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let message = Paragraph::new(Line::from(Span::styled(
            "Failed to load agent data",
            Style::default()
                .fg(theme.error())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
    }

    fn render_agents(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let inner = Self::panel(frame, area, theme);

        let Some(summary) = &app.summary else {
            return;
        };

        let lines: Vec<Line> = summary
            .agents
            .iter()
            .map(|agent| Self::agent_row(agent, theme))
            .collect();

        let paragraph = Paragraph::new(lines).style(Style::default().bg(theme.surface()));
        frame.render_widget(paragraph, inner);
    }

    /// One display row: icon, name, colored status label, and the
    /// "Not installed" marker when the tool is absent.
    fn agent_row<'a>(agent: &'a AgentInfo, theme: &dyn Theme) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!("{} ", agent.status.icon()),
                status_style(&agent.status, theme),
            ),
            Span::styled(
                format!("{:<14}", agent.name),
                Style::default().fg(theme.foreground()),
            ),
            Span::styled(agent.status.label(), status_style(&agent.status, theme)),
        ];

        if !agent.available {
            spans.push(Span::styled(
                "  ⚠ Not installed",
                Style::default().fg(theme.warning()),
            ));
        }

        Line::from(spans)
    }

    fn panel(frame: &mut Frame, area: Rect, theme: &dyn Theme) -> Rect {
        let block = Block::default()
            .title(" AI Agents ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use ratatui::{backend::TestBackend, Terminal};
    use vigil_core::{
        AgentStatus, AgentSummary, StatusBackend, VigilConfig, VigilError, VigilResult,
    };

    use super::*;
    use crate::poller::PollOutcome;
    use crate::ui::layout::MainLayout;

    struct NullBackend;

    #[async_trait]
    impl StatusBackend for NullBackend {
        async fn init(&self) -> VigilResult<()> {
            Ok(())
        }

        async fn agent_summary(&self) -> VigilResult<AgentSummary> {
            Err(VigilError::SummaryUnavailable("unused".to_string()))
        }

        async fn quit(&self) -> VigilResult<()> {
            Ok(())
        }
    }

    fn app() -> App {
        App::new(&VigilConfig::default(), Arc::new(NullBackend))
    }

    fn agent(name: &str, status: AgentStatus, available: bool) -> AgentInfo {
        AgentInfo {
            name: name.to_string(),
            status,
            available,
            last_updated: None,
        }
    }

    fn summary(agents: Vec<AgentInfo>) -> AgentSummary {
        let processing = agents
            .iter()
            .filter(|a| a.status == AgentStatus::Processing)
            .count();
        let waiting = agents
            .iter()
            .filter(|a| a.status == AgentStatus::Waiting)
            .count();
        AgentSummary {
            total_agents: agents.len(),
            processing_count: processing,
            waiting_count: waiting,
            active_count: processing + waiting,
            agents,
            last_updated: "T1".to_string(),
            current_directory: "/x".to_string(),
        }
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| MainLayout::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_loading_view() {
        let app = app();
        let screen = render_to_string(&app);
        assert!(screen.contains("Loading agents..."));
        assert!(!screen.contains("Failed to load agent data"));
    }

    #[test]
    fn test_error_view() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Err(VigilError::SummaryUnavailable("backend gone".to_string())),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("Failed to load agent data"));
    }

    #[test]
    fn test_ready_view_renders_rows_and_header() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![
                agent("a", AgentStatus::Processing, true),
                agent("b", AgentStatus::Off, false),
            ])),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("1/2 active"));
        assert!(screen.contains("Processing"));
        assert!(screen.contains("Off"));

        // Rows keep the summary's order.
        assert!(screen.find("a ").unwrap() < screen.find("b ").unwrap());

        // Exactly the unavailable row carries the marker.
        assert_eq!(screen.matches("Not installed").count(), 1);
    }

    #[test]
    fn test_empty_summary_renders_zero_rows() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![])),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("0/0 active"));
        assert!(!screen.contains("Not installed"));
    }

    #[test]
    fn test_error_status_row() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![agent(
                "a",
                AgentStatus::Error("crashed".to_string()),
                true,
            )])),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("Error: crashed"));
        assert!(screen.contains("0/1 active"));
    }

    #[test]
    fn test_available_agent_has_no_marker_regardless_of_status() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![
                agent("a", AgentStatus::Off, true),
                agent("b", AgentStatus::Error("boom".to_string()), true),
            ])),
        });

        let screen = render_to_string(&app);
        assert!(!screen.contains("Not installed"));
    }

    #[test]
    fn test_footer_shows_last_updated_and_directory() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![agent("a", AgentStatus::Waiting, true)])),
        });

        let screen = render_to_string(&app);
        assert!(screen.contains("Last updated: T1"));
        assert!(screen.contains("/x"));
    }

    #[test]
    fn test_footer_flags_stale_data_after_failed_poll() {
        let mut app = app();
        app.apply_outcome(PollOutcome {
            seq: 1,
            result: Ok(summary(vec![agent("a", AgentStatus::Waiting, true)])),
        });
        app.apply_outcome(PollOutcome {
            seq: 2,
            result: Err(VigilError::SummaryUnavailable("backend gone".to_string())),
        });

        let screen = render_to_string(&app);
        // Still Ready, still showing the last-good summary.
        assert!(screen.contains("1/1 active"));
        assert!(screen.contains("refresh failed"));
    }
}
