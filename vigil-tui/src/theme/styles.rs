use ratatui::style::{Color, Style};
use vigil_core::AgentStatus;

use super::Theme;

/// Fixed color role per status: Off is neutral, Processing green, Waiting
/// amber, and errors red regardless of the carried message.
pub fn status_color(status: &AgentStatus, theme: &dyn Theme) -> Color {
    match status {
        AgentStatus::Off => theme.foreground_dim(),
        AgentStatus::Processing => theme.success(),
        AgentStatus::Waiting => theme.warning(),
        AgentStatus::Error(_) => theme.error(),
    }
}

pub fn status_style(status: &AgentStatus, theme: &dyn Theme) -> Style {
    Style::default().fg(status_color(status, theme))
}
