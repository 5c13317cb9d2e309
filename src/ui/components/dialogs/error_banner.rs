//! Error banner component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the notifier's current message, if any.
pub struct ErrorBanner;

impl ErrorBanner {
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>) {
        let Some(message) = message else {
            return;
        };

        f.render_widget(Clear, area);
        let banner = Paragraph::new(message)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Error (Esc to dismiss) ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(banner, area);
    }
}
