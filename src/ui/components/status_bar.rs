//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::constants::LOADING_TEXT;
use crate::ui::core::Focus;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn text(loading: bool, focus: Focus, total_records: usize) -> String {
        if loading {
            return LOADING_TEXT.to_string();
        }

        let hints = if focus == Focus::List {
            "j/k: select • d: delete • h/l: page • Tab: fields • q: quit"
        } else {
            "Enter: add • Tab: next field • Esc: dismiss error • Ctrl-C: quit"
        };
        format!("{} todos • {}", total_records, hints)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, loading: bool, focus: Focus, total_records: usize) {
        let status_color = if loading { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(Self::text(loading, focus, total_records))
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
