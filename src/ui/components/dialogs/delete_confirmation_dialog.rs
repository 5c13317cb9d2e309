//! Delete confirmation dialog component

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::constants::DELETE_CONFIRMATION_PROMPT;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

/// Asks the user to confirm deleting one todo.
#[derive(Debug, Default)]
pub struct DeleteConfirmationDialog {
    /// Text of the todo awaiting confirmation; `None` hides the dialog
    pub target: Option<String>,
}

impl DeleteConfirmationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    fn preview(text: &str) -> String {
        if text.chars().count() > 40 {
            let head: String = text.chars().take(37).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    }
}

impl Component for DeleteConfirmationDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmDelete,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelDelete,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(target) = &self.target else {
            return;
        };

        let area = LayoutManager::centered_rect(60, 30, rect);
        f.render_widget(Clear, area);

        let block = common::create_dialog_block(" ⚠️  Confirm Delete ", Color::Red);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let text = format!("{}\n\n\"{}\"", DELETE_CONFIRMATION_PROMPT, Self::preview(target));
        let body = Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(body, chunks[0]);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::Y_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::N_DECLINE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
