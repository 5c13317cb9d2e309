use crate::constants::NO_TASKS_FOUND;
use crate::todo::TodoRecord;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One line of the rendered todo list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Todo {
        /// Key of the delete affordance
        id: i64,
        text: String,
        date: String,
        completed: bool,
    },
    Placeholder(&'static str),
}

impl DisplayRow {
    pub fn id(&self) -> Option<i64> {
        match self {
            DisplayRow::Todo { id, .. } => Some(*id),
            DisplayRow::Placeholder(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            DisplayRow::Todo { text, .. } => text,
            DisplayRow::Placeholder(text) => text,
        }
    }
}

/// Project a page of records into display rows.
///
/// An empty page renders as exactly one placeholder row.
pub fn render_rows(page_records: &[&TodoRecord]) -> Vec<DisplayRow> {
    if page_records.is_empty() {
        return vec![DisplayRow::Placeholder(NO_TASKS_FOUND)];
    }

    page_records
        .iter()
        .map(|record| DisplayRow::Todo {
            id: record.id,
            text: record.text.clone(),
            date: record.created_date.clone(),
            completed: record.completed,
        })
        .collect()
}

pub struct TodoListComponent {
    pub rows: Vec<DisplayRow>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            rows: vec![DisplayRow::Placeholder(NO_TASKS_FOUND)],
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            current_page: 1,
            total_pages: 0,
            total_filtered: 0,
        }
    }

    /// Replace the rendered rows wholesale.
    pub fn update_data(&mut self, rows: Vec<DisplayRow>, current_page: usize, total_pages: usize, total_filtered: usize) {
        self.rows = rows;
        self.current_page = current_page;
        self.total_pages = total_pages;
        self.total_filtered = total_filtered;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.selectable_len() == 0 {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.selectable_len() {
                self.selected_index = self.selectable_len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn selectable_len(&self) -> usize {
        self.rows.iter().filter(|row| row.id().is_some()).count()
    }

    /// Id of the todo under the cursor
    pub fn selected_id(&self) -> Option<i64> {
        self.rows.get(self.selected_index).and_then(DisplayRow::id)
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < self.selectable_len() {
            self.selected_index += 1;
        }
        self.update_list_state();
    }

    fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.update_list_state();
    }

    fn create_list_items(rows: &[DisplayRow]) -> Vec<ListItem<'_>> {
        rows.iter()
            .map(|row| match row {
                DisplayRow::Placeholder(text) => ListItem::new(Line::from(Span::styled(
                    *text,
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ))),
                DisplayRow::Todo {
                    text, date, completed, ..
                } => {
                    let marker = if *completed { "✓ " } else { "○ " };
                    let text_style = if *completed {
                        Style::default().fg(Color::Gray).add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(marker, Style::default().fg(Color::Green)),
                        Span::styled(text.as_str(), text_style),
                        Span::raw("  "),
                        Span::styled(date.as_str(), Style::default().fg(Color::DarkGray)),
                        Span::styled("  [d]", Style::default().fg(Color::Red)),
                    ]))
                }
            })
            .collect()
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrevious,
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Action::PreviousPage,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => Action::NextPage,
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_id() {
                Some(id) => Action::RequestDelete(id),
                None => Action::None,
            },
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectNext => {
                self.select_next();
                Action::None
            }
            Action::SelectPrevious => {
                self.select_previous();
                Action::None
            }
            Action::PreviousPage | Action::NextPage => {
                self.selected_index = 0;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(
            " Tasks: page {} of {} ({} matching) ",
            self.current_page,
            self.total_pages.max(1),
            self.total_filtered
        );
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };

        let items = Self::create_list_items(&self.rows);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .style(Style::default().fg(border_color)),
            )
            .highlight_style(if self.focused {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            })
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
