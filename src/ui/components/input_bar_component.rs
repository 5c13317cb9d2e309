use crate::constants::DATE_PLACEHOLDER;
use crate::ui::app_component::InputFields;
use crate::ui::components::dialogs::common;
use crate::ui::core::{
    actions::{Action, Focus},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// The add-task form and the filter fields.
///
/// Holds a copy of the input buffers; every edit is reported as an action
/// carrying the field's full new value.
#[derive(Debug, Default)]
pub struct InputBarComponent {
    pub inputs: InputFields,
    pub focus: Focus,
}

impl InputBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, inputs: InputFields, focus: Focus) {
        self.inputs = inputs;
        self.focus = focus;
    }

    fn edited(&self, edit: impl FnOnce(&mut String)) -> Action {
        let mut value = self.inputs.value(self.focus).to_string();
        edit(&mut value);
        Action::for_field(self.focus, value)
    }

    fn field<'a>(&'a self, f: &mut Frame, area: Rect, field: Focus, placeholder: Option<&'a str>) {
        let paragraph = common::create_input_paragraph(
            self.inputs.value(field),
            field.title(),
            self.focus == field,
            placeholder,
        );
        f.render_widget(paragraph, area);
    }
}

impl Component for InputBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focus.is_text_input() {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter if matches!(self.focus, Focus::TaskText | Focus::TaskDate) => Action::SubmitNewTask,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.edited(String::clear),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.edited(|v| v.push(c)),
            KeyCode::Backspace => self.edited(|v| {
                v.pop();
            }),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(rect);

        let form = Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).split(rows[0]);
        self.field(f, form[0], Focus::TaskText, Some("What needs doing? (Enter to add)"));
        self.field(f, form[1], Focus::TaskDate, Some(DATE_PLACEHOLDER));

        let filters = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);
        self.field(f, filters[0], Focus::Search, Some("Filter by text"));
        self.field(f, filters[1], Focus::DateFrom, Some(DATE_PLACEHOLDER));
        self.field(f, filters[2], Focus::DateTo, Some(DATE_PLACEHOLDER));
    }
}
