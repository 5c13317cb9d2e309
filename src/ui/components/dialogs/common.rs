use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block; the focused field shows a cursor and an accent border.
///
/// `placeholder` is shown dimmed while the buffer is empty and unfocused.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    focused: bool,
    placeholder: Option<&'a str>,
) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let line = match (input_buffer.is_empty(), focused, placeholder) {
        (true, false, Some(hint)) => Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        (_, true, _) => Line::from(vec![
            Span::styled(input_buffer, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ]),
        _ => Line::from(Span::styled(input_buffer, Style::default().fg(Color::White))),
    };

    Paragraph::new(line).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const Y_CONFIRM: InstructionShortcut = ("y", Color::Green, " Delete");
    pub const N_DECLINE: InstructionShortcut = ("n", Color::Red, " Keep");
}
