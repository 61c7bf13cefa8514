//! Terminal rendering of an alert dialog.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::alert::{DialogSpec, NativeButton, NativeStyle};
use crate::ui::input::DialogFocus;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, AFFIRMATIVE, DESTRUCTIVE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
};

/// Width of the alert dialog.
const DIALOG_WIDTH: u16 = 50;

/// Left margin inside the dialog.
const INDENT: &str = "  ";

/// Render the alert dialog on top of whatever is already drawn.
pub fn render_alert_dialog(frame: &mut Frame, spec: &DialogSpec, focus: &DialogFocus) {
    let text_width = usize::from(DIALOG_WIDTH.saturating_sub(2)) - INDENT.len() * 2;

    let mut lines = vec![Line::from("")];
    if let Some(message) = &spec.message {
        for row in wrap_text(message, text_width) {
            lines.push(Line::from(Span::styled(
                format!("{}{}", INDENT, row),
                Style::default().fg(HEADER_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }
    lines.push(render_buttons(&spec.buttons, focus.index()));

    // borders
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(DIALOG_WIDTH, height, frame.area());

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", spec.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the button row, centered, focused button bracketed.
fn render_buttons(buttons: &[NativeButton], focused: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (index, button) in buttons.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("    "));
        }
        let text = if index == focused {
            format!("[ {} ]", button.label)
        } else {
            format!("  {}  ", button.label)
        };
        spans.push(Span::styled(text, button_style(button.style, index == focused)));
    }
    Line::from(spans).alignment(Alignment::Center)
}

fn button_style(style: NativeStyle, focused: bool) -> Style {
    let base = match style {
        NativeStyle::Affirmative => Style::default()
            .fg(AFFIRMATIVE)
            .add_modifier(Modifier::BOLD),
        NativeStyle::Destructive => Style::default()
            .fg(DESTRUCTIVE)
            .add_modifier(Modifier::BOLD),
        NativeStyle::Cancel => Style::default().fg(MUTED_TEXT),
    };
    if focused {
        base.bg(ACTIVE_HIGHLIGHT)
    } else {
        base
    }
}

/// Greedy word wrap. Words longer than `width` are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut row = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !row.is_empty() {
                    rows.push(std::mem::take(&mut row));
                }
                let rest = word.split_off(width);
                rows.push(word.into_iter().collect());
                word = rest;
            }

            let row_len = row.chars().count();
            if row_len > 0 && row_len + 1 + word.len() > width {
                rows.push(std::mem::take(&mut row));
            }
            if !row.is_empty() {
                row.push(' ');
            }
            row.extend(word);
        }
        rows.push(row);
    }

    rows
}
