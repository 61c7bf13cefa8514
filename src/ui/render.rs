use crate::ui::app::App;
use crate::ui::dialog::render_alert_dialog;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let (body, footer) = layout_regions(frame.area());

    let mut lines = Vec::new();
    for (index, preset) in app.presets().iter().enumerate().take(9) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", index + 1), Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("{:<14}", preset.name),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(preset.alert.title().to_string(), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    if app.presets().is_empty() {
        lines.push(Line::from(" No presets configured"));
    }

    lines.push(Line::from(""));
    for entry in &app.state().log {
        lines.push(Line::from(Span::styled(
            format!(" {}", entry),
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let block = Block::default()
        .title(" alertkit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), body);

    let hint = if app.dialog().is_some() {
        " ←/→ focus  Enter select  Esc dismiss"
    } else {
        " 1-9 open alert  q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(MUTED_TEXT)))),
        footer,
    );

    if let Some(spec) = app.dialog() {
        render_alert_dialog(frame, spec, app.focus());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Alert, Button};
    use crate::ui::alert::ButtonLabels;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_presets_and_dialog() {
        let alert = Alert::new("Saved", None, Some(Button::default("Nice")));
        let mut app = App::new(vec![("saved".into(), alert)], ButtonLabels::default());
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();

        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("saved"));
        assert!(!text.contains("[ Nice ]"));

        app.open_preset(0);
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("[ Nice ]"));
        assert!(text.contains("Esc dismiss"));
    }
}
