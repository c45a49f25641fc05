use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::panel::{Focus, FormField, FormMode, Panel};

use super::super::view::{literal_lines, literal_text, render_view_chrome};

pub(in crate::tui_shell) fn form_title(mode: FormMode) -> String {
    match mode {
        FormMode::Create => "New Template".to_string(),
        FormMode::Update(id) => format!("Edit Template #{}", id),
    }
}

fn field_block(field: FormField, active: bool) -> Block<'static> {
    let style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(field.label())
}

pub(in crate::tui_shell) fn render_form(frame: &mut ratatui::Frame, area: Rect, panel: &Panel) {
    let focused = panel.focus() == Focus::Form;
    let inner = render_view_chrome(frame, &form_title(panel.mode()), focused, area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let form = panel.form();
    let active = |f: FormField| focused && form.field == f;

    for (field, rect) in [
        (FormField::Name, parts[0]),
        (FormField::Description, parts[1]),
    ] {
        frame.render_widget(
            Paragraph::new(literal_text(form.value(field)))
                .block(field_block(field, active(field))),
            rect,
        );
    }

    // Rows are wrapped here so the scroll offset counts what is on screen;
    // the tail stays visible while typing.
    let width = parts[2].width.saturating_sub(2) as usize;
    let html: Vec<Line> = literal_lines(&form.html_content)
        .iter()
        .flat_map(|l| wrap_to_width(l, width))
        .map(Line::from)
        .collect();
    let visible = parts[2].height.saturating_sub(2) as usize;
    let scroll = html.len().saturating_sub(visible.max(1)) as u16;
    frame.render_widget(
        Paragraph::new(html)
            .scroll((scroll, 0))
            .block(field_block(FormField::HtmlContent, active(FormField::HtmlContent))),
        parts[2],
    );

    let mut button = vec![Span::styled(
        format!("[ {} ]", panel.mode().submit_label()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];
    button.push(Span::styled(
        "  Ctrl+S submit",
        Style::default().fg(Color::Gray),
    ));
    if matches!(panel.mode(), FormMode::Update(_)) {
        button.push(Span::styled(
            "  Ctrl+R cancel edit",
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(button)), parts[3]);
}

/// Breaks `line` into rows of at most `width` display columns.
pub(in crate::tui_shell) fn wrap_to_width(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in line.chars() {
        let w = Span::raw(&*c.encode_utf8(&mut buf)).width();
        if used + w > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        row.push(c);
        used += w;
    }
    rows.push(row);
    rows
}
