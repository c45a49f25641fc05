use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::model::Template;
use crate::panel::{Focus, Panel};

use super::super::view::{literal_lines, literal_text, render_view_chrome};

fn card_lines(t: &Template) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                literal_text(&t.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{}", t.id), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            literal_text(t.description_or_placeholder()),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// The expanded panel: server copy of the template, every field shown literally.
pub(in crate::tui_shell) fn detail_lines(t: &Template) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Cyan);
    let mut out = vec![
        Line::from(Span::styled("  Template Details", label)),
        Line::from(format!("  ID: {}", t.id)),
        Line::from(format!("  Name: {}", literal_text(&t.name))),
        Line::from(format!(
            "  Description: {}",
            literal_text(t.description_or_placeholder())
        )),
        Line::from(Span::styled("  HTML Content:", label)),
    ];
    for l in literal_lines(&t.html_content) {
        out.push(Line::from(Span::styled(
            format!("    {}", l),
            Style::default().fg(Color::White),
        )));
    }
    out
}

pub(in crate::tui_shell) fn render_templates(
    frame: &mut ratatui::Frame,
    area: Rect,
    panel: &Panel,
    selected: usize,
) {
    let focused = panel.focus() == Focus::Templates;
    let inner = render_view_chrome(
        frame,
        "Templates (Enter: view  e: edit  d: delete  r: reload)",
        focused,
        area,
    );

    if let Some(text) = panel.listing().placeholder() {
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false }),
            inner,
        );
        return;
    }

    let items = panel.listing().templates();
    let rows: Vec<ListItem> = items
        .iter()
        .map(|t| {
            let mut lines = card_lines(t);
            if panel.is_expanded(t.id)
                && let Some(full) = panel.expanded()
            {
                lines.extend(detail_lines(full));
            }
            lines.push(Line::from(""));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len().saturating_sub(1))));
    }

    let list = List::new(rows).highlight_style(if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    });
    frame.render_stateful_widget(list, inner, &mut state);
}
