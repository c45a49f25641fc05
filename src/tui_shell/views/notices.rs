use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::notify::{NoticeKind, Notices};

use super::super::view::{fmt_ts_ui, literal_text};

const MAX_VISIBLE: usize = 4;

pub(in crate::tui_shell) fn notices_height(notices: &Notices) -> u16 {
    notices.len().min(MAX_VISIBLE) as u16
}

pub(in crate::tui_shell) fn render_notices(frame: &mut ratatui::Frame, area: Rect, notices: &Notices) {
    let lines: Vec<Line> = notices
        .iter()
        .take(MAX_VISIBLE)
        .map(|n| {
            let style = match n.kind {
                NoticeKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
                NoticeKind::Error => Style::default().fg(Color::White).bg(Color::Red),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", fmt_ts_ui(&n.ts)), Style::default().fg(Color::Gray)),
                Span::styled(format!(" {} ", literal_text(&n.message)), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
