use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

pub(super) use crate::text::{literal_lines, literal_text};

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    focused: bool,
    area: Rect,
) -> Rect {
    let color = if focused { Color::Yellow } else { Color::Gray };
    let header = Line::from(Span::styled(title.to_string(), Style::default().fg(color)));
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

const TS_UI: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]");

pub(super) fn fmt_ts_ui(ts: &str) -> String {
    OffsetDateTime::parse(ts, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(TS_UI).ok())
        .unwrap_or_else(|| ts.to_string())
}
