use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App<'_>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(notices_height(app.panel.notices())),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let key_span = if app.panel.session().has_api_key() {
        Span::styled("key: set", Style::default().fg(Color::Green))
    } else {
        Span::styled("key: not set (a)", Style::default().fg(Color::Red))
    };
    let mode_span = match app.panel.mode() {
        FormMode::Create => Span::styled("mode: create", Style::default().fg(Color::Gray)),
        FormMode::Update(id) => Span::styled(
            format!("mode: update #{}", id),
            Style::default().fg(Color::Yellow),
        ),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Template Admin",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::raw(app.base_url.as_str()),
        Span::raw("  "),
        key_span,
        Span::raw("  "),
        mode_span,
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_notices(frame, chunks[1], app.panel.notices());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    render_templates(frame, main[0], &app.panel, app.selected);
    render_form(frame, main[1], &app.panel);

    // Footer
    let hint = match app.panel.focus() {
        Focus::Templates => {
            "Up/Down select  Enter view  e edit  d delete  r reload  a api key  Tab form  q quit"
        }
        Focus::Form => {
            "Tab next field  Enter newline (HTML)  Ctrl+S submit  Ctrl+R reset  Esc list"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )))
        .block(Block::default().borders(Borders::TOP)),
        chunks[3],
    );

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    }
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
