use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TemplateId;
use crate::panel::{Confirmation, DELETE_PROMPT};

use super::input::Input;
use super::view::literal_text;

#[derive(Debug)]
pub(super) enum ModalKind {
    ApiKey,
    ConfirmDelete { id: TemplateId },
}

#[derive(Debug)]
pub(super) struct Modal {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) kind: ModalKind,
    pub(super) input: Input,
}

impl Modal {
    pub(super) fn api_key() -> Self {
        Self {
            title: "API Key".to_string(),
            lines: vec![
                "Paste the API key for the template service.".to_string(),
                String::new(),
                "Enter to save; Esc to cancel.".to_string(),
            ],
            kind: ModalKind::ApiKey,
            input: Input::default(),
        }
    }

    pub(super) fn confirm_delete(id: TemplateId, name: &str) -> Self {
        Self {
            title: "Delete".to_string(),
            lines: vec![
                DELETE_PROMPT.to_string(),
                String::new(),
                format!("#{} {}", id, literal_text(name)),
                String::new(),
                "y/Enter: delete   n/Esc: keep".to_string(),
            ],
            kind: ModalKind::ConfirmDelete { id },
            input: Input::default(),
        }
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 70);
    let h = area.height.saturating_sub(6).clamp(8, 12);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w.min(area.width),
        height: h.min(area.height),
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();

    match &modal.kind {
        ModalKind::ConfirmDelete { .. } => {
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }

        ModalKind::ApiKey => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

            let prompt = "key: ";
            let input_line = Line::from(vec![
                Span::styled(prompt, Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.masked()),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = prompt.len() as u16 + modal.input.cursor as u16;
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }
    }
}

pub(super) fn handle_modal_key(app: &mut super::app::App<'_>, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        SubmitApiKey(String),
        Delete(TemplateId, Confirmation),
    }

    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };

        match &m.kind {
            ModalKind::ConfirmDelete { id } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    ModalAction::Delete(*id, Confirmation::Accepted)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ModalAction::Delete(*id, Confirmation::Declined)
                }
                _ => ModalAction::None,
            },

            ModalKind::ApiKey => match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => ModalAction::SubmitApiKey(m.input.take()),
                KeyCode::Backspace => {
                    m.input.backspace();
                    ModalAction::None
                }
                KeyCode::Delete => {
                    m.input.delete();
                    ModalAction::None
                }
                KeyCode::Left => {
                    m.input.move_left();
                    ModalAction::None
                }
                KeyCode::Right => {
                    m.input.move_right();
                    ModalAction::None
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    m.input.clear();
                    ModalAction::None
                }
                KeyCode::Char(c) => {
                    if !key.modifiers.contains(KeyModifiers::CONTROL)
                        && !key.modifiers.contains(KeyModifiers::ALT)
                    {
                        m.input.insert_char(c);
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            app.modal = None;
        }
        ModalAction::SubmitApiKey(value) => {
            app.modal = None;
            app.panel.set_api_key(app.api, &value);
            app.clamp_selection();
        }
        ModalAction::Delete(id, confirmation) => {
            app.modal = None;
            app.panel.delete_template(app.api, id, confirmation);
            app.clamp_selection();
        }
    }
}
