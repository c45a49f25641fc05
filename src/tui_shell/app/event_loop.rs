use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<'_>,
) -> Result<()> {
    // Paint once so the startup load is not staring at a blank screen.
    terminal
        .draw(|f| super::render::draw(f, app))
        .context("draw")?;
    app.startup();

    loop {
        app.tick(Instant::now());
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App<'_>, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match app.panel.focus() {
        Focus::Templates => handle_list_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_list_key(app: &mut App<'_>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter | KeyCode::Char('v') => app.view_selected(),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('a') => {
            app.modal = Some(Modal::api_key());
        }
        KeyCode::Tab | KeyCode::Char('n') => {
            app.panel.set_focus(Focus::Form);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App<'_>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.panel.set_focus(Focus::Templates);
        }
        KeyCode::Char('s') if ctrl => app.submit_form(),
        KeyCode::Char('r') if ctrl => app.panel.cancel_edit(),
        KeyCode::Char('u') if ctrl => app.panel.form_mut().active_mut().clear(),
        KeyCode::Tab => {
            let form = app.panel.form_mut();
            form.field = form.field.next();
        }
        KeyCode::BackTab => {
            let form = app.panel.form_mut();
            form.field = form.field.prev();
        }
        KeyCode::Enter => {
            let form = app.panel.form_mut();
            if form.field.multiline() {
                form.html_content.push('\n');
            } else {
                form.field = form.field.next();
            }
        }
        KeyCode::Backspace => {
            app.panel.form_mut().active_mut().pop();
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.panel.form_mut().active_mut().push(c);
        }
        _ => {}
    }
}
