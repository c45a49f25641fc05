use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Template;
use crate::panel::{Focus, FormMode, Panel};
use crate::remote::{RemoteClient, TemplateApi};
use crate::session::Session;
use crate::store::LocalStore;

use super::modal::{self, Modal};
use super::views::{notices_height, render_form, render_notices, render_templates};

mod event_loop;
mod render;

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let dir = match opts.config_dir {
        Some(dir) => dir,
        None => LocalStore::default_dir()?,
    };
    let store = LocalStore::open(&dir)?;
    crate::logging::init_file(&store.log_path())?;

    let cfg = store.read_config()?;
    let base_url = opts
        .base_url
        .unwrap_or_else(|| cfg.effective_base_url().to_string());
    let client = RemoteClient::new(&base_url)?;
    let session = Session::load(Box::new(store))?;
    tracing::info!(base_url = %client.base_url(), "starting tui");

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(Panel::new(session), &client, client.base_url().to_string());
    let res = event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App<'a> {
    pub(super) panel: Panel,
    pub(super) api: &'a dyn TemplateApi,
    pub(super) base_url: String,

    // Index into the loaded templates.
    pub(super) selected: usize,

    pub(super) modal: Option<Modal>,

    pub(super) quit: bool,
}

impl<'a> App<'a> {
    pub(super) fn new(panel: Panel, api: &'a dyn TemplateApi, base_url: String) -> Self {
        Self {
            panel,
            api,
            base_url,
            selected: 0,
            modal: None,
            quit: false,
        }
    }

    pub(super) fn startup(&mut self) {
        self.panel.startup(self.api);
        if !self.panel.session().has_api_key() {
            self.modal = Some(Modal::api_key());
        }
    }

    pub(super) fn selected_template(&self) -> Option<&Template> {
        let items = self.panel.listing().templates();
        items.get(self.selected.min(items.len().saturating_sub(1)))
    }

    pub(super) fn clamp_selection(&mut self) {
        let n = self.panel.listing().templates().len();
        self.selected = self.selected.min(n.saturating_sub(1));
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let n = self.panel.listing().templates().len();
        if n == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(n - 1);
    }

    pub(super) fn reload(&mut self) {
        self.panel.load_templates(self.api);
        self.clamp_selection();
    }

    pub(super) fn view_selected(&mut self) {
        if let Some(id) = self.selected_template().map(|t| t.id) {
            self.panel.view_template(self.api, id);
        }
    }

    pub(super) fn edit_selected(&mut self) {
        if let Some(id) = self.selected_template().map(|t| t.id) {
            self.panel.edit_template(self.api, id);
        }
    }

    pub(super) fn request_delete_selected(&mut self) {
        if let Some(t) = self.selected_template() {
            self.modal = Some(Modal::confirm_delete(t.id, &t.name));
        }
    }

    pub(super) fn submit_form(&mut self) {
        if self.panel.submit(self.api) {
            self.panel.set_focus(Focus::Templates);
        }
        self.clamp_selection();
    }

    pub(super) fn tick(&mut self, now: Instant) {
        self.panel.notices_mut().prune(now);
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
