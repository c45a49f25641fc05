use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use template_admin::model::Template;
use template_admin::notify::NoticeKind;
use template_admin::panel::{Confirmation, DELETE_PROMPT, FormMode, Panel};
use template_admin::remote::TemplateApi;
use template_admin::session::Session;
use template_admin::text::{literal_lines, literal_text};

use crate::cli_runtime::CliEnv;
use crate::{Commands, ConfigCommands};

pub(super) fn handle_command(ctx: &CliEnv, command: Commands) -> Result<()> {
    match command {
        Commands::Login { api_key } => {
            let client = ctx.client()?;
            let mut panel = open_panel(ctx)?;
            panel.set_api_key(&client, &api_key);
            report(&panel)?;
        }
        Commands::Config { command } => handle_config_command(ctx, command)?,
        Commands::List { json } => {
            let client = ctx.client()?;
            let key = require_api_key(ctx)?;
            let templates = client.list_templates(&key).context("list templates")?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&templates).context("serialize templates json")?
                );
            } else if templates.is_empty() {
                println!("No templates found");
            } else {
                for t in &templates {
                    println!(
                        "{}\t{}\t{}",
                        t.id,
                        literal_text(&t.name),
                        literal_text(t.description_or_placeholder())
                    );
                }
            }
        }
        Commands::Show { id, json } => {
            let client = ctx.client()?;
            let key = require_api_key(ctx)?;
            let template = client
                .get_template(&key, id)
                .with_context(|| format!("show template {}", id))?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&template).context("serialize template json")?
                );
            } else {
                print_template(&template);
            }
        }
        Commands::Create {
            name,
            description,
            html,
            html_file,
        } => {
            let client = ctx.client()?;
            let mut panel = open_panel(ctx)?;
            let form = panel.form_mut();
            form.name = name;
            form.description = description.unwrap_or_default();
            form.html_content = read_html(html, html_file)?.unwrap_or_default();
            panel.create_template(&client);
            report(&panel)?;
        }
        Commands::Update {
            id,
            name,
            description,
            html,
            html_file,
        } => {
            let html = read_html(html, html_file)?;
            let client = ctx.client()?;
            let mut panel = open_panel(ctx)?;

            // Start from the server copy, exactly like the edit button.
            panel.edit_template(&client, id);
            if panel.mode() != FormMode::Update(id) {
                return report(&panel);
            }
            let form = panel.form_mut();
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(html) = html {
                form.html_content = html;
            }
            panel.submit(&client);
            report(&panel)?;
        }
        Commands::Delete { id, yes } => {
            let confirmation = if yes {
                Confirmation::Accepted
            } else {
                confirm(&format!("{} (#{})", DELETE_PROMPT, id))?
            };
            let client = ctx.client()?;
            let mut panel = open_panel(ctx)?;
            panel.delete_template(&client, id, confirmation);
            report(&panel)?;
        }
    }

    Ok(())
}

fn handle_config_command(ctx: &CliEnv, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = ctx.store.read_config()?;
            let base_url = ctx
                .base_url
                .clone()
                .unwrap_or_else(|| cfg.effective_base_url().to_string());
            let has_api_key = open_session(ctx)?.has_api_key();
            if json {
                let out = serde_json::json!({
                    "config_dir": ctx.store.root(),
                    "base_url": base_url,
                    "has_api_key": has_api_key,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize config json")?
                );
            } else {
                println!("config dir: {}", ctx.store.root().display());
                println!("base url: {}", base_url);
                println!("api key: {}", if has_api_key { "set" } else { "not set" });
            }
        }
        ConfigCommands::SetUrl { url } => {
            ctx.store.set_base_url(&url)?;
            println!("Base URL saved");
        }
    }
    Ok(())
}

fn open_session(ctx: &CliEnv) -> Result<Session> {
    Session::load(Box::new(ctx.store.clone())).context("load session")
}

fn open_panel(ctx: &CliEnv) -> Result<Panel> {
    Ok(Panel::new(open_session(ctx)?))
}

fn require_api_key(ctx: &CliEnv) -> Result<String> {
    match open_session(ctx)?.api_key() {
        Some(key) => Ok(key.to_string()),
        None => bail!("no API key configured (run `template-admin login --api-key ...`)"),
    }
}

fn read_html(html: Option<String>, html_file: Option<PathBuf>) -> Result<Option<String>> {
    match (html, html_file) {
        (Some(html), _) => Ok(Some(html)),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))
            .map(Some),
        (None, None) => Ok(None),
    }
}

fn confirm(prompt: &str) -> Result<Confirmation> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N] ", prompt).context("write prompt")?;
    stdout.flush().context("flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(match line.trim() {
        "y" | "Y" | "yes" | "YES" => Confirmation::Accepted,
        _ => Confirmation::Declined,
    })
}

/// Prints what the panel reported, oldest first. Any error fails the command.
fn report(panel: &Panel) -> Result<()> {
    let mut notices: Vec<_> = panel.notices().iter().collect();
    notices.reverse();

    let mut errors = Vec::new();
    for n in notices {
        match n.kind {
            NoticeKind::Success => println!("{}", literal_text(&n.message)),
            NoticeKind::Error => errors.push(literal_text(&n.message)),
        }
    }
    if !errors.is_empty() {
        bail!("{}", errors.join("; "));
    }
    Ok(())
}

/// Human-readable view; server text is escaped like the TUI detail panel.
/// `--json` is the raw form.
fn print_template(t: &Template) {
    println!("id: {}", t.id);
    println!("name: {}", literal_text(&t.name));
    println!("description: {}", literal_text(t.description_or_placeholder()));
    println!();
    for line in literal_lines(&t.html_content) {
        println!("{}", line);
    }
}
