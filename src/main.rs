//! Terminal tab strip driven by a paged-scroll event dispatcher.
//!
//! Run the binary to drag, release and jump through a row of tabs while the
//! derived enter/leave/select events scroll past underneath.
//! Run with `--trace SCRIPT` to replay raw pager callbacks and print the
//! resulting events instead.

mod app;
mod config;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    script::{parse_script, run_script},
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{event_log::EventLog, layout::AppLayout, tab_strip::TabStrip, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Paged-scroll tab navigator")]
struct Cli {
    /// Number of tabs when no titles are given.
    #[arg(long, default_value_t = 5)]
    pages: usize,

    /// Comma-separated tab titles.
    #[arg(long, value_delimiter = ',')]
    titles: Vec<String>,

    /// Fire enter/leave for tabs passed over during a jump.
    #[arg(long)]
    skim_over: bool,

    /// Replay a script of raw pager callbacks and print the events.
    #[arg(long, value_name = "SCRIPT")]
    trace: Option<String>,

    /// Config file (defaults to the user config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn labels(&self) -> Vec<String> {
        if self.titles.is_empty() {
            (1..=self.pages).map(|i| format!("Tab {i}")).collect()
        } else {
            self.titles.clone()
        }
    }
}

/// Explicit paths must load; a broken default config only costs a warning.
fn load_config(cli: &Cli) -> Result<(AppConfig, Option<PathBuf>)> {
    if let Some(path) = &cli.config {
        return Ok((AppConfig::load_from(path)?, Some(path.clone())));
    }
    let Some(path) = config::default_config_path() else {
        return Ok((AppConfig::default(), None));
    };
    let config = AppConfig::load_from(&path).unwrap_or_else(|e| {
        tracing::warn!("{e:#}; using defaults");
        AppConfig::default()
    });
    Ok((config, Some(path)))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let (mut config, config_path) = load_config(&cli)?;
    if cli.skim_over {
        config.navigator.skim_over = true;
    }
    let labels = cli.labels();

    // ── trace mode ────────────────────────────────────────────
    if let Some(script) = &cli.trace {
        let steps = parse_script(script)?;
        for line in run_script(&steps, labels.len(), config.navigator.skim_over) {
            println!("{line}");
        }
        return Ok(());
    }

    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(1));
    let mut state = AppState::new(labels, config, config_path);
    state.relayout();

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(tick_rate);

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            let strip_block = Block::default()
                .title(" tabs ")
                .title_style(Theme::heading_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            let strip_width = strip_block.inner(layout.strip_area).width;
            let columns = TabStrip::columns(state.navigator.titles());
            state.strip_offset = state
                .navigator
                .scroll_target(strip_width, &columns)
                .unwrap_or(0);
            frame.render_widget(
                TabStrip::new(state.navigator.titles(), state.navigator.indicator())
                    .offset(state.strip_offset)
                    .block(strip_block),
                layout.strip_area,
            );

            let log_block = Block::default()
                .title(format!(
                    " events · {} @ {:.2} · skim-over {} ",
                    state.navigator.dispatcher().scroll_phase(),
                    state.pager.position(),
                    if state.navigator.skim_over() { "on" } else { "off" }
                ))
                .title_style(Theme::heading_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            if let Some(board) = state.navigator.board() {
                frame.render_widget(EventLog::new(board.log()).block(log_block), layout.log_area);
            } else {
                frame.render_widget(log_block, layout.log_area);
            }

            let hint = state.bindings.status_bar_hint();
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        match events.recv().await {
            Some(AppEvent::Key(k)) => handler::handle_key(&mut state, k),
            Some(AppEvent::Tick) if state.pager.is_animating() => state.tick(),
            Some(AppEvent::Tick) => {}
            Some(AppEvent::Resize(_, _)) => state.relayout(),
            None => break, // reader task gave up
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
