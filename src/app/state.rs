//! Central application state.
//!
//! Everything the event loop mutates lives here; rendering only ever reads
//! it through `&AppState`.

use std::path::PathBuf;

use pager_nav::core::RawInput;

use crate::config::{AppConfig, Bindings};

use super::navigator::TabNavigator;
use super::pager::PagerSim;

pub struct AppState {
    /// Tab titles and the dispatcher behind them.
    pub navigator: TabNavigator,
    /// The simulated pager producing raw scroll callbacks.
    pub pager: PagerSim,
    pub config: AppConfig,
    /// Where toggled settings get written back, if anywhere.
    pub config_path: Option<PathBuf>,
    pub bindings: Bindings,
    /// Horizontal scroll of the tab strip, in cells.
    pub strip_offset: u16,
    /// Counter for naming tabs added at runtime.
    pub next_tab_number: usize,
    pub should_quit: bool,
    /// Shown in the status bar instead of the key hint.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(labels: Vec<String>, config: AppConfig, config_path: Option<PathBuf>) -> Self {
        let pager = PagerSim::new(
            labels.len(),
            config.pager.settle_speed,
            config.pager.page_width,
        );
        let next_tab_number = labels.len() + 1;
        Self {
            navigator: TabNavigator::new(config.navigator.clone(), labels),
            pager,
            bindings: config.bindings(),
            config,
            config_path,
            strip_offset: 0,
            next_tab_number,
            should_quit: false,
            status_message: None,
        }
    }

    /// Hand pager output to the navigator.  Rejected inputs are reported in
    /// the status bar; the remaining inputs are still delivered.
    pub fn feed(&mut self, inputs: Vec<RawInput>) {
        for input in inputs {
            if let Err(e) = self.navigator.apply(input) {
                tracing::warn!("{input} rejected: {e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Layout pass: re-select the current tab if the navigator wants that.
    pub fn relayout(&mut self) {
        if let Err(e) = self.navigator.relayout() {
            tracing::warn!("relayout failed: {e}");
            self.status_message = Some(e.to_string());
        }
    }

    /// Replace the tab set and keep pager and navigator in step.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        let count = labels.len();
        self.navigator.set_titles(labels);
        let inputs = self.pager.set_page_count(count);
        self.feed(inputs);
        self.relayout();
    }

    /// One animation frame.
    pub fn tick(&mut self) {
        let inputs = self.pager.tick();
        self.feed(inputs);
    }

    pub fn labels(&self) -> Vec<String> {
        self.navigator
            .titles()
            .iter()
            .map(|t| t.label.clone())
            .collect()
    }
}
