//! Input handling — maps key events to pager gestures.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Action;

use super::state::AppState;

/// Fewest tabs the demo allows.
const MIN_TABS: usize = 1;

/// Process one key press.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Digits jump with a settle animation, skimming the tabs in between.
    if let KeyCode::Char(c @ '1'..='9') = key.code {
        if key.modifiers.is_empty() {
            let page = c as usize - '1' as usize;
            if page < state.pager.page_count() {
                let inputs = state.pager.smooth_scroll_to(page);
                state.feed(inputs);
            }
            return;
        }
    }

    let Some(action) = state.bindings.match_key(key) else {
        return;
    };
    state.status_message = None;

    let step = state.config.pager.drag_step;
    let inputs = match action {
        Action::Quit => {
            state.should_quit = true;
            return;
        }
        Action::PrevPage => {
            let page = state.pager.committed().saturating_sub(1);
            state.pager.smooth_scroll_to(page)
        }
        Action::NextPage => {
            let page = state.pager.committed() + 1;
            state.pager.smooth_scroll_to(page)
        }
        Action::DragLeft => state.pager.drag_by(-step),
        Action::DragRight => state.pager.drag_by(step),
        Action::Release => state.pager.release(),
        Action::FirstPage => state.pager.jump_to(0),
        Action::LastPage => {
            let last = state.pager.page_count().saturating_sub(1);
            state.pager.jump_to(last)
        }
        Action::ToggleSkimOver => {
            toggle_skim_over(state);
            return;
        }
        Action::AddPage => {
            let mut labels = state.labels();
            labels.push(format!("Tab {}", state.next_tab_number));
            state.next_tab_number += 1;
            state.set_labels(labels);
            return;
        }
        Action::RemovePage => {
            let mut labels = state.labels();
            if labels.len() > MIN_TABS {
                labels.pop();
                state.set_labels(labels);
            }
            return;
        }
    };
    state.feed(inputs);
}

fn toggle_skim_over(state: &mut AppState) {
    let on = !state.navigator.skim_over();
    state.navigator.set_skim_over(on);
    state.config.navigator.skim_over = on;

    let mut message = format!("Skim-over {}", if on { "on" } else { "off" });
    if let Some(path) = &state.config_path {
        if let Err(e) = state.config.save_to(path) {
            tracing::warn!("saving config: {e}");
            message.push_str(" (not saved)");
        }
    }
    state.status_message = Some(message);
}
