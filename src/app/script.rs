//! Trace scripts — replay raw pager callbacks without a terminal.
//!
//! A script is a list of tokens separated by whitespace or commas:
//!
//! ```text
//! count=3 phase=dragging scroll=0:0.3 scroll=0:0 commit=1 skim=on
//! ```
//!
//! Each raw input is echoed (`> …`) followed by the events it produced.

use pager_nav::core::{EventRecorder, RawInput, ScrollEventDispatcher, ScrollPhase};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown script token `{0}`")]
    UnknownToken(String),
    #[error("bad number in `{0}`")]
    BadNumber(String),
    #[error("unknown scroll phase in `{0}`")]
    BadPhase(String),
    #[error("expected on/off in `{0}`")]
    BadSwitch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    Count(usize),
    SkimOver(bool),
    Input(RawInput),
}

pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> Result<ScriptStep, ScriptError> {
    let bad_number = || ScriptError::BadNumber(token.to_string());
    let Some((key, value)) = token.split_once('=') else {
        return Err(ScriptError::UnknownToken(token.to_string()));
    };

    match key.to_ascii_lowercase().as_str() {
        "count" => value.parse().map(ScriptStep::Count).map_err(|_| bad_number()),
        "commit" => value
            .parse()
            .map(|p| ScriptStep::Input(RawInput::Committed(p)))
            .map_err(|_| bad_number()),
        "phase" => ScrollPhase::from_name(value)
            .map(|phase| ScriptStep::Input(RawInput::Phase(phase)))
            .ok_or_else(|| ScriptError::BadPhase(token.to_string())),
        "skim" => match value.to_ascii_lowercase().as_str() {
            "on" | "true" => Ok(ScriptStep::SkimOver(true)),
            "off" | "false" => Ok(ScriptStep::SkimOver(false)),
            _ => Err(ScriptError::BadSwitch(token.to_string())),
        },
        "scroll" => {
            let (position, offset) = value.split_once(':').ok_or_else(bad_number)?;
            let position: usize = position.parse().map_err(|_| bad_number())?;
            let offset: f32 = offset.parse().map_err(|_| bad_number())?;
            if !(0.0..1.0).contains(&offset) {
                return Err(bad_number());
            }
            Ok(ScriptStep::Input(RawInput::progress(position, offset)))
        }
        _ => Err(ScriptError::UnknownToken(token.to_string())),
    }
}

/// Run `steps` against a fresh dispatcher with `initial_count` pages.
/// Returns the transcript, one line per input, event or rejection.
pub fn run_script(steps: &[ScriptStep], initial_count: usize, skim_over: bool) -> Vec<String> {
    let mut dispatcher = ScrollEventDispatcher::with_listener(EventRecorder::new());
    dispatcher.set_total_count(initial_count);
    dispatcher.set_skim_over(skim_over);

    let mut lines = Vec::new();
    for step in steps {
        match *step {
            ScriptStep::Count(count) => {
                dispatcher.set_total_count(count);
                lines.push(format!("> count={count}"));
            }
            ScriptStep::SkimOver(on) => {
                dispatcher.set_skim_over(on);
                lines.push(format!("> skim={}", if on { "on" } else { "off" }));
            }
            ScriptStep::Input(input) => {
                lines.push(format!("> {input}"));
                if let Err(e) = dispatcher.handle(input) {
                    lines.push(format!("  ! {e}"));
                }
                if let Some(recorder) = dispatcher.listener_mut() {
                    lines.extend(recorder.drain().into_iter().map(|ev| format!("  {ev}")));
                }
            }
        }
    }
    lines
}
