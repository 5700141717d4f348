//! Core event derivation — the dispatcher, its listener contract and the
//! per-page bookkeeping table.
//!
//! Nothing in this module depends on any TUI or rendering crate and nothing
//! here performs I/O.

pub mod dispatcher;
pub mod error;
pub mod input;
pub mod listener;
pub mod pages;

pub use dispatcher::ScrollEventDispatcher;
pub use error::NavError;
pub use input::{RawInput, ScrollPhase};
pub use listener::{EventRecorder, NavEvent, ScrollEventListener};
pub use pages::{PageState, PageTable};
