//! Application orchestration — state, terminal events, input handling and
//! the simulated pager that feeds the navigator.

pub mod event;
pub mod handler;
pub mod navigator;
pub mod pager;
pub mod script;
pub mod state;
