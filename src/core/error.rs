//! Errors surfaced by the dispatcher's input methods.

use thiserror::Error;

/// Raised when a host reports a page the dispatcher does not know about.
///
/// Rejected inputs leave every piece of dispatcher state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("page index {index} is out of range for {total_count} pages")]
    InvalidIndex { index: usize, total_count: usize },
}
