use crate::toast::{Severity, ToastRequest};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Toast shown after a copy attempt.
pub fn copy_feedback(label: &str, outcome: &Result<(), ClipboardError>) -> ToastRequest {
    match outcome {
        Ok(()) => ToastRequest::new(format!("{label} copied to clipboard!"), Severity::Success),
        Err(_) => ToastRequest::new(format!("Failed to copy {label}"), Severity::Error),
    }
}
