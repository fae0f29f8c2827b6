use crate::config::TOAST_DEFAULT_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("toast-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// What a caller asks the notifier to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastRequest {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u32,
}

impl ToastRequest {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            duration_ms: TOAST_DEFAULT_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Appends a toast. The caller owns the single removal timer for the
    /// returned id.
    pub fn show(&mut self, request: ToastRequest) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: request.message,
            severity: request.severity,
        });
        id
    }

    /// Returns whether a toast was removed; unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(stack: &ToastStack) -> Vec<ToastId> {
        stack.iter().map(|toast| toast.id).collect()
    }

    #[test]
    fn toast_is_present_until_dismissed() {
        let mut stack = ToastStack::default();
        let id = stack.show(ToastRequest::new("Email copied to clipboard!", Severity::Success));
        assert_eq!(ids(&stack), vec![id]);

        assert!(stack.dismiss(id));
        assert!(ids(&stack).is_empty());
    }

    #[test]
    fn ids_are_unique_and_dismissal_is_targeted() {
        let mut stack = ToastStack::default();
        let first = stack.show(ToastRequest::new("one", Severity::Info));
        let second = stack.show(ToastRequest::new("two", Severity::Error));
        assert_ne!(first, second);

        stack.dismiss(first);
        let remaining: Vec<&str> = stack.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(remaining, vec!["two"]);
    }

    #[test]
    fn second_dismiss_is_a_no_op() {
        let mut stack = ToastStack::default();
        let id = stack.show(ToastRequest::new("bye", Severity::Info));
        assert!(stack.dismiss(id));
        assert!(!stack.dismiss(id));
    }

    #[test]
    fn default_duration_and_class_names() {
        let request = ToastRequest::new("hi", Severity::Error);
        assert_eq!(request.duration_ms, TOAST_DEFAULT_DURATION_MS);
        assert_eq!(Severity::Error.class_name(), "toast-error");
        assert_eq!(Severity::Success.class_name(), "toast-success");
    }
}
