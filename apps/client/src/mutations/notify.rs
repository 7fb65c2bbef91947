use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn error(title: impl Into<String>, err: &ApiError) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            description: Some(err.message().to_string()),
        }
    }
}

/// Where notifications go. The UI layer supplies its own; headless callers
/// use `TracingNotifier`.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Writes notifications to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        let description = toast.description.as_deref().unwrap_or("");
        match toast.kind {
            ToastKind::Success => info!("{}: {}", toast.title, description),
            ToastKind::Error => warn!("{}: {}", toast.title, description),
        }
    }
}

/// Shows `toast` unless the view that started the operation has gone away.
pub(crate) fn notify_if_active(notifier: &dyn Notifier, view: &CancellationToken, toast: Toast) {
    if view.is_cancelled() {
        debug!("View closed, dropping notification: {}", toast.title);
        return;
    }
    notifier.notify(toast);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingNotifier;

    #[test]
    fn test_error_toast_carries_api_message() {
        let toast = Toast::error(
            "Could not rename",
            &ApiError::server(409, "Name already in use", None),
        );
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.description.as_deref(), Some("Name already in use"));
    }

    #[test]
    fn test_cancelled_view_suppresses_notification() {
        let notifier = RecordingNotifier::default();
        let view = CancellationToken::new();

        notify_if_active(&notifier, &view, Toast::success("Saved", "first"));
        view.cancel();
        notify_if_active(&notifier, &view, Toast::success("Saved", "second"));

        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].description.as_deref(), Some("first"));
    }

    #[test]
    fn test_child_view_closes_with_parent() {
        let notifier = RecordingNotifier::default();
        let page = CancellationToken::new();
        let dialog = page.child_token();

        page.cancel();
        notify_if_active(&notifier, &dialog, Toast::success("Saved", "ignored"));
        assert!(notifier.toasts().is_empty());
    }
}
