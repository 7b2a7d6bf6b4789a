//! The user-facing prompts the stores rely on: notices and confirmations.

use async_trait::async_trait;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A message shown to the user, dismissed before the flow continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// A Cancel/Confirm question guarding a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Confirmation {
    pub fn destructive(title: impl Into<String>, message: impl Into<String>, confirm_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[async_trait]
pub trait Interaction: Send + Sync {
    async fn notify(&self, notice: Notice);

    /// Returns `true` only when the user picked the confirm choice.
    async fn confirm(&self, prompt: Confirmation) -> bool;
}

/// Headless interaction: notices go to the log and confirmations get a
/// fixed answer.
#[derive(Debug, Clone)]
pub struct LogInteraction {
    auto_confirm: bool,
}

impl LogInteraction {
    pub fn new(auto_confirm: bool) -> Self {
        Self { auto_confirm }
    }
}

#[async_trait]
impl Interaction for LogInteraction {
    async fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => info!(title = %notice.title, "{}", notice.message),
            NoticeKind::Failure => error!(title = %notice.title, "{}", notice.message),
        }
    }

    async fn confirm(&self, prompt: Confirmation) -> bool {
        let choice = if self.auto_confirm { &prompt.confirm_label } else { &prompt.cancel_label };
        warn!(title = %prompt.title, choice = %choice, "{}", prompt.message);
        self.auto_confirm
    }
}
