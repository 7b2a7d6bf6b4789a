//! # Mock Framework
//!
//! Utilities for testing stores without a user or a network.
//!
//! [`ScriptedInteraction`] records every notice and answers confirmations
//! from a script. [`Harness`] wires both stores to a [`MemoryTable`] the test
//! can seed, break, and inspect.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::app_system::LaundrySystem;
use crate::interaction::{Confirmation, Interaction, Notice, NoticeKind};
use crate::remote::MemoryTable;

/// Interaction double: records notices, answers confirmations in order.
///
/// When the script runs out, confirmations are answered with `false`.
#[derive(Default)]
pub struct ScriptedInteraction {
    answers: Mutex<VecDeque<bool>>,
    notices: Mutex<Vec<Notice>>,
    prompts: Mutex<Vec<Confirmation>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_next(&self, confirm: bool) {
        self.answers.lock().unwrap().push_back(confirm);
    }

    /// Keeps the next confirmation dialog open until the returned handle
    /// is notified.
    pub fn hold_next_confirm(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<Notice> {
        self.notices()
            .into_iter()
            .filter(|n| n.kind == NoticeKind::Failure)
            .collect()
    }

    pub fn prompts(&self) -> Vec<Confirmation> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Interaction for ScriptedInteraction {
    async fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    async fn confirm(&self, prompt: Confirmation) -> bool {
        self.prompts.lock().unwrap().push(prompt);
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// A running system over an in-memory remote.
pub struct Harness {
    pub remote: Arc<MemoryTable>,
    pub interaction: Arc<ScriptedInteraction>,
    pub system: LaundrySystem,
}

impl Harness {
    pub fn new() -> Self {
        let remote = Arc::new(MemoryTable::new());
        let interaction = Arc::new(ScriptedInteraction::new());
        let system = LaundrySystem::new(8, remote.clone(), interaction.clone());
        Self {
            remote,
            interaction,
            system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_answers_run_out_as_cancel() {
        let interaction = ScriptedInteraction::new();
        interaction.answer_next(true);

        let prompt = Confirmation::destructive("Delete", "Sure?", "Delete");
        assert!(interaction.confirm(prompt.clone()).await);
        assert!(!interaction.confirm(prompt).await);
        assert_eq!(interaction.prompts().len(), 2);

        interaction.notify(Notice::success("Saved", "ok")).await;
        interaction.notify(Notice::failure("Oops", "bad")).await;
        assert_eq!(interaction.notices().len(), 2);
        assert_eq!(interaction.failures(), vec![Notice::failure("Oops", "bad")]);
    }
}
