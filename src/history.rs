//! Linear undo/redo history of issued commands.
//!
//! The history keeps two stacks. `active` holds the commands currently in
//! effect, oldest first. `redo` holds undone commands with the most recently
//! undone one on top. Issuing a new command drops the whole redo stack, so
//! there is never more than one branch to redo into.

use crate::catalog::Command;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("No command to undo.")]
    NothingToUndo,
    #[error("No previous command to redo.")]
    NothingToRedo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    active: Vec<Command>,
    // Top of the stack is the last element.
    redo: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cmd` as the newest active command and discard the redo branch.
    pub fn issue(&mut self, cmd: Command) {
        if !self.redo.is_empty() {
            tracing::debug!(discarded = self.redo.len(), "redo branch dropped");
            self.redo.clear();
        }
        self.active.push(cmd);
    }

    /// Move the newest active command onto the redo stack and return it.
    pub fn undo(&mut self) -> Result<Command, HistoryError> {
        let cmd = self.active.pop().ok_or(HistoryError::NothingToUndo)?;
        self.redo.push(cmd.clone());
        Ok(cmd)
    }

    /// Move the most recently undone command back into the active list and return it.
    pub fn redo(&mut self) -> Result<Command, HistoryError> {
        let cmd = self.redo.pop().ok_or(HistoryError::NothingToRedo)?;
        self.active.push(cmd.clone());
        Ok(cmd)
    }

    /// Active commands, most recent first.
    pub fn current_history(&self) -> impl Iterator<Item = &Command> + '_ {
        self.active.iter().rev()
    }

    /// Undone commands waiting for redo, most recently undone first.
    pub fn pending_redo(&self) -> impl Iterator<Item = &Command> + '_ {
        self.redo.iter().rev()
    }

    /// Active commands in the order they were applied.
    pub fn active(&self) -> &[Command] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
