use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any menu action the interpreter can run.
///
/// This is implemented by the built-in actions via a blanket impl.
pub trait ExecutableAction {
    /// Executes the action against the session, writing user-facing text to `stdout`.
    ///
    /// Errors returned from here are I/O failures; domain refusals such as an
    /// empty undo stack are written to `stdout` as notices instead.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<()>;
}

/// Factory that tries to create an action from a normalized menu symbol.
///
/// Returns `None` when the factory doesn't recognize the `symbol`.
pub trait ActionFactory {
    /// Attempt to create an action instance for the provided symbol.
    fn try_create(&self, symbol: &str) -> Option<Box<dyn ExecutableAction>>;
}
