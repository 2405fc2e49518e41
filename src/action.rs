use crate::catalog::EmptyCatalogError;
use crate::command::{ActionFactory, ExecutableAction};
use crate::history::HistoryError;
use crate::interpreter::Factory;
use crate::render;
use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Menu actions known to the commander at compile time.
///
/// Each action is bound to a single-letter symbol and runs in-process against
/// the [`Session`].
pub(crate) trait MenuAction: Sized + Default {
    /// Symbol the user types to trigger the action, e.g. "i" or "q".
    fn symbol() -> &'static str;

    /// Executes the action using the provided output and session.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()>;
}

/// Errors that are an expected answer to the user rather than a failure.
fn is_notice(e: &anyhow::Error) -> bool {
    e.is::<HistoryError>() || e.is::<EmptyCatalogError>()
}

impl<T: MenuAction> ExecutableAction for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        match <T as MenuAction>::execute(*self, stdout, session) {
            Ok(()) => Ok(()),
            Err(e) if is_notice(&e) => {
                writeln!(stdout, "\n{}", e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl<T: MenuAction + 'static> ActionFactory for Factory<T> {
    fn try_create(&self, symbol: &str) -> Option<Box<dyn ExecutableAction>> {
        if symbol == T::symbol() {
            Some(Box::new(T::default()))
        } else {
            None
        }
    }
}

/// Issue a random command from the catalog.
#[derive(Default)]
pub struct Issue;

impl MenuAction for Issue {
    fn symbol() -> &'static str {
        "i"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        let cmd = session.issue_random()?;
        writeln!(stdout, "\nGeneral Cavazos has issued the command: {}", cmd)?;
        Ok(())
    }
}

/// Undo the most recently issued command.
#[derive(Default)]
pub struct Undo;

impl MenuAction for Undo {
    fn symbol() -> &'static str {
        "u"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        let cmd = session.history.undo()?;
        tracing::debug!(command = %cmd, "undone");
        writeln!(stdout, "\nGeneral Cavazos has ordered troops to undo: {}", cmd)?;
        Ok(())
    }
}

/// Redo the most recently undone command.
#[derive(Default)]
pub struct Redo;

impl MenuAction for Redo {
    fn symbol() -> &'static str {
        "r"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        let cmd = session.history.redo()?;
        tracing::debug!(command = %cmd, "redone");
        writeln!(stdout, "\nGeneral Cavazos has ordered troops to redo: {}", cmd)?;
        Ok(())
    }
}

/// List every command in the catalog.
#[derive(Default)]
pub struct List;

impl MenuAction for List {
    fn symbol() -> &'static str {
        "l"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        writeln!(stdout, "\n----- List of all available commands -----")?;
        write!(stdout, "{}", render::render_catalog(Some(session.catalog.list())))?;
        Ok(())
    }
}

/// Show the active history, most recent first.
#[derive(Default)]
pub struct ShowHistory;

impl MenuAction for ShowHistory {
    fn symbol() -> &'static str {
        "h"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        writeln!(stdout, "\n----- Command History (most recent first) -----")?;
        write!(
            stdout,
            "{}",
            render::render_history(Some(session.history.current_history()))
        )?;
        Ok(())
    }
}

/// End the session.
#[derive(Default)]
pub struct Quit;

impl MenuAction for Quit {
    fn symbol() -> &'static str {
        "q"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        writeln!(stdout, "\nGoodbye, General Cavazos!")?;
        session.should_exit = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::random::ScriptedRandom;

    fn session(commands: &[&str], picks: Vec<usize>) -> Session {
        let catalog = Catalog::new(commands.iter().map(|c| c.to_string()).collect());
        Session::new(catalog, Box::new(ScriptedRandom::new(picks)))
    }

    fn run<T: MenuAction + 'static>(session: &mut Session) -> String {
        let mut out: Vec<u8> = Vec::new();
        let action: Box<dyn ExecutableAction> = Box::new(T::default());
        action.execute(&mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_factory_matches_only_its_symbol() {
        let factory = Factory::<Undo>::default();
        assert!(factory.try_create("u").is_some());
        assert!(factory.try_create("r").is_none());
        assert!(factory.try_create("U").is_none());
    }

    #[test]
    fn test_issue_prints_drawn_command() {
        let mut s = session(&["march", "retreat"], vec![1]);
        assert_eq!(
            run::<Issue>(&mut s),
            "\nGeneral Cavazos has issued the command: retreat\n"
        );
        assert_eq!(s.history.active(), ["retreat"]);
    }

    #[test]
    fn test_issue_on_empty_catalog_is_a_notice() {
        let mut s = session(&[], vec![]);
        assert_eq!(run::<Issue>(&mut s), "\nNo commands available to issue.\n");
    }

    #[test]
    fn test_undo_and_redo_messages() {
        let mut s = session(&["flank"], vec![0]);
        assert_eq!(run::<Undo>(&mut s), "\nNo command to undo.\n");
        assert_eq!(run::<Redo>(&mut s), "\nNo previous command to redo.\n");

        run::<Issue>(&mut s);
        assert_eq!(
            run::<Undo>(&mut s),
            "\nGeneral Cavazos has ordered troops to undo: flank\n"
        );
        assert_eq!(
            run::<Redo>(&mut s),
            "\nGeneral Cavazos has ordered troops to redo: flank\n"
        );
    }

    #[test]
    fn test_list_renders_catalog() {
        let mut s = session(&["march"], vec![]);
        assert_eq!(
            run::<List>(&mut s),
            "\n----- List of all available commands -----\n\
             Number\tCommand\n------\t---------------\n00\tmarch\n"
        );

        let mut empty = session(&[], vec![]);
        assert!(run::<List>(&mut empty).ends_with("No commands to display.\n"));
    }

    #[test]
    fn test_history_is_most_recent_first() {
        let mut s = session(&["a", "b"], vec![0, 1]);
        assert!(run::<ShowHistory>(&mut s).ends_with("No commands have been issued yet.\n"));

        run::<Issue>(&mut s);
        run::<Issue>(&mut s);
        assert_eq!(
            run::<ShowHistory>(&mut s),
            "\n----- Command History (most recent first) -----\n1. b\n2. a\n"
        );
    }

    #[test]
    fn test_quit_sets_exit_flag() {
        let mut s = session(&[], vec![]);
        assert_eq!(run::<Quit>(&mut s), "\nGoodbye, General Cavazos!\n");
        assert!(s.should_exit);
    }
}
