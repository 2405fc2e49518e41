use crate::catalog::{Catalog, Command, EmptyCatalogError};
use crate::history::History;
use crate::random::RandomSource;

/// All state for one run of the commander.
///
/// The session contains:
/// - `catalog`: the commands that can be issued, fixed after startup.
/// - `history`: the undo/redo history of issued commands.
/// - `rng`: the random source used to draw from the catalog.
/// - `should_exit`: a flag the interaction loop checks to know when to stop.
pub struct Session {
    pub catalog: Catalog,
    pub history: History,
    rng: Box<dyn RandomSource>,
    /// When set to true, indicates that the interaction loop should exit.
    pub should_exit: bool,
}

impl Session {
    pub fn new(catalog: Catalog, rng: Box<dyn RandomSource>) -> Self {
        Self {
            catalog,
            history: History::new(),
            rng,
            should_exit: false,
        }
    }

    /// Draw a random command from the catalog and record it as issued.
    pub fn issue_random(&mut self) -> Result<Command, EmptyCatalogError> {
        let cmd = self.catalog.pick_random(self.rng.as_mut())?.clone();
        tracing::debug!(command = %cmd, "issued");
        self.history.issue(cmd.clone());
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryError;
    use crate::random::ScriptedRandom;

    fn session(commands: &[&str], picks: Vec<usize>) -> Session {
        let catalog = Catalog::new(commands.iter().map(|c| c.to_string()).collect());
        Session::new(catalog, Box::new(ScriptedRandom::new(picks)))
    }

    fn pending(s: &Session) -> Vec<&str> {
        s.history.pending_redo().map(String::as_str).collect()
    }

    #[test]
    fn test_issue_undo_redo_scenario() {
        let mut s = session(&["march", "retreat", "flank"], vec![1, 2]);

        assert_eq!(s.issue_random().unwrap(), "retreat");
        assert_eq!(s.history.active(), ["retreat"]);

        assert_eq!(s.history.undo().unwrap(), "retreat");
        assert!(s.history.is_empty());
        assert_eq!(pending(&s), ["retreat"]);

        assert_eq!(s.history.redo().unwrap(), "retreat");
        assert_eq!(s.history.active(), ["retreat"]);
        assert!(pending(&s).is_empty());

        assert_eq!(s.issue_random().unwrap(), "flank");
        assert_eq!(s.history.active(), ["retreat", "flank"]);
        assert!(pending(&s).is_empty());
    }

    #[test]
    fn test_issue_clears_pending_redo() {
        let mut s = session(&["march", "retreat", "flank"], vec![0, 1, 2]);
        s.issue_random().unwrap();
        s.issue_random().unwrap();
        s.history.undo().unwrap();
        assert_eq!(pending(&s), ["retreat"]);

        s.issue_random().unwrap();
        assert_eq!(s.history.redo(), Err(HistoryError::NothingToRedo));
        assert_eq!(s.history.active(), ["march", "flank"]);
    }

    #[test]
    fn test_issue_from_empty_catalog_leaves_history_alone() {
        let mut s = session(&[], vec![0]);
        assert_eq!(s.issue_random(), Err(EmptyCatalogError));
        assert!(s.history.is_empty());
    }
}
