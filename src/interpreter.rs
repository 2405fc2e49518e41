use crate::catalog::{Catalog, CatalogLoadError};
use crate::command::{ActionFactory, ExecutableAction};
use crate::config::Config;
use crate::render;
use crate::session::Session;
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter a command: ";

/// Consecutive failed reads after which the input is treated as closed.
const MAX_READ_FAILURES: usize = 3;

/// Factory allows creating instances of ExecutableAction.
///
/// Only supports actions defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The menu-driven interaction loop.
///
/// The interpreter owns a [`Session`] and a list of [`ActionFactory`] objects
/// that are queried to create an action for each line of input. See
/// [`Interpreter::new`] for the actions included out of the box.
///
/// Example
/// ```
/// use cavazos_commander::{Catalog, Interpreter, ScriptedRandom, Session};
/// let catalog = Catalog::new(vec!["march".into(), "retreat".into()]);
/// let session = Session::new(catalog, Box::new(ScriptedRandom::new(vec![1])));
/// let mut commander = Interpreter::new(session);
///
/// let mut out: Vec<u8> = Vec::new();
/// commander.dispatch("I", &mut out).unwrap();
/// assert_eq!(commander.session().history.active(), ["retreat"]);
/// ```
pub struct Interpreter {
    session: Session,
    actions: Vec<Box<dyn ActionFactory>>,
}

impl Interpreter {
    /// Create an interpreter with the default set of actions:
    /// issue, undo, redo, list, history and quit.
    pub fn new(session: Session) -> Self {
        use crate::action::*;
        Self::with_actions(
            session,
            vec![
                Box::new(Factory::<Issue>::default()),
                Box::new(Factory::<Undo>::default()),
                Box::new(Factory::<Redo>::default()),
                Box::new(Factory::<List>::default()),
                Box::new(Factory::<ShowHistory>::default()),
                Box::new(Factory::<Quit>::default()),
            ],
        )
    }

    /// Create an interpreter with a custom set of action factories.
    pub fn with_actions(session: Session, actions: Vec<Box<dyn ActionFactory>>) -> Self {
        Self { session, actions }
    }

    /// Load the catalog named by `config` and build a ready-to-run interpreter.
    pub fn from_config(config: &Config) -> std::result::Result<Self, CatalogLoadError> {
        let catalog = Catalog::load(&config.catalog_source())?;
        Ok(Self::new(Session::new(catalog, config.random_source())))
    }

    /// Startup: build the interpreter, or write the fatal diagnostic to
    /// `stderr` and return `None` without entering the loop.
    pub fn start(config: &Config, stderr: &mut dyn Write) -> Option<Self> {
        match Self::from_config(config) {
            Ok(interp) => Some(interp),
            Err(e) => {
                tracing::error!(error = %e, "catalog failed to load");
                let _ = report_fatal(&e, stderr);
                None
            }
        }
    }

    /// The session this interpreter drives.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one line of input: normalize it, run the matching action and
    /// redisplay the menu unless the session is ending.
    pub fn dispatch(&mut self, line: &str, stdout: &mut dyn Write) -> anyhow::Result<()> {
        let symbol = line.trim().to_lowercase();
        let action = self.actions.iter().find_map(|f| f.try_create(&symbol));
        match action {
            Some(action) => action
                .execute(stdout, &mut self.session)
                .with_context(|| format!("running '{}'", symbol))?,
            None => {
                tracing::debug!(input = %line, "unrecognized input");
                writeln!(stdout, "\nInvalid option. Please enter i, l, u, r, h, or q.")?;
            }
        }

        if !self.session.should_exit {
            writeln!(stdout)?;
            write!(stdout, "{}", render::render_menu())?;
        }
        Ok(())
    }

    /// Run the loop over arbitrary streams until quit or end of input.
    ///
    /// Used when stdin is not a terminal, and by tests. Lines that are not
    /// valid UTF-8 are decoded lossily and end up as unrecognized input.
    pub fn run<R: BufRead>(&mut self, mut input: R, stdout: &mut dyn Write) -> anyhow::Result<()> {
        write!(stdout, "{}", render::render_menu())?;
        let mut failures = 0;
        while !self.session.should_exit {
            write!(stdout, "{}", PROMPT)?;
            stdout.flush()?;

            let mut buf = Vec::new();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.farewell(stdout)?;
                    break;
                }
                Ok(_) => {
                    failures = 0;
                    let line = String::from_utf8_lossy(&buf);
                    self.dispatch_reporting(&line, stdout)?;
                }
                Err(e) => {
                    let e = anyhow::Error::from(e).context("reading input");
                    self.read_failed(&e, &mut failures, stdout)?;
                }
            }
        }
        Ok(())
    }

    /// Interactive Read-Eval-Print Loop over a line editor.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();
        print!("{}", render::render_menu());

        let mut failures = 0;
        while !self.session.should_exit {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    failures = 0;
                    if !line.trim().is_empty() {
                        if let Err(e) = rl.add_history_entry(line.as_str()) {
                            tracing::warn!(error = %e, "line not added to editor history");
                        }
                    }
                    self.dispatch_reporting(&line, &mut stdout)?;
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    self.farewell(&mut stdout)?;
                    break;
                }
                Err(err) => {
                    let e = anyhow::Error::from(err).context("reading input");
                    self.read_failed(&e, &mut failures, &mut stdout)?;
                }
            }
        }

        Ok(())
    }

    /// Dispatch a line and report any failure without ending the loop.
    fn dispatch_reporting(&mut self, line: &str, stdout: &mut dyn Write) -> std::io::Result<()> {
        if let Err(e) = self.dispatch(line, stdout) {
            report_error(&e, stdout)?;
        }
        Ok(())
    }

    /// Report a failed read and keep going, unless reads keep failing.
    fn read_failed(
        &mut self,
        e: &anyhow::Error,
        failures: &mut usize,
        stdout: &mut dyn Write,
    ) -> std::io::Result<()> {
        report_error(e, stdout)?;
        *failures += 1;
        if *failures >= MAX_READ_FAILURES {
            tracing::error!(failures = *failures, "input keeps failing, ending session");
            self.farewell(stdout)?;
        }
        Ok(())
    }

    fn farewell(&mut self, stdout: &mut dyn Write) -> std::io::Result<()> {
        writeln!(stdout, "\nGoodbye, General Cavazos!")?;
        self.session.should_exit = true;
        Ok(())
    }
}

fn report_error(e: &anyhow::Error, stdout: &mut dyn Write) -> std::io::Result<()> {
    tracing::error!(error = %format!("{e:#}"), "iteration failed");
    writeln!(stdout, "\nError: {:#}", e)?;
    writeln!(stdout, "Please try again.\n")
}

/// Write the diagnostic for a catalog that could not be loaded.
fn report_fatal(e: &CatalogLoadError, stderr: &mut dyn Write) -> std::io::Result<()> {
    writeln!(stderr, "\nFatal Error: Unable to start the General Cavazos Commander App.")?;
    writeln!(stderr, "Reason: {}", e)?;
    writeln!(stderr, "Please check that your commands.json file is valid and try again.")
}
