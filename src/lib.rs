//! General Cavazos Commander: draw random orders and undo or redo them.
//!
//! The crate loads a fixed [`Catalog`] of command strings from JSON, draws from
//! it through an injectable [`RandomSource`], and records issued commands in a
//! linear undo/redo [`History`]. All state for a run lives in a [`Session`].
//!
//! The main entry point is [`Interpreter`], which runs the text menu loop
//! either over a line editor ([`Interpreter::repl`]) or over arbitrary streams
//! ([`Interpreter::run`]).

mod action;
pub mod catalog;
pub mod command;
pub mod config;
pub mod history;
mod interpreter;
pub mod logging;
pub mod random;
pub mod render;
pub mod session;

pub use catalog::{Catalog, CatalogLoadError, CatalogSource, Command, EmptyCatalogError};
pub use config::Config;
pub use history::{History, HistoryError};
/// Just a convenient re-export of the interactive menu loop.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
pub use random::{RandomSource, ScriptedRandom, SystemRandom};
pub use session::Session;
