//! The fixed list of commands a session can draw from.

use crate::random::RandomSource;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use thiserror::Error;

/// A single command. Opaque text, compared by exact equality.
pub type Command = String;

/// Text used in place of a `null` entry in the source list.
pub const PLACEHOLDER: &str = "Unknown Command";

/// The command list shipped with the binary.
pub const BUNDLED_COMMANDS: &str = include_str!("../commands.json");

/// Reasons a catalog can fail to load. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected a JSON list of commands, found {found}")]
    NotAList { found: &'static str },
    #[error("entry {index} is not a scalar value")]
    NonScalarEntry { index: usize },
}

/// Returned when drawing from a catalog with no entries.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("No commands available to issue.")]
pub struct EmptyCatalogError;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The `commands.json` compiled into the binary.
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled commands.json"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ordered, read-only list of commands. Entries may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    commands: Vec<Command>,
}

impl Catalog {
    /// Build a catalog directly from a list of commands.
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    /// Load the catalog from the given source.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogLoadError> {
        let catalog = match source {
            CatalogSource::Bundled => Self::from_json_str(BUNDLED_COMMANDS)?,
            CatalogSource::File(path) => {
                let file = fs::File::open(path).map_err(|source| CatalogLoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                Self::from_reader(BufReader::new(file))?
            }
        };
        tracing::info!(%source, entries = catalog.size(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from any reader producing a JSON list.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogLoadError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogLoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, CatalogLoadError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(CatalogLoadError::NotAList {
                    found: json_kind(&other),
                });
            }
        };

        let commands = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s),
                Value::Null => {
                    tracing::warn!(index, "null entry replaced with placeholder");
                    Ok(PLACEHOLDER.to_string())
                }
                Value::Bool(b) => Ok(b.to_string()),
                Value::Number(n) => Ok(n.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    Err(CatalogLoadError::NonScalarEntry { index })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { commands })
    }

    pub fn size(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All commands in load order.
    pub fn list(&self) -> &[Command] {
        &self.commands
    }

    /// Draw one entry uniformly through `rng`.
    pub fn pick_random(&self, rng: &mut dyn RandomSource) -> Result<&Command, EmptyCatalogError> {
        if self.commands.is_empty() {
            return Err(EmptyCatalogError);
        }
        let idx = rng.pick_index(self.commands.len());
        // Out-of-range picks from a misbehaving source fall back to the last entry.
        Ok(&self.commands[idx.min(self.commands.len() - 1)])
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
