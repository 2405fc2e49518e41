use crate::catalog::CatalogSource;
use crate::random::{RandomSource, SystemRandom};
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug, Default, PartialEq)]
/// Issue, undo and redo randomly drawn orders from a list of commands.
pub struct Config {
    #[argh(option, short = 'c')]
    /// path to a JSON file with the list of commands. Defaults to the bundled commands.json.
    pub commands: Option<PathBuf>,

    #[argh(option)]
    /// seed for the random draws, making a session reproducible.
    pub seed: Option<u64>,
}

impl Config {
    /// Where the catalog should be loaded from.
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.commands {
            Some(path) => CatalogSource::File(path.clone()),
            None => CatalogSource::Bundled,
        }
    }

    /// The random source for this run.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SystemRandom::seeded(seed)),
            None => Box::new(SystemRandom::from_entropy()),
        }
    }
}
