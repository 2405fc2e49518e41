use cavazos_commander::{logging, Config, Interpreter};
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_logging();
    let config: Config = argh::from_env();

    let Some(mut commander) = Interpreter::start(&config, &mut std::io::stderr()) else {
        return ExitCode::FAILURE;
    };

    let result = if std::io::stdin().is_terminal() {
        commander.repl().map_err(anyhow::Error::from)
    } else {
        commander.run(std::io::stdin().lock(), &mut std::io::stdout())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
