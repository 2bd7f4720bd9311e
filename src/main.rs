use std::io::{self, BufWriter};
use std::process::ExitCode;

use fgroups::config::Config;
use fgroups::engine;
use fgroups::error::FgroupsError;
use fgroups::logging::{self, Stage};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may not be initialized yet when configuration fails.
            eprintln!("fgroups: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), FgroupsError> {
    let config = Config::load()?;
    logging::init_logger(
        config.log_level,
        config.log_file.as_deref(),
        config.console_timestamps,
    );
    logging::debug(Stage::System, None, &format!("configuration: {:?}", config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    engine::run(stdin.lock(), &mut output, &config)?;
    Ok(())
}
