use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use fundraiser_app::{Config, Session, Shell, USAGE};
use fundraiser_sales::load_group;

fn main() -> ExitCode {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    fundraiser_observability::init(config.log_format());

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    let group = load_group(&config.item_file, &config.member_file)?;
    let mut shell = Shell::new(Session::new(group), config.renderer(), config.prompt());

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
