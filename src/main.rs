use std::process::ExitCode;

use arqa_analytics::{
    app::{self, Outcome},
    cli::Args,
    config::Config,
    logging,
};
use clap::Parser;

fn run(args: Args) -> anyhow::Result<Outcome> {
    let config = Config::resolve(args)?;
    Ok(app::run(&config)?)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(Outcome::Written) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
