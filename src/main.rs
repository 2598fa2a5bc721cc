use clap::ArgMatches;
use std::process;
use log::debug;

use imatrix::commands::{build_cli, Command, ConvertCommand};
use imatrix::config::Config;
use imatrix::matrix::MatrixResult;
use imatrix::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    Logger::init_console_logger(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        debug!("Conversion failed: {:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> MatrixResult<()> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let command = ConvertCommand::new(matches, &config)?;
    command.execute()
}
