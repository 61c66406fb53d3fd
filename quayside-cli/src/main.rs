use std::fs;
use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use quayside_cli::args::Cli;
use quayside_cli::args::Commands;
use quayside_cli::browse::Session;
use quayside_cli::config::CliConfig;
use quayside_cli::error::CliError;
use quayside_cli::paths;
use simplelog::ColorChoice;
use simplelog::CombinedLogger;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::SharedLogger;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if let Some(cache) = paths::cache_dir() {
        fs::create_dir_all(&cache)?;
        paths::rotate_logs(&cache);
        let file = File::create(paths::log_file(&cache))?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Show(args) => {
            println!("{}", quayside_cli::show(&args, &config)?);
        }
        Commands::Browse(args) => {
            let mut session = Session::open(&args, &config)?;
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
