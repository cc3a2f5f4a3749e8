mod cli;
mod commands;
mod term;

use std::process::ExitCode;

use clap::Parser;
use console::style;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;

use crate::cli::{Cli, Commands};
use crate::commands::CliCommand;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_log(cli.verbose) {
        eprintln!("logger disabled: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{} {}", style("error:").red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(async {
        match cli.command {
            Commands::Check(cmd) => cmd.exec().await,
            Commands::Open(cmd) => cmd.exec().await,
            Commands::Detect(cmd) => cmd.exec().await,
            Commands::Push(cmd) => cmd.exec().await,
            Commands::Config(cmd) => cmd.exec().await,
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_log(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();

    // messages and log lines already reach the terminal through the shell
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("uelaunch::ops::prompt", LevelFilter::Off))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}
