#![allow(clippy::enum_variant_names)]

use clap::Parser as _;
use tracing::debug;

use crate::{
    application::{Application, ApplicationError},
    cli::Cli,
};

mod application;
mod cli;
mod commands;
mod config;
mod executor;
mod ext;
mod filesystem;
mod serializer;
mod tree;

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    if cli_args.has_too_many_inputs() {
        println!("{}", Cli::usage_message());
        std::process::exit(1);
    }

    setup_tracing(&cli_args);
    setup_colors();
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn setup_colors() {
    let supported = supports_color::on(supports_color::Stream::Stdout).is_some();
    colored::control::set_override(supported);
}
