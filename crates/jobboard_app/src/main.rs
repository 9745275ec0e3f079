mod app;
mod cli;
mod commands;
mod console;
mod effects;
mod logging;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = cli::CliArgs::parse();
    logging::initialize(args.log);
    app::run_app(args)
}
