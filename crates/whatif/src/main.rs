use clap::Parser;

mod chart;
mod commands;
mod format;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "whatif")]
#[command(about = "Explore \"what if\" investment scenarios from the terminal")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init(&args.log_level)?;

    args.command.run()
}
