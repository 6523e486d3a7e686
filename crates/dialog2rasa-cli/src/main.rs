use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod convert;
mod output;

#[derive(Parser)]
#[command(
    name = "dialog2rasa",
    version,
    about = "Convert a Dialogflow agent export to Rasa YAML format",
    long_about = "Convert a Dialogflow agent export to Rasa YAML format. Output is written \
                  to the subfolder output/<language> inside the agent directory."
)]
struct Cli {
    #[command(flatten)]
    convert: convert::ConvertArgs,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format of the conversion report
    #[arg(long, default_value = "text")]
    format: output::OutputFormat,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    convert::run(&cli.convert, cli.format)
}
