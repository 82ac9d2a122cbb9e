use clap::{Parser, Subcommand};
use line_aggregator::app::runner::{exit_on_usage_error, run_cli};
use line_aggregator::{CliConfig, Utility};

#[derive(Parser)]
#[command(name = "line-aggregator")]
#[command(about = "Aggregate line-delimited records: statistics, base conversion, word counts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mean, median, mode, variance and standard deviation of a number file
    Statistics(CliConfig),
    /// Binary and hexadecimal form of every integer in a file
    Convert(CliConfig),
    /// Occurrences of each distinct whitespace-separated word
    WordCount(CliConfig),
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        exit_on_usage_error(
            e,
            "Usage: line-aggregator <statistics|convert|word-count> fileWithData.txt",
        )
    });

    let (utility, config) = match cli.command {
        Command::Statistics(config) => (Utility::Statistics, config),
        Command::Convert(config) => (Utility::Conversion, config),
        Command::WordCount(config) => (Utility::WordCount, config),
    };

    std::process::exit(run_cli(utility, config));
}
