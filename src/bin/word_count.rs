use line_aggregator::app::runner::{parse_cli, run_cli};
use line_aggregator::Utility;

fn main() {
    let cli = parse_cli(Utility::WordCount);
    std::process::exit(run_cli(Utility::WordCount, cli));
}
