use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌寫到 stderr，stdout 保留給結果輸出
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let default_directive = if verbose {
        "line_aggregator=debug".to_string()
    } else {
        match level {
            Some(level) => format!("line_aggregator={}", level),
            None => "line_aggregator=warn".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
