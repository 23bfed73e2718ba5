use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber. `RUST_LOG` wins over the `-v` count.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Keeps an already installed global subscriber, e.g. one set by a test harness.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "aws_prof=warn",
        1 => "aws_prof=info",
        2 => "aws_prof=debug",
        _ => "aws_prof=trace",
    }
}
