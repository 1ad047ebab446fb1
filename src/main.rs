use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod clipboard;
mod exits;
mod terminal;
mod tui;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "passgauge=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let args = cli::Args::parse();
    if let Err(e) = cli::run(args) {
        tracing::debug!(error = ?e, "run failed");
        cli::prompts::error(&e.to_string());
        std::process::exit(1);
    }
}
