//! docsift CLI - build DocSearch records for a documentation site
//!
//! # Examples
//!
//! ```bash
//! # Build records and replace the local index
//! docsift build
//!
//! # Write the records to a JSON file instead
//! docsift build --sink json
//!
//! # See what a single page produces
//! docsift preview content/docs/en/get-started.md
//!
//! # Query the local index
//! docsift search "install"
//! ```

use clap::Parser;
use docsift::cli::output::print_error;
use docsift::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "docsift=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    // stderr keeps --format json output on stdout parseable
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
