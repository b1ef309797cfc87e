//! # bootfig demo service
//!
//! A stand-in service showing how a binary bootstraps its configuration with
//! bootfig before starting anything else.
//!
//! ```sh
//! export SERVICE_NAME=orders AZ_ACCOUNT=ordersstore AZ_KEY=s3cret
//! cargo run --example service                 # bootstrap and "run"
//! cargo run --example service -- check        # validate and exit
//! cargo run --example service -- show         # redacted listing
//! cargo run --example service -- gen          # commented template
//! RUST_LOG=debug cargo run --example service  # see each substitution
//! ```
//!
//! Unset `AZ_KEY` and the service refuses to start with a non-zero exit.

mod config;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bootfig::{BootArgs, Bootfig};

use config::ServiceConfig;

/// bootfig demo: a service that refuses to start misconfigured.
#[derive(Parser, Debug)]
#[command(name = "bootfig-service")]
struct Cli {
    #[command(flatten)]
    boot: BootArgs,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: &ServiceConfig) {
    info!(
        name = %config.app.name,
        version = %config.app.version,
        env = %config.app.env,
        debug = config.app.debug,
        "service starting"
    );
    info!(
        address = %format!("{}:{}", config.server.host, config.server.port),
        health = %config.server.health_endpoint,
        info = %config.server.info_endpoint,
        "listener configured"
    );
    info!(
        account = %config.azure.az_storage_account_name,
        queues = ?config.azure.queues,
        "storage configured"
    );
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let builder = cli.boot.apply(Bootfig::builder::<ServiceConfig>());

    match cli.boot.into_action() {
        None => {
            let config = builder.bootstrap();
            run(&config);
        }
        Some(action) => {
            builder.handle_and_print(&action).unwrap_or_else(|e| {
                error!(kind = e.kind().as_str(), error = %e, "config command failed");
                eprintln!("Config error:\n{e}");
                std::process::exit(1);
            });
        }
    }
}
