use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taxchat::cli::Commands;
use taxchat::connector::api::controller::AskController;
use taxchat::connector::api::{configured_bind_address, serve};
use taxchat::connector::tui;
use taxchat::{build_router, AppState, Container, ContainerConfig};

#[derive(Parser)]
#[command(name = "taxchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer from a built-in mock instead of the completion API
    #[arg(long, global = true)]
    mock_completions: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    match cli.command {
        Commands::Serve { bind } => {
            let container = Container::new(ContainerConfig::from_env(cli.mock_completions));
            let relay = container.relay_use_case();
            info!(
                model = relay.settings().model(),
                configured = relay.is_configured(),
                mock = container.mock_completions(),
                "Starting relay"
            );

            let bind = bind.unwrap_or_else(configured_bind_address);
            let addr: SocketAddr = bind
                .parse()
                .with_context(|| format!("invalid bind address '{bind}'"))?;

            let app = build_router(Arc::new(AppState::new(relay)));
            serve(addr, app).await?;
        }

        Commands::Chat { relay_url } => {
            let container = Container::new(
                ContainerConfig::from_env(cli.mock_completions).with_relay_url(relay_url),
            );
            tui::run(Arc::new(container.send_message_use_case())).await?;
        }

        Commands::Ask {
            question,
            relay_url,
        } => {
            let container = Container::new(
                ContainerConfig::from_env(cli.mock_completions).with_relay_url(relay_url),
            );
            let output = AskController::new(&container).ask(question).await?;
            println!("{output}");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins when set. Otherwise `info` (or `debug` with `--verbose`),
/// except for the terminal UI, which stays silent so logs don't tear the screen.
fn init_tracing(cli: &Cli) {
    let default_filter = match (&cli.command, cli.verbose) {
        (Commands::Chat { .. }, _) => "off",
        (_, true) => "debug",
        (_, false) => "info",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
