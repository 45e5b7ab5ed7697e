//! Back Office CLI - shipping orders, chat and menu tools.
//!
//! # Usage
//!
//! ```bash
//! # Dashboard metrics for all shipping orders
//! bo-cli orders summary
//!
//! # Second page of orders, as JSON
//! bo-cli orders list --page 2 --json
//!
//! # Ask the chat assistant
//! bo-cli chat send "Which orders are still pending?"
//!
//! # Show the menu a role can see
//! bo-cli menu --role shipping
//! ```
//!
//! # Commands
//!
//! - `orders summary` / `orders list` - Shipping-orders dashboard
//! - `chat send` / `chat reset` - Chat assistant
//! - `menu` - Role-gated navigation
//! - `chart` - Demo purchase metrics series
//!
//! # Logging
//!
//! `RUST_LOG` controls verbosity. `LOG_FORMAT=json` switches to JSON lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use backoffice_core::UserRole;

mod commands;

#[derive(Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Back-office CLI tools")]
struct Cli {
    /// Print results as JSON instead of log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shipping orders dashboard
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Chat assistant
    Chat {
        #[command(subcommand)]
        action: ChatAction,
    },
    /// Show the navigation menu visible to a role
    Menu {
        /// Role (`admin`, `user`, `sales`, `purchasing`, `accounting`, `shipping`)
        #[arg(short, long)]
        role: UserRole,
    },
    /// Show the demo purchase metrics chart data
    Chart,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Print metrics for all orders
    Summary,
    /// Print one page of orders
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: NonZeroUsize,
    },
}

#[derive(Subcommand)]
enum ChatAction {
    /// Send a message and print the reply
    Send {
        /// Message text
        message: String,
    },
    /// Clear the conversation on the server
    Reset,
}

/// Initialize tracing. Defaults to info for our crates if `RUST_LOG` is not set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "backoffice_cli=info,backoffice_admin=info".into());

    let use_json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = use_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!use_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::Orders { action } => {
            let state = commands::load_state()?;
            match action {
                OrdersAction::Summary => commands::orders::summary(&state, output).await?,
                OrdersAction::List { page } => {
                    commands::orders::list(&state, page, output).await?;
                }
            }
        }
        Commands::Chat { action } => {
            let state = commands::load_state()?;
            match action {
                ChatAction::Send { message } => {
                    commands::chat::send(&state, &message, output).await?;
                }
                ChatAction::Reset => commands::chat::reset(&state).await?,
            }
        }
        Commands::Menu { role } => commands::menu::show(role, output)?,
        Commands::Chart => commands::chart::show(output)?,
    }
    Ok(())
}
