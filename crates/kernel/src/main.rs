//! Academy Admin Kernel
//!
//! CLI tooling over the navigation compiler: print the compiled route
//! tree, or report configuration defects in a permission set.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use academy_kernel::config::Config;
use academy_kernel::nav::{RouteNode, check_permissions};
use academy_kernel::permission::load_permissions;
use academy_kernel::state::AppState;

#[derive(Parser)]
#[command(name = "academy", about = "Admin navigation kernel tooling")]
struct Cli {
    /// Permission document override (JSON).
    #[arg(long, global = true)]
    permissions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the route tree and print it.
    Routes {
        /// Emit the tree as JSON instead of indented text.
        #[arg(long)]
        json: bool,
    },
    /// Report configuration defects in the permission set.
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.permissions {
        config.permissions_file = Some(path);
    }

    let state = AppState::new(&config);

    let permissions = load_permissions(state.permission_source())
        .await
        .context("failed to load permission set")?;
    info!(entries = permissions.len(), "permission set loaded");

    match cli.command {
        Command::Routes { json } => {
            let routes = state.nav().routes_for(&permissions);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(routes.as_ref())
                        .context("failed to render route tree")?
                );
            } else {
                for node in routes.iter() {
                    print_node(node, 0);
                }
            }
        }
        Command::Check => {
            let defects = check_permissions(&permissions, state.views());
            if defects.is_empty() {
                println!("No configuration defects found.");
            } else {
                for defect in &defects {
                    println!("{defect}");
                }
                bail!("{} configuration defect(s) found", defects.len());
            }
        }
    }

    Ok(())
}

fn print_node(node: &RouteNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let path = if node.index { "(index)" } else { node.path.as_str() };
    let element = node.element.as_ref().map_or("-", |e| e.kind());
    let key = node.meta.as_ref().map_or("", |m| m.key.as_str());

    println!("{indent}{path:<24} {element:<10} {key}");

    for child in &node.children {
        print_node(child, depth + 1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
