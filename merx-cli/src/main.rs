//! merx — one-way commerce master-data replication.
//!
//! # Usage
//!
//! ```text
//! merx -s products
//! merx --sync all
//! ```
//!
//! Project credentials come from the environment (or a `.env` file):
//! `MERX_SOURCE_API_URL`, `MERX_SOURCE_PROJECT_KEY`, `MERX_SOURCE_API_TOKEN`
//! and the `MERX_TARGET_*` counterparts.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use merx_client::{ClientConfig, CommerceClient, HttpCommerceClient, SystemClock};
use merx_sync::{ClientSupplier, SyncerFactory};

#[derive(Parser, Debug)]
#[command(
    name = "merx",
    version,
    about = "Replicate master data from a source commerce project to a target project",
    long_about = None,
)]
struct Cli {
    /// Sync module to run: "types", "productTypes", "categories",
    /// "products", "inventoryEntries" or "all".
    #[arg(short = 's', long = "sync", value_name = "MODULE")]
    sync: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

/// Supplier handing the engine a fresh handle per run. Building the client
/// is connectionless; the engine only invokes this after selector validation.
fn supplier(client: Arc<HttpCommerceClient>) -> ClientSupplier {
    Box::new(move || {
        let handle: Arc<dyn CommerceClient> = client.clone();
        handle
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();
    let cli = Cli::parse();

    let source_config =
        ClientConfig::from_env("MERX_SOURCE").context("source project configuration")?;
    let target_config =
        ClientConfig::from_env("MERX_TARGET").context("target project configuration")?;

    let source = Arc::new(
        HttpCommerceClient::from_config(source_config).context("building source client")?,
    );
    let target = Arc::new(
        HttpCommerceClient::from_config(target_config).context("building target client")?,
    );

    let factory = SyncerFactory::new(supplier(source), supplier(target), Arc::new(SystemClock));
    factory.sync(cli.sync.as_deref()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_and_long_sync_flags_parse() {
        let cli = Cli::parse_from(["merx", "-s", "products"]);
        assert_eq!(cli.sync.as_deref(), Some("products"));

        let cli = Cli::parse_from(["merx", "--sync", "all"]);
        assert_eq!(cli.sync.as_deref(), Some("all"));
    }

    #[test]
    fn sync_flag_is_optional_and_validated_downstream() {
        let cli = Cli::parse_from(["merx"]);
        assert_eq!(cli.sync, None);
    }
}
