//! zbxvault command line tool.
//!
//! Two jobs, sharing one authenticated API session:
//! - `backup`: snapshot entity configuration (hosts, maps, templates) to disk
//! - `inventory`: reconcile host inventory fields against a CSV table
//!
//! Usage:
//!   zbxvault --url https://zabbix.example.com/api_jsonrpc.php backup
//!   zbxvault inventory --table inventory.csv
//!
//! Credentials come from flags or the ZBXVAULT_* environment variables.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use zbxvault_api::{ApiConfig, ZabbixClient};
use zbxvault_inventory::{InventoryReconciler, ReferenceTable};
use zbxvault_sync::{SyncConfig, SyncEngine};
use zbxvault_types::EntityKind;

#[derive(Parser, Debug)]
#[command(name = "zbxvault")]
#[command(about = "Zabbix configuration snapshot and inventory tool")]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "ZBXVAULT_URL")]
    url: String,

    /// API user name
    #[arg(long, env = "ZBXVAULT_USER")]
    user: String,

    /// API password
    #[arg(long, env = "ZBXVAULT_PASSWORD", hide_env_values = true)]
    password: String,

    /// Skip TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Snapshot entity configuration to disk
    Backup {
        /// Entity kind to back up
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,

        /// Base directory holding the per-kind snapshot roots
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Exit non-zero if any entity failed
        #[arg(long)]
        strict: bool,
    },
    /// Reconcile host inventory against a CSV reference table
    Inventory {
        /// Path to the headerless reference CSV
        #[arg(long)]
        table: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Host,
    Map,
    Template,
    All,
}

impl KindArg {
    fn kinds(self) -> Vec<EntityKind> {
        match self {
            KindArg::Host => vec![EntityKind::Host],
            KindArg::Map => vec![EntityKind::Map],
            KindArg::Template => vec![EntityKind::Template],
            KindArg::All => EntityKind::ALL.to_vec(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = ApiConfig {
        url: cli.url,
        username: cli.user,
        password: cli.password,
        verify_tls: !cli.insecure,
        ..ApiConfig::default()
    };
    let client = ZabbixClient::new(config)?;

    // Invalid credentials terminate here, before any listing or write.
    let session = client.login().await.context("authentication failed")?;

    match cli.command {
        Command::Backup { kind, root, strict } => {
            let mut any_failed = false;
            for kind in kind.kinds() {
                let config = SyncConfig {
                    root: root.join(kind.profile().snapshot_root),
                };
                let engine = SyncEngine::new(client.clone(), config);
                let report = engine.run(kind, &session).await?;
                any_failed |= report.has_failures();
            }
            if strict && any_failed {
                std::process::exit(1);
            }
        }
        Command::Inventory { table } => {
            let table = ReferenceTable::load(&table)
                .with_context(|| format!("failed to load reference table {}", table.display()))?;
            info!(rows = table.len(), "loaded reference table");
            let reconciler = InventoryReconciler::new(client, table);
            reconciler.run(&session).await?;
        }
    }

    Ok(())
}
