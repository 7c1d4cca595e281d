//! chainselector CLI — convert between signatures and 4-byte selectors.
//!
//! # Commands
//! ```text
//! chainselector normalize "transfer(address to, uint256 amount)"
//! chainselector selector  "transfer(address to, uint256 amount)" [--json]
//! chainselector hex       0xA9059CBB
//! chainselector lookup    0xa9059cbb [--offline] [--base-url <url>] [--pages <n>] [--json]
//! chainselector serve     [--bind <addr>] [--config <file.json>] [--offline] [--cors]
//! chainselector examples
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use chainselector_core::{
    decode_signature, normalize_hex_selector, normalize_signature, Selector, EXAMPLE_SIGNATURES,
};
use chainselector_lookup::{FourByteClient, LookupConfig, MemorySignatureLookup, SignatureLookup};
use chainselector_server::routes::INVALID_HEX;
use chainselector_server::{init_tracing, LogConfig, ServerConfig};

#[derive(Parser)]
#[command(
    name = "chainselector",
    about = "EVM function/error signature ↔ 4-byte selector converter",
    long_about = "
chainselector: compute 4-byte selectors from Solidity function and error
signatures, and look selectors back up on 4byte.directory.

ENVIRONMENT VARIABLES (serve):
  CHAINSELECTOR_BIND              Listen address
  CHAINSELECTOR_FOURBYTE_URL      4byte.directory base URL
  CHAINSELECTOR_REVALIDATE_SECS   Freshness window for cached lookups
  CHAINSELECTOR_LOG               Log level (trace|debug|info|warn|error)
  CHAINSELECTOR_LOG_JSON          Emit JSON logs (true|false)
",
    version
)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical form of a signature
    Normalize {
        /// Signature, e.g. "transfer(address to, uint256 amount)"
        signature: String,
    },

    /// Compute the 4-byte selector of a signature
    Selector {
        signature: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate and normalize selector hex
    Hex {
        /// Selector, with or without 0x, any case
        hex: String,
    },

    /// Look up known signatures for a selector
    Lookup {
        hex: String,
        /// Answer from the bundled example signatures instead of 4byte.directory
        #[arg(long)]
        offline: bool,
        /// 4byte.directory base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Maximum result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Listen address (overrides config and environment)
        #[arg(long)]
        bind: Option<String>,
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Answer lookups from the bundled example signatures
        #[arg(long)]
        offline: bool,
        /// Allow cross-origin requests
        #[arg(long)]
        cors: bool,
    },

    /// List the example signatures with their selectors
    Examples,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { signature } => {
            println!("{}", normalize_signature(&signature));
            Ok(())
        }

        Commands::Selector { signature, json } => cmd_selector(&signature, json),

        Commands::Hex { hex } => {
            println!("{}", cmd_hex(&hex)?);
            Ok(())
        }

        Commands::Lookup { hex, offline, base_url, pages, json } => {
            init_tracing(&cli_log_config(cli.verbose));
            cmd_lookup(&hex, offline, base_url, pages, json).await
        }

        Commands::Serve { bind, config, offline, cors } => {
            cmd_serve(bind, config, offline, cors, cli.verbose).await
        }

        Commands::Examples => {
            cmd_examples();
            Ok(())
        }
    }
}

// ─── Command implementations ─────────────────────────────────────────────────

fn cli_log_config(verbose: bool) -> LogConfig {
    LogConfig {
        level: if verbose { "debug" } else { "warn" }.into(),
        ..LogConfig::default()
    }
}

fn cmd_selector(signature: &str, as_json: bool) -> Result<()> {
    let decoded = decode_signature(signature).ok_or_else(|| anyhow!("signature is empty"))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        println!("Signature: {}", decoded.canonical);
        println!("Selector:  {}", decoded.selector);
    }
    Ok(())
}

fn cmd_hex(hex: &str) -> Result<String> {
    normalize_hex_selector(hex).ok_or_else(|| anyhow!(INVALID_HEX))
}

async fn cmd_lookup(
    hex: &str,
    offline: bool,
    base_url: Option<String>,
    pages: usize,
    as_json: bool,
) -> Result<()> {
    let selector = Selector::from_hex(hex).ok_or_else(|| anyhow!(INVALID_HEX))?;

    let lookup: Arc<dyn SignatureLookup> = if offline {
        Arc::new(MemorySignatureLookup::with_examples())
    } else {
        let mut config = LookupConfig {
            max_pages: pages,
            ..LookupConfig::default()
        };
        if let Some(url) = base_url {
            config = config.with_base_url(url);
        }
        Arc::new(FourByteClient::new(config).context("failed to build HTTP client")?)
    };

    let signatures = lookup
        .lookup(selector)
        .await
        .with_context(|| format!("lookup of {selector} via {} failed", lookup.name()))?;

    if as_json {
        let out = serde_json::json!({ "hex": selector.to_hex(), "signatures": signatures });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if signatures.is_empty() {
        println!("No known signatures for this selector.");
    } else {
        for sig in &signatures {
            println!("{sig}");
        }
    }
    Ok(())
}

async fn cmd_serve(
    bind: Option<String>,
    config_path: Option<PathBuf>,
    offline: bool,
    cors: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::default(),
    }
    .apply_env()?;

    if let Some(bind) = bind {
        config.bind = bind;
    }
    if verbose {
        config.log.level = "debug".into();
    }
    config.offline |= offline;
    config.cors |= cors;
    if config.lookup.base_url.trim().is_empty() {
        bail!("lookup.base_url must not be empty");
    }

    init_tracing(&config.log);
    tracing::debug!(?config, "starting server");
    chainselector_server::serve(config).await?;
    Ok(())
}

fn cmd_examples() {
    for sig in EXAMPLE_SIGNATURES {
        if let Some(decoded) = decode_signature(sig) {
            println!("{}  {:<40} → {}", decoded.selector, decoded.input, decoded.canonical);
        }
    }
}
