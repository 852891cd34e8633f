//! Beetok network parameter inspector
//!
//! Selects a network the way a node does at startup and prints the resulting
//! profile, so operators can check magic bytes, ports, genesis and
//! checkpoints without starting a node.

use anyhow::{Context, Result};
use beetok_params::constants::{CHAIN_FULL_NAME, COIN};
use beetok_params::params::{select_params, NetworkId, NetworkProfile};
use beetok_params::p2p::SystemLookup;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "beetok-params", about = "Print Beetok network parameters")]
struct Cli {
    /// Network to select: main, test, regtest or unittest
    #[arg(short, long, env = "BEETOK_NETWORK", default_value = "main")]
    network: NetworkId,

    /// Print the profile as JSON
    #[arg(long)]
    json: bool,

    /// Also resolve DNS seeds through the system resolver
    #[arg(long)]
    resolve_dns: bool,
}

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = select_params(cli.network)
        .with_context(|| format!("failed to select network {}", cli.network))?;

    if cli.json {
        let summary = serde_json::to_string_pretty(&profile.summary())
            .context("failed to serialize profile summary")?;
        println!("{summary}");
    } else {
        print_profile(profile);
    }

    if cli.resolve_dns {
        let seeds = profile.resolve_dns_seeds(&SystemLookup);
        info!(count = seeds.len(), "Resolved DNS seeds");
        for seed in seeds {
            println!("  dns seed     {} (last seen {})", seed.addr, seed.last_seen);
        }
    }

    Ok(())
}

fn print_profile(profile: &NetworkProfile) {
    let genesis = profile.genesis_block();
    let switches = profile.switches();

    println!("{CHAIN_FULL_NAME} network parameters: {}", profile.network_name());
    println!();
    println!("  Message start:  {}", hex::encode(profile.message_start()));
    println!("  Default port:   {}", profile.default_port());
    println!("  Genesis hash:   {}", profile.genesis_hash());
    println!("  Merkle root:    {}", genesis.header.merkle_root);
    println!("  Genesis time:   {}", genesis.header.timestamp);
    println!("  PoW limit:      {}", profile.pow_limit());
    println!("  Last PoW block: {}", profile.last_pow_block());
    println!("  Maturity:       {}", profile.maturity());
    println!("  Max money out:  {} BTK", profile.max_money_out() / COIN);
    println!("  Bech32 HRP:     {}", profile.bech32_hrp());
    println!();
    println!(
        "  Upgrade majorities: enforce {} / reject {} / window {}",
        switches.enforce_block_upgrade_majority,
        switches.reject_block_outdated_majority,
        switches.to_check_block_upgrade_majority,
    );
    println!(
        "  Mine on demand: {}  Require standard: {}  Min difficulty: {}",
        profile.mine_blocks_on_demand(),
        profile.require_standard(),
        switches.allow_min_difficulty_blocks,
    );
    println!();
    println!("  Checkpoints:");
    for (height, hash) in profile.checkpoints().iter() {
        println!("    {height:>8}  {hash}");
    }
    println!("  Seeds:");
    for seed in profile.seeds() {
        println!("    fixed {} (last seen {})", seed.addr, seed.last_seen);
    }
    for seed in profile.dns_seeds() {
        println!("    dns   {}", seed.host);
    }
}
