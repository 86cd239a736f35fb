//! abet-params
//!
//! Prints the verified parameters of one Altbet network.
//!
//! Usage:
//!   abet-params [--network <name>] [--testnet | --regtest | --unittest] [--json]

use abet_params::config::NetworkSelection;
use abet_params::constants::COIN;
use abet_params::{select_params_from, NetworkProfile};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "abet-params", version, about = "Show Altbet network parameters")]
struct Args {
    /// Network name (main, test, regtest, unittest).
    #[arg(long)]
    network: Option<String>,

    /// Use the public test network.
    #[arg(long)]
    testnet: bool,

    /// Use the local regression test network.
    #[arg(long)]
    regtest: bool,

    /// Use the unit test network.
    #[arg(long)]
    unittest: bool,

    /// Print the full profile as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let selection = NetworkSelection {
        network: args.network,
        testnet: args.testnet,
        regtest: args.regtest,
        unittest: args.unittest,
    };

    let profile = select_params_from(&selection).context("selecting network")?;

    if args.json {
        let json = serde_json::to_string_pretty(&*profile).context("serializing profile")?;
        println!("{}", json);
    } else {
        print_summary(&profile);
    }
    Ok(())
}

fn print_summary(profile: &NetworkProfile) {
    let checkpoints = profile.checkpoints();
    let economics = profile.economics();

    println!("Network:       {}", profile.name());
    println!("Magic:         {}", hex::encode(profile.magic()));
    println!("Port:          {}", profile.default_port());
    println!("Genesis:       {}", profile.genesis_hash());
    println!("Merkle Root:   {}", profile.genesis().merkle_root);
    println!("PoW Limit:     {}", profile.pow_limit());
    println!("Last PoW:      {}", profile.consensus().last_pow_block);
    println!("Max Money:     {} ABET", economics.max_money_out / COIN);
    println!("Collateral:    {} ABET", economics.masternode_collateral);
    println!("Bech32 HRP:    {}", profile.bech32_hrp());
    println!(
        "Checkpoints:   {} (top {})",
        checkpoints.len(),
        checkpoints.highest_height()
    );
    println!("DNS Seeds:     {}", profile.dns_seeds().len());
    println!("Fixed Seeds:   {}", profile.fixed_seeds().len());
}
