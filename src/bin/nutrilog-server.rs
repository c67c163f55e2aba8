// ABOUTME: Server binary for the Nutrilog food logging API
// ABOUTME: Loads configuration, applies CLI overrides, initializes logging, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrilog Server Binary
//!
//! Configuration comes from the environment; the flags below override it.

use anyhow::Result;
use clap::Parser;
use nutrilog_server::{config::ServerConfig, logging, server};
use std::net::IpAddr;
use tracing::info;

#[derive(Parser)]
#[command(name = "nutrilog-server")]
#[command(about = "Nutrilog - free-text food logging API with nutrition totals")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Fixed seed for the weekly progress generator
    #[arg(long)]
    progress_seed: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(seed) = self.progress_seed {
            config.progress.seed = Some(seed);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);

    info!("Starting Nutrilog server");
    info!("{}", config.summary());

    server::run(config).await
}
