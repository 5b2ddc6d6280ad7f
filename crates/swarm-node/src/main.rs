//! # Swarm Node
//!
//! Hosts one agent of the validation swarm.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging from the environment
//! 2. Load configuration (`SWARM_CONFIG` file, then `SWARM_*` overrides)
//! 3. Load or generate the identity keypair
//! 4. Start the staleness eviction task
//! 5. Run until Ctrl+C, then shut down gracefully

use std::sync::Arc;

use anyhow::{Context, Result};
use swarm_discovery::SystemTimeSource;
use swarm_node::{init_tracing, NodeConfig, SwarmNode, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    init_tracing(&telemetry).context("failed to initialize logging")?;
    info!(
        service = %telemetry.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting swarm node"
    );

    let config = NodeConfig::from_env().context("failed to load configuration")?;
    let node = SwarmNode::new(config, Arc::new(SystemTimeSource))
        .context("failed to create swarm node")?;
    node.start().context("failed to start swarm node")?;

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;

    node.shutdown().await;
    Ok(())
}
