//! Backend setup and initialization

use anyhow::Result;
use distributor_core::Config;
use distributor_services::ChunkDistributor;
use distributor_storage::create_backends;

/// Build one client per configured backend and wrap them in a distributor.
pub fn setup_distributor(config: &Config) -> Result<ChunkDistributor> {
    tracing::info!("Initializing backend clients...");
    let backends = create_backends(config)?;

    let distributor = ChunkDistributor::new(backends)?;
    tracing::info!(
        backend_kind = %config.backend_kind(),
        backend_count = distributor.backend_count(),
        "Backend clients initialized successfully"
    );

    Ok(distributor)
}
