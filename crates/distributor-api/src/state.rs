use distributor_core::Config;
use distributor_services::ChunkDistributor;

/// Shared state handed to every handler
pub struct AppState {
    pub distributor: ChunkDistributor,
    pub config: Config,
}

impl AppState {
    pub fn new(distributor: ChunkDistributor, config: Config) -> Self {
        Self {
            distributor,
            config,
        }
    }
}
