use tracing::{error, info};

use crate::actor_framework::{DocumentStoreActor, StoreClient};
use crate::app_system::Config;
use crate::clients::{MenuClient, OrderClient};
use crate::error::StoreError;
use crate::persistence::{SnapshotFile, StoreBackend};

/// The application system: the document store actor plus the clients wired
/// to it.
///
/// Responsible for starting the actor and for draining it on shutdown.
pub struct PizzaSystem {
    pub store_client: StoreClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl PizzaSystem {
    /// Starts the store selected by `config`, loading its snapshot if any.
    pub async fn start(config: &Config) -> Result<Self, StoreError> {
        info!(backend = ?config.backend, database = config.database_name(), "Starting pizza system");

        let (actor, store_client) = match &config.backend {
            StoreBackend::Memory => DocumentStoreActor::in_memory(config.store_buffer, config.database_name()),
            StoreBackend::File(path) => {
                let snapshot = SnapshotFile::new(path);
                let initial = snapshot.load().await?;
                DocumentStoreActor::new(config.store_buffer, config.database_name(), initial, Some(snapshot))
            }
        };

        Ok(Self::wire(actor, store_client))
    }

    /// Memory-only system, used by tests and local runs.
    pub fn in_memory() -> Self {
        let config = Config::default();
        let (actor, store_client) = DocumentStoreActor::in_memory(config.store_buffer, config.database_name());
        Self::wire(actor, store_client)
    }

    fn wire(actor: DocumentStoreActor, store_client: StoreClient) -> Self {
        let handle = tokio::spawn(actor.run());
        let menu_client = MenuClient::new(store_client.clone());
        let order_client = OrderClient::new(store_client.clone(), menu_client.clone());

        Self {
            store_client,
            menu_client,
            order_client,
            handle,
        }
    }

    /// Drops this system's clients and waits for the store to drain. Clones
    /// handed out elsewhere must be dropped first or this never returns.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.menu_client);
        drop(self.store_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
