use std::{net::SocketAddr, sync::Arc};

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    model::{EmailStore, PgEmailStore},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}

impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Builds the store handle and binds the listener. The store connects
    /// lazily, so this succeeds with the database down; only the bind can
    /// fail here.
    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let email_store = Arc::new(PgEmailStore::from_config(config));
        let app_state = AppState::new(email_store);

        let addr = SocketAddr::from((config.net_config.host, config.net_config.port));
        let listener = TcpListener::bind(addr).await?;
        info!("{:<20} - {}", "Listening on:", listener.local_addr()?);

        Ok(App::new(app_state, listener))
    }
}

pub struct InternalState {
    pub email_store: Arc<dyn EmailStore>,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(email_store: Arc<dyn EmailStore>) -> Self {
        AppState(Arc::new(InternalState { email_store }))
    }
}
