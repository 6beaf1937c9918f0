use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Result;
use async_trait::async_trait;
use maildrop::{
    model::{self, EmailRecord, EmailStore, InMemoryEmailStore},
    App, AppState,
};
use tokio::net::TcpListener;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<InMemoryEmailStore>,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Spawns the app on a random local port with a fresh in-memory store.
    pub async fn spawn() -> Result<Self> {
        let store = Arc::new(InMemoryEmailStore::default());
        let addr = spawn_with_store(store.clone()).await?;

        Ok(TestApp {
            addr,
            store,
            http_client: test_client()?,
        })
    }

    pub async fn post_add_email_form(&self, body: &str) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/add-email", self.addr))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_owned())
            .send()
            .await?;
        Ok(res)
    }

    pub async fn post_add_email_json(&self, body: &serde_json::Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/add-email", self.addr))
            .json(body)
            .send()
            .await?;
        Ok(res)
    }

    pub async fn get_emails(&self) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .get(format!("http://{}/emails", self.addr))
            .send()
            .await?;
        Ok(res)
    }
}

/// An app whose store refuses every operation, for the storage-failure paths.
pub async fn spawn_failing_app() -> Result<(SocketAddr, reqwest::Client)> {
    let addr = spawn_with_store(Arc::new(FailingEmailStore)).await?;
    Ok((addr, test_client()?))
}

async fn spawn_with_store(store: Arc<dyn EmailStore>) -> Result<SocketAddr> {
    let app_state = AppState::new(store);
    let listener = TcpListener::bind(TEST_SOCK_ADDR).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(maildrop::web::serve(App::new(app_state, listener)));

    Ok(addr)
}

/// Redirects stay visible to the tests, so the client must not follow them.
fn test_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

pub struct FailingEmailStore;

#[async_trait]
impl EmailStore for FailingEmailStore {
    async fn insert(&self, _email: &str) -> model::Result<EmailRecord> {
        Err(model::Error::Unavailable("store is down".into()))
    }

    async fn list_all(&self) -> model::Result<Vec<EmailRecord>> {
        Err(model::Error::Unavailable("store is down".into()))
    }
}
