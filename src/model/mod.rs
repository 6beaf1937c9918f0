//! The email store: one table of `{ id, email }` records.
//!
//! `EmailStore` is the seam between the web layer and persistence. Route
//! handlers only ever see an `Arc<dyn EmailStore>` injected through the
//! application state, so tests can swap the Postgres implementation for an
//! in-memory one.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AppConfig;

// ###################################
// ->   STRUCTS
// ###################################

/// A stored email address and the identifier assigned on insertion.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct EmailRecord {
    pub id: Uuid,
    pub email: String,
}

/// Durable storage of `EmailRecord`s.
///
/// Any string counts as an email, the empty string included; records are
/// never updated or deleted. `list_all` yields records in whatever order the
/// backing store keeps them.
#[async_trait]
pub trait EmailStore: Send + Sync + 'static {
    async fn insert(&self, email: &str) -> Result<EmailRecord>;
    async fn list_all(&self) -> Result<Vec<EmailRecord>>;
}

/// Postgres-backed store.
#[derive(Clone, Debug)]
pub struct PgEmailStore {
    db: PgPool,
}

impl PgEmailStore {
    /// The pool is lazy: no connection is attempted here, so the server can
    /// accept traffic before the database is up. A request that hits the
    /// store while it is unreachable gets `Error::Sqlx` from the failed
    /// acquire instead.
    pub fn from_config(config: &AppConfig) -> Self {
        let db = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy_with(config.db_config.connection_options());

        Self { db }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }
}

#[async_trait]
impl EmailStore for PgEmailStore {
    async fn insert(&self, email: &str) -> Result<EmailRecord> {
        let record = EmailRecord {
            id: Uuid::new_v4(),
            email: email.to_owned(),
        };

        sqlx::query("INSERT INTO emails (id, email) VALUES ($1, $2)")
            .bind(record.id)
            .bind(&record.email)
            .execute(&self.db)
            .await?;

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<EmailRecord>> {
        let records = sqlx::query_as::<_, EmailRecord>("SELECT id, email FROM emails")
            .fetch_all(&self.db)
            .await?;

        Ok(records)
    }
}

/// In-memory store backed by a `Vec`, insertion-ordered. Lets the
/// integration tests drive the full HTTP surface without a running Postgres.
#[derive(Debug, Default)]
pub struct InMemoryEmailStore {
    records: RwLock<Vec<EmailRecord>>,
}

#[async_trait]
impl EmailStore for InMemoryEmailStore {
    async fn insert(&self, email: &str) -> Result<EmailRecord> {
        let record = EmailRecord {
            id: Uuid::new_v4(),
            email: email.to_owned(),
        };
        self.records.write().await.push(record.clone());

        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<EmailRecord>> {
        Ok(self.records.read().await.clone())
    }
}

// ###################################
// ->   ERROR
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

/// The single storage error kind: whether the database was never reached or
/// a query failed mid-flight, callers see the same error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
