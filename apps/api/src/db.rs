//! Document Store Adapter — a thin, collection-addressed JSON store over
//! PostgreSQL.
//!
//! Records live in a single `documents` table keyed by collection name, one
//! JSONB value per row. The adapter exposes exactly "create one" and
//! "list all" per collection. It performs no retries, no transactions and no
//! schema enforcement; callers decide what a failed call means.

use serde::Serialize;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Collection names used against the store. These are wire-level constants:
/// operators seed real content under exactly these names.
pub mod collections {
    pub const SERVICE: &str = "service";
    pub const STYLIST: &str = "stylist";
    pub const REVIEW: &str = "review";
    pub const PROMOTION: &str = "promotion";
    pub const FAQ: &str = "faq";
    pub const GALLERY_ITEM: &str = "galleryitem";
    pub const APPOINTMENT: &str = "appointment";
    pub const CONTACT_MESSAGE: &str = "contactmessage";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store is not available")]
    Unavailable,

    #[error("{0}")]
    Query(#[from] sqlx::Error),
}

/// One record as returned by the store: an opaque identifier plus the raw
/// JSON document.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    pub id: Uuid,
    pub data: Value,
}

#[derive(Clone)]
pub struct DocumentStore {
    pool: Option<PgPool>,
    database_name: Option<String>,
}

impl DocumentStore {
    /// Builds the store from an optional connection URL. The pool is lazy:
    /// an unreachable database surfaces per call, not here. A missing or
    /// unparseable URL leaves the store unavailable instead of failing
    /// startup.
    pub fn from_url(database_url: Option<&str>) -> Self {
        let Some(url) = database_url else {
            warn!("DATABASE_URL not set; document store unavailable, serving placeholder content");
            return DocumentStore {
                pool: None,
                database_name: None,
            };
        };

        match PgPoolOptions::new().max_connections(10).connect_lazy(url) {
            Ok(pool) => {
                info!("PostgreSQL connection pool initialized (lazy)");
                DocumentStore {
                    pool: Some(pool),
                    database_name: database_name_from_url(url),
                }
            }
            Err(err) => {
                warn!("DATABASE_URL rejected ({err}); document store unavailable");
                DocumentStore {
                    pool: None,
                    database_name: None,
                }
            }
        }
    }

    #[cfg(test)]
    pub fn unavailable() -> Self {
        DocumentStore {
            pool: None,
            database_name: None,
        }
    }

    /// Best-effort DDL for the `documents` table. Failure is logged and
    /// ignored; the store then simply keeps failing per call and the read
    /// path degrades to placeholders.
    pub async fn ensure_schema(&self) {
        let Some(pool) = &self.pool else { return };

        let ddl = r#"
            CREATE TABLE IF NOT EXISTS documents (
                id UUID PRIMARY KEY,
                collection TEXT NOT NULL,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
        "#;
        if let Err(err) = sqlx::query(ddl).execute(pool).await {
            warn!("could not ensure documents table ({err}); continuing without it");
            return;
        }

        let index = "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)";
        if let Err(err) = sqlx::query(index).execute(pool).await {
            warn!("could not ensure collection index ({err})");
        }
    }

    /// Inserts one record into the named collection and returns its id.
    pub async fn create_document(&self, collection: &str, record: Value) -> Result<Uuid, StoreError> {
        let pool = self.pool.as_ref().ok_or(StoreError::Unavailable)?;
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(sqlx::types::Json(record))
            .execute(pool)
            .await?;

        Ok(id)
    }

    /// Lists every record in the named collection, oldest first.
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
        let pool = self.pool.as_ref().ok_or(StoreError::Unavailable)?;

        let rows: Vec<(Uuid, sqlx::types::Json<Value>)> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = $1 ORDER BY created_at")
                .bind(collection)
                .fetch_all(pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, data)| StoredDocument { id, data: data.0 })
            .collect())
    }

    /// Distinct collection names currently present in the store. Used only
    /// by the diagnostics endpoint, never for control flow.
    pub async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let pool = self.pool.as_ref().ok_or(StoreError::Unavailable)?;

        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(pool)
                .await?;

        Ok(names)
    }

    /// Builds the operator-facing diagnostics report for `GET /test`.
    ///
    /// `url_configured` distinguishes "no URL at all" from "URL set but the
    /// pool could not be built". Error text is truncated to 80 characters.
    pub async fn diagnostics(&self, url_configured: bool) -> StoreDiagnostics {
        let mut report = StoreDiagnostics {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: vec![],
        };

        // database_url stays null until the store itself is usable; the
        // marker strings only describe a live adapter's configuration.
        if self.pool.is_none() {
            if url_configured {
                report.database = "⚠️ Available but not initialized".to_string();
            }
            return report;
        }

        report.database = "✅ Available".to_string();
        report.database_url = Some(if url_configured {
            "✅ Set".to_string()
        } else {
            "❌ Not Set".to_string()
        });
        report.database_name = self.database_name.clone();
        report.connection_status = "Connected".to_string();

        match self.list_collections().await {
            Ok(names) => {
                report.collections = names.into_iter().take(10).collect();
                report.database = "✅ Connected & Working".to_string();
            }
            Err(err) => {
                report.database = format!(
                    "⚠️ Connected but Error: {}",
                    truncate(&err.to_string(), 80)
                );
            }
        }

        report
    }
}

#[derive(Debug, Serialize)]
pub struct StoreDiagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Last path segment of the connection URL, with any query string removed.
fn database_name_from_url(url: &str) -> Option<String> {
    let tail = url.rsplit('/').next()?;
    let name = tail.split('?').next()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
