//! Database Module
//!
//! Connects to SurrealDB through the `any` engine, so the connection string
//! from configuration picks the backend: `rocksdb://<path>` for an embedded
//! on-disk store, `mem://` for an in-memory store (tests), or a remote
//! `ws://` endpoint.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};

use crate::utils::AppError;

const NAMESPACE: &str = "roster";
const DATABASE: &str = "roster";

/// Schema bootstrap, run once per connection. The unique index is what makes
/// concurrent registrations of the same member number safe: even if two
/// requests pass the friendly pre-insert check, the second CREATE fails here.
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS member SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS member_number_unique ON TABLE member FIELDS member_number UNIQUE;
";

/// Database service - owns the shared SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the store named by `database_url` and bootstrap the schema
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        let db = any::connect(database_url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to store: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!("Database connection established ({})", database_url);

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MemberInsert;
    use crate::db::repository::MemberRepository;

    #[tokio::test]
    async fn rocksdb_store_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let url = format!("rocksdb://{}", tmp.path().join("roster.db").display());

        let service = DbService::new(&url).await.unwrap();
        let repo = MemberRepository::new(service.db.clone(), 42);

        let record = repo
            .insert(MemberInsert {
                member_number: 7,
                password: None,
                name: "Ana".into(),
                nickname: "aninha".into(),
                linkedin_url: String::new(),
                github_url: String::new(),
                instagram_handle: String::new(),
                photo: vec![0xFF, 0xD8, 0xFF],
            })
            .await
            .unwrap();

        let found = repo
            .find_by_id(&record.id.key().to_string())
            .await
            .unwrap()
            .expect("record should be readable back from disk");
        assert_eq!(found.name, "Ana");
        assert_eq!(found.photo, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let service = DbService::new("mem://").await.unwrap();
        // Re-running the definitions on a live connection must not fail
        service.db.query(SCHEMA).await.unwrap().check().unwrap();
    }
}
