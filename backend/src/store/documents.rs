use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use common::model::{Document, DocumentRef};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("instance not found: {0}")]
    NotFound(String),
    #[error("document data must be a JSON object")]
    NotAnObject,
}

/// Handle to one collection of the SQLite document database.
///
/// Each operation opens its own connection, so the handle is cheap to clone
/// into blocking tasks.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    collection: String,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>, collection: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the table if needed.
    pub fn init(&self) -> Result<(), StoreError> {
        self.connect()?.execute(
            "CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                ts INTEGER NOT NULL,
                data TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )",
            [],
        )?;
        Ok(())
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self.connect()?.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![&self.collection],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Every document of the collection, in insertion order.
    pub fn all(&self) -> Result<Vec<Document<Value>>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, ts, data FROM documents WHERE collection = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map(params![&self.collection], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, ts, data)| to_document(id, ts, &data))
            .collect()
    }

    pub fn get(&self, id: &str) -> Result<Document<Value>, StoreError> {
        let conn = self.connect()?;
        let row = conn
            .query_row(
                "SELECT ts, data FROM documents WHERE collection = ?1 AND id = ?2",
                params![&self.collection, id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()?;

        match row {
            Some((ts, data)) => to_document(id.to_string(), ts, &data),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Merges the top-level keys of `changes` into the stored data.
    pub fn update(&self, id: &str, changes: Map<String, Value>) -> Result<Document<Value>, StoreError> {
        let current = self.get(id)?;
        let mut data = match current.data {
            Value::Object(data) => data,
            _ => return Err(StoreError::NotAnObject),
        };
        data.extend(changes);

        let ts = now_micros();
        let text = serde_json::to_string(&data)?;
        self.connect()?.execute(
            "UPDATE documents SET ts = ?1, data = ?2 WHERE collection = ?3 AND id = ?4",
            params![ts, text, &self.collection, id],
        )?;

        Ok(document(id.to_string(), ts, Value::Object(data)))
    }

    pub fn create(&self, data: Value) -> Result<Document<Value>, StoreError> {
        if !data.is_object() {
            return Err(StoreError::NotAnObject);
        }

        let id = Uuid::new_v4().to_string();
        let ts = now_micros();
        self.connect()?.execute(
            "INSERT INTO documents (collection, id, ts, data) VALUES (?1, ?2, ?3, ?4)",
            params![&self.collection, &id, ts, serde_json::to_string(&data)?],
        )?;

        Ok(document(id, ts, data))
    }
}

fn to_document(id: String, ts: i64, data: &str) -> Result<Document<Value>, StoreError> {
    Ok(document(id, ts, serde_json::from_str(data)?))
}

fn document(id: String, ts: i64, data: Value) -> Document<Value> {
    Document {
        reference: DocumentRef::new(id),
        ts: Some(ts),
        data,
    }
}

fn now_micros() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_micros()).unwrap_or(i64::MAX))
        .unwrap_or_default()
}
