use farmhand::persistence::Snapshot;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Farm snapshots kept as JSON documents in SQLite.
pub struct Storage {
    connection: Connection,
}

#[derive(Debug)]
pub enum StorageError {
    Database(rusqlite::Error),
    Serialization(serde_json::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Database(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl Storage {
    pub fn open(path: &str) -> Result<Self, StorageError> {
        info!("Open farm storage {}", path);
        let connection = Connection::open(path)?;
        Self::setup(connection)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::setup(Connection::open_in_memory()?)
    }

    fn setup(connection: Connection) -> Result<Self, StorageError> {
        connection.execute(
            "create table if not exists saves (
                id integer primary key,
                created real not null,
                data text not null
            )",
            [],
        )?;
        Ok(Self { connection })
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<i64, StorageError> {
        let data = serde_json::to_value(snapshot)?;
        let created = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs_f64())
            .unwrap_or(0.0);
        self.connection.execute(
            "insert into saves (created, data) values (?1, ?2)",
            params![created, data],
        )?;
        Ok(self.connection.last_insert_rowid())
    }

    pub fn load_latest(&self) -> Result<Option<Snapshot>, StorageError> {
        let data: Option<Value> = self
            .connection
            .query_row(
                "select data from saves order by id desc limit 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        match data {
            Some(data) => Ok(Some(Snapshot::from_value(data))),
            None => Ok(None),
        }
    }

    pub fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .connection
            .query_row("select count(*) from saves", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
