//! SQLite-backed do-not-whisper list

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use std::sync::Mutex;

use crate::application::errors::StorageError;
use crate::domain::traits::WhisperIgnoreList;

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> SqliteResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn in_memory() -> SqliteResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> SqliteResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS whisper_ignore (
                username TEXT PRIMARY KEY NOT NULL,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> SqliteResult<T>) -> Result<T, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(f(&*conn)?)
    }

    pub fn add_whisper_ignore(&self, username: &str) -> Result<(), StorageError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO whisper_ignore (username) VALUES (?1)",
                [username],
            )
        })?;
        Ok(())
    }

    pub fn remove_whisper_ignore(&self, username: &str) -> Result<bool, StorageError> {
        let rows = self.with_conn(|conn| {
            conn.execute("DELETE FROM whisper_ignore WHERE username = ?1", [username])
        })?;
        Ok(rows > 0)
    }

    pub fn check_whisper_ignore(&self, username: &str) -> Result<bool, StorageError> {
        let found = self.with_conn(|conn| {
            conn.query_row(
                "SELECT 1 FROM whisper_ignore WHERE username = ?1",
                [username],
                |row| row.get::<_, i64>(0),
            )
            .optional()
        })?;
        Ok(found.is_some())
    }

    pub fn list_whisper_ignore(&self) -> Result<Vec<String>, StorageError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT username FROM whisper_ignore ORDER BY username")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

            let mut users: Vec<String> = Vec::new();
            for user in rows {
                users.push(user?);
            }
            Ok(users)
        })
    }
}

#[async_trait]
impl WhisperIgnoreList for Database {
    async fn is_ignored(&self, user: &str) -> Result<bool, StorageError> {
        self.check_whisper_ignore(user)
    }

    async fn add(&self, user: &str) -> Result<(), StorageError> {
        self.add_whisper_ignore(user)
    }

    async fn remove(&self, user: &str) -> Result<(), StorageError> {
        self.remove_whisper_ignore(user).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_check_remove() {
        let db = Database::in_memory().unwrap();
        assert!(!db.check_whisper_ignore("viewer").unwrap());

        db.add_whisper_ignore("viewer").unwrap();
        assert!(db.check_whisper_ignore("viewer").unwrap());
        assert!(!db.check_whisper_ignore("other").unwrap());

        assert!(db.remove_whisper_ignore("viewer").unwrap());
        assert!(!db.check_whisper_ignore("viewer").unwrap());
    }

    #[test]
    fn test_add_is_idempotent() {
        let db = Database::in_memory().unwrap();
        db.add_whisper_ignore("viewer").unwrap();
        db.add_whisper_ignore("viewer").unwrap();
        assert_eq!(db.list_whisper_ignore().unwrap(), vec!["viewer".to_string()]);
    }

    #[test]
    fn test_remove_missing_user() {
        let db = Database::in_memory().unwrap();
        assert!(!db.remove_whisper_ignore("nobody").unwrap());
    }

    #[tokio::test]
    async fn test_trait_impl() {
        let db = Database::in_memory().unwrap();
        db.add("viewer").await.unwrap();
        assert!(db.is_ignored("viewer").await.unwrap());
        db.remove("viewer").await.unwrap();
        assert!(!db.is_ignored("viewer").await.unwrap());
    }
}
