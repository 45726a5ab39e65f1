//! Server-side review table (rusqlite).
//!
//! This store is independent of the client-resident collection — the two are
//! not synchronized. The connection sits behind a `parking_lot::Mutex` so a
//! shared handle can serve concurrent requests; every operation is a single
//! statement, so no reentrancy is needed.

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use serde::Serialize;

use super::error::ApiError;

/// One stored server-side review row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredReview {
    pub id: i64,
    pub username: String,
    pub movie_title: String,
    pub review_text: String,
    pub rating: u8,
    pub created_at: String,
}

pub struct ReviewDb {
    conn: Mutex<Connection>,
}

impl ReviewDb {
    /// Open a file-backed database, creating the table if needed.
    pub fn open(path: &str) -> Result<Self, ApiError> {
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory database (useful for tests).
    pub fn open_in_memory() -> Result<Self, ApiError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, ApiError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS reviews (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                username    TEXT NOT NULL,
                movie_title TEXT NOT NULL,
                review_text TEXT NOT NULL,
                rating      INTEGER NOT NULL,
                created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Insert one row. A failure inserts nothing.
    pub fn insert(
        &self,
        username: &str,
        movie_title: &str,
        review_text: &str,
        rating: u8,
    ) -> Result<i64, ApiError> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO reviews (username, movie_title, review_text, rating)
             VALUES (?1, ?2, ?3, ?4)",
            params![username, movie_title, review_text, rating],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All rows, newest first. No pagination.
    pub fn list(&self) -> Result<Vec<StoredReview>, ApiError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, username, movie_title, review_text, rating, created_at
             FROM reviews
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(StoredReview {
                id: row.get(0)?,
                username: row.get(1)?,
                movie_title: row.get(2)?,
                review_text: row.get(3)?,
                rating: row.get::<_, i64>(4)? as u8,
                created_at: row.get(5)?,
            })
        })?;
        let mut reviews = Vec::new();
        for row in rows {
            reviews.push(row?);
        }
        Ok(reviews)
    }
}

// ============================================================================
// Tests
// ============================================================================
