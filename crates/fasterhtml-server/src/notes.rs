//! Notes table access.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;

/// A stored note as returned by `GET /notes`.
///
/// Columns are nullable in the table, so both fields are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
	pub text: Option<String>,
	pub completed: Option<bool>,
}

/// Payload of `POST /notes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
	pub text: String,
	pub completed: bool,
}

impl From<NewNote> for Note {
	fn from(note: NewNote) -> Self {
		Self {
			text: Some(note.text),
			completed: Some(note.completed),
		}
	}
}

/// SQLite-backed repository for the `notes` table.
#[derive(Debug, Clone)]
pub struct NoteStore {
	pool: SqlitePool,
}

impl NoteStore {
	/// Opens a pool for `url`, creating the database file when missing.
	pub async fn connect(url: &str) -> Result<Self> {
		let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
		let pool = SqlitePoolOptions::new().connect_with(options).await?;
		tracing::info!("Connected to notes database");
		Ok(Self { pool })
	}

	/// Private in-memory database, kept alive by a single pinned connection.
	pub async fn in_memory() -> Result<Self> {
		let pool = SqlitePoolOptions::new()
			.min_connections(1)
			.max_connections(1)
			.idle_timeout(None)
			.max_lifetime(None)
			.connect("sqlite::memory:")
			.await?;
		Ok(Self { pool })
	}

	/// Applies pending migrations from `migrations/`.
	pub async fn migrate(&self) -> Result<()> {
		sqlx::migrate!("./migrations").run(&self.pool).await?;
		tracing::debug!("Notes migrations applied");
		Ok(())
	}

	/// All notes in insertion order.
	pub async fn list(&self) -> Result<Vec<Note>> {
		let notes = sqlx::query_as::<_, Note>("SELECT text, completed FROM notes ORDER BY id")
			.fetch_all(&self.pool)
			.await?;
		Ok(notes)
	}

	pub async fn insert(&self, note: &NewNote) -> Result<()> {
		sqlx::query("INSERT INTO notes (text, completed) VALUES (?, ?)")
			.bind(&note.text)
			.bind(note.completed)
			.execute(&self.pool)
			.await?;
		tracing::debug!("Inserted note");
		Ok(())
	}

	pub async fn close(&self) {
		self.pool.close().await;
		tracing::info!("Disconnected from notes database");
	}

	pub fn pool(&self) -> &SqlitePool {
		&self.pool
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	async fn store() -> NoteStore {
		let store = NoteStore::in_memory().await.unwrap();
		store.migrate().await.unwrap();
		store
	}

	#[rstest]
	#[tokio::test]
	async fn test_empty_table() {
		let store = store().await;

		assert!(store.list().await.unwrap().is_empty());
		store.close().await;
	}

	#[rstest]
	#[tokio::test]
	async fn test_insert_then_list_in_order() {
		let store = store().await;
		let first = NewNote {
			text: "buy milk".to_string(),
			completed: false,
		};
		let second = NewNote {
			text: "write docs".to_string(),
			completed: true,
		};

		store.insert(&first).await.unwrap();
		store.insert(&second).await.unwrap();

		assert_eq!(
			store.list().await.unwrap(),
			vec![Note::from(first), Note::from(second)]
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_null_columns_listed_as_none() {
		let store = store().await;
		sqlx::query("INSERT INTO notes (id) VALUES (1)")
			.execute(store.pool())
			.await
			.unwrap();

		assert_eq!(
			store.list().await.unwrap(),
			vec![Note {
				text: None,
				completed: None
			}]
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_migrate_is_repeatable() {
		let store = store().await;

		assert!(store.migrate().await.is_ok());
	}

	#[rstest]
	fn test_note_serializes_with_nulls() {
		let json = serde_json::to_string(&Note {
			text: None,
			completed: Some(true),
		})
		.unwrap();

		assert_eq!(json, r#"{"text":null,"completed":true}"#);
	}
}
