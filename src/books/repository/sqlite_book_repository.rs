use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{params, Connection, Row};

use crate::books::domain::model::BookEntity;
use crate::books::dto::NewBook;
use crate::books::repository::BookRepository;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::repository::Repository;

#[derive(Debug)]
pub struct SqliteBookRepository {
    conn: Mutex<Connection>,
}

impl SqliteBookRepository {
    pub(crate) fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn conn(&self) -> CatalogResult<MutexGuard<'_, Connection>> {
        self.conn.lock()
            .map_err(|_| CatalogError::storage("books connection lock poisoned"))
    }
}

#[async_trait]
impl Repository<NewBook, BookEntity> for SqliteBookRepository {
    async fn create(&self, draft: &NewBook) -> CatalogResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO books (title, author) VALUES (?1, ?2)",
            params![draft.title, draft.author],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn update(&self, id: i64, draft: &NewBook) -> CatalogResult<usize> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE books SET title = ?1, author = ?2 WHERE id = ?3",
            params![draft.title, draft.author, id],
        )?;
        Ok(changed)
    }

    async fn get(&self, id: i64) -> CatalogResult<Option<BookEntity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, author FROM books WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(map_to_book(row)?));
        }
        Ok(None)
    }

    async fn delete(&self, id: i64) -> CatalogResult<usize> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM books WHERE id = ?1",
            params![id],
        )?;
        Ok(deleted)
    }

    async fn scan_all(&self) -> CatalogResult<Vec<BookEntity>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, author FROM books ORDER BY id")?;
        let mut rows = stmt.query([])?;
        let mut books = vec![];
        while let Some(row) = rows.next()? {
            books.push(map_to_book(row)?);
        }
        Ok(books)
    }
}

impl BookRepository for SqliteBookRepository {}

// Rows are stored exactly as accepted by the service, so no re-validation here.
fn map_to_book(row: &Row<'_>) -> CatalogResult<BookEntity> {
    let title: String = row.get(1)?;
    let author: String = row.get(2)?;
    Ok(BookEntity::new(row.get(0)?, title.as_str(), author.as_str()))
}
