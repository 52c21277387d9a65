use async_trait::async_trait;
use tracing::log::info;

use crate::books::domain::model::{BookEntity, BookId};
use crate::books::dto::{BookDto, NewBook};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::domain::Configuration;

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }

    // Reloads the committed row so add/update respond with persisted state
    // instead of echoing the request.
    async fn reload_book(&self, id: BookId) -> CatalogResult<BookEntity> {
        self.book_repository.get(id).await?
            .ok_or_else(|| CatalogError::storage(
                format!("book missing after write for {}", id).as_str()))
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &NewBook) -> CatalogResult<BookDto> {
        book.validate()?;
        let id = self.book_repository.create(book).await?;
        let saved = self.reload_book(id).await?;
        info!("added book {}", saved.id);
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, id: BookId) -> CatalogResult<()> {
        let deleted = self.book_repository.delete(id).await?;
        if deleted == 0 {
            return Err(CatalogError::not_found(
                format!("book not found for {}", id).as_str()));
        }
        info!("removed book {}", id);
        Ok(())
    }

    // Validation runs before the existence check, so an invalid payload for an
    // unknown id still reports InvalidInput.
    async fn update_book(&self, id: BookId, book: &NewBook) -> CatalogResult<BookDto> {
        book.validate()?;
        let updated = self.book_repository.update(id, book).await?;
        if updated == 0 {
            return Err(CatalogError::not_found(
                format!("book not found for {}", id).as_str()));
        }
        let saved = self.reload_book(id).await?;
        info!("updated book {}", saved.id);
        Ok(BookDto::from(&saved))
    }

    async fn find_book_by_id(&self, id: BookId) -> CatalogResult<BookDto> {
        self.book_repository.get(id).await?
            .map(|book| BookDto::from(&book))
            .ok_or_else(|| CatalogError::not_found(
                format!("book not found for {}", id).as_str()))
    }

    async fn list_books(&self) -> CatalogResult<Vec<BookDto>> {
        let books = self.book_repository.scan_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        BookDto::new(other.id, other.title.as_str(), other.author.as_str())
    }
}
