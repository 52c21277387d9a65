pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookId;
use crate::books::dto::{BookDto, NewBook};
use crate::core::catalog::CatalogResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &NewBook) -> CatalogResult<BookDto>;
    async fn remove_book(&self, id: BookId) -> CatalogResult<()>;
    async fn update_book(&self, id: BookId, book: &NewBook) -> CatalogResult<BookDto>;
    async fn find_book_by_id(&self, id: BookId) -> CatalogResult<BookDto>;
    async fn list_books(&self) -> CatalogResult<Vec<BookDto>>;
}
