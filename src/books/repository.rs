pub mod sqlite_book_repository;

use crate::books::domain::model::BookEntity;
use crate::books::dto::NewBook;
use crate::core::repository::Repository;

pub(crate) trait BookRepository: Repository<NewBook, BookEntity> {}
