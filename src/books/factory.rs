use crate::books::repository::BookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::catalog::CatalogResult;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::sqlite::{create_books_table, open_connection};

pub(crate) fn create_book_repository(config: &Configuration,
                                     store: RepositoryStore) -> CatalogResult<Box<dyn BookRepository>> {
    let conn = open_connection(config, store)?;
    create_books_table(&conn)?;
    Ok(Box::new(SqliteBookRepository::new(conn)))
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_book_repository() {
        let config = Configuration::new("test");
        let books_repo = create_book_repository(&config, RepositoryStore::InMemorySqlite)
            .expect("should create book repository");
        let books = books_repo.scan_all().await.expect("should scan books");
        assert!(books.is_empty());
    }
}
