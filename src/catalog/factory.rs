use std::sync::Arc;

use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::catalog::CatalogResult;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) fn create_catalog_service(config: &Configuration,
                                     store: RepositoryStore) -> CatalogResult<Arc<dyn CatalogService>> {
    let book_repo = factory::create_book_repository(config, store)?;
    Ok(Arc::new(CatalogServiceImpl::new(config, book_repo)))
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory::create_catalog_service;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_catalog_service() {
        let config = Configuration::new("test");
        let catalog_svc = create_catalog_service(&config, RepositoryStore::InMemorySqlite)
            .expect("should create catalog service");
        let books = catalog_svc.list_books().await.expect("should list books");
        assert!(books.is_empty());
    }
}
