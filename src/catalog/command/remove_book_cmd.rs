use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookId;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: BookId,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: BookId) -> Self {
        Self {
            book_id,
        }
    }
}


// Removal responds with no body, the handler maps this to 204.
#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn test_service() -> Arc<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemorySqlite)
            .expect("should create catalog service")
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = test_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("Dune", "Frank Herbert"))
            .await.expect("should add book");
        let _ = remove_cmd.execute(RemoveBookCommandRequest::new(res.book.id))
            .await.expect("should remove book");
    }

    #[tokio::test]
    async fn test_should_fail_remove_unknown_book() {
        let remove_cmd = RemoveBookCommand::new(test_service());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new(1000)).await;
        let err = res.expect_err("should fail for unknown book");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }
}
