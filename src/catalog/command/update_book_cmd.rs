use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookId;
use crate::books::dto::{BookDto, NewBook};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id comes from the request path, not the payload, so the handler
// overrides it through with_book_id after deserializing the body.
#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(default)]
    pub book_id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: BookId, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
    pub fn with_book_id(mut self, book_id: BookId) -> Self {
        self.book_id = book_id;
        self
    }
    pub fn build_book(&self) -> NewBook {
        NewBook::new(self.title.as_str(), self.author.as_str())
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.update_book(req.book_id, &book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
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
    async fn test_should_run_update_book() {
        let svc = test_service();
        let add_cmd = AddBookCommand::new(svc.clone());
        let update_cmd = UpdateBookCommand::new(svc);

        let res = add_cmd.execute(AddBookCommandRequest::new("Dune", "Herbert"))
            .await.expect("should add book");
        let req = UpdateBookCommandRequest::new(res.book.id, "Dune", "Frank Herbert");
        let updated = update_cmd.execute(req).await.expect("should update book");
        assert_eq!(res.book.id, updated.book.id);
        assert_eq!("Frank Herbert", updated.book.author.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_update_unknown_book() {
        let update_cmd = UpdateBookCommand::new(test_service());

        let req = UpdateBookCommandRequest::new(1000, "Dune", "Frank Herbert");
        let res = update_cmd.execute(req).await;
        let err = res.expect_err("should fail for unknown book");
        assert!(matches!(err, CommandError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_should_override_book_id_from_path() {
        let req: UpdateBookCommandRequest = serde_json::from_value(
            serde_json::json!({"title": "Dune", "author": "Frank Herbert"}))
            .expect("should deserialize request");
        assert_eq!(0, req.book_id);
        let req = req.with_book_id(7);
        assert_eq!(7, req.book_id);
    }
}
