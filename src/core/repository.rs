use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::catalog::CatalogResult;

#[async_trait]
pub trait Repository<Draft, Entity>: Sync + Send {
    // insert a draft and return the engine assigned id
    async fn create(&self, draft: &Draft) -> CatalogResult<i64>;

    // overwrite the entity fields for id, returns count of affected rows
    async fn update(&self, id: i64, draft: &Draft) -> CatalogResult<usize>;

    // get an entity by id
    async fn get(&self, id: i64) -> CatalogResult<Option<Entity>>;

    // delete an entity by id, returns count of affected rows
    async fn delete(&self, id: i64) -> CatalogResult<usize>;

    // fetch all entities ordered by id
    async fn scan_all(&self) -> CatalogResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    Sqlite,
    InMemorySqlite,
}
