use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookId;
use crate::core::catalog::{CatalogError, CatalogResult};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl BookDto {
    pub fn new(id: BookId, title: &str, author: &str) -> BookDto {
        BookDto {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

// NewBook carries the caller-supplied fields of a book before storage has
// assigned an id. Both create and update validate through it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewBook {
    pub title: String,
    pub author: String,
}

impl NewBook {
    pub fn new(title: &str, author: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    // Rejects empty fields, naming every offending field. Whitespace-only
    // values are accepted as-is.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut missing: Vec<&str> = vec![];
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.author.is_empty() {
            missing.push("author");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::invalid_input(
                format!("{} must not be empty", missing.join(" and ")).as_str()))
        }
    }
}
