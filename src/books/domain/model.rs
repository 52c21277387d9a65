use serde::{Deserialize, Serialize};

pub type BookId = i64;

// BookEntity abstracts a stored book record whose id is assigned by the
// storage engine on insert and never reused after deletion.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(id: BookId, title: &str, author: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}
