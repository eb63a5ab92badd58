use serde::{Deserialize, Serialize};

use crate::{Entity, EntityId};

/// A book referencing its author by id only.
///
/// `author_id` is not checked against the author collection; a dangling
/// reference simply resolves to no author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: EntityId,
    pub name: String,
    pub author_id: EntityId,
}

impl Book {
    pub fn new(id: EntityId, name: impl Into<String>, author_id: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_by(&self, author_id: EntityId) -> bool {
        self.author_id == author_id
    }
}

impl Entity for Book {
    fn id(&self) -> EntityId {
        self.id
    }
}
