//! Resolvable entities and the collections that hold them

use crate::ids::{CategoryId, UserId};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Store collection an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// Article categories
    Categories,
    /// Registered users (contributors)
    Users,
}

impl Collection {
    /// Collection name as known to the document store
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Categories => "Categories",
            Self::Users => "Users",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that can be fetched from the document store by id
pub trait Entity: DeserializeOwned + Send + 'static {
    /// Collection holding records of this type
    const COLLECTION: Collection;

    /// Document id of this record
    fn id(&self) -> &str;
}

/// Article category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Document id
    pub id: CategoryId,
    /// Display title
    pub title: String,
}

impl Category {
    /// Create a category
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<CategoryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Entity for Category {
    const COLLECTION: Collection = Collection::Categories;

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// User credited as an article contributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    /// Document id
    pub id: UserId,
    /// Public username
    pub username: String,
    /// Avatar URL
    #[serde(default)]
    pub img: String,
}

impl Contributor {
    /// Create a contributor
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            img: img.into(),
        }
    }
}

impl Entity for Contributor {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        self.id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_names() {
        assert_eq!(Collection::Categories.to_string(), "Categories");
        assert_eq!(Collection::Users.as_str(), "Users");
        assert_eq!(Category::COLLECTION, Collection::Categories);
        assert_eq!(Contributor::COLLECTION, Collection::Users);
    }

    #[test]
    fn contributor_without_avatar_decodes() {
        let value = serde_json::json!({ "id": "u1", "username": "dandelion" });
        let contributor: Contributor = serde_json::from_value(value).unwrap();
        assert_eq!(contributor.username, "dandelion");
        assert!(contributor.img.is_empty());
    }
}
