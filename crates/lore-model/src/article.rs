//! Articles and the viewer reading them

use crate::ids::{CategoryId, UserId};
use serde::{Deserialize, Serialize};

/// Encyclopedia article as stored
///
/// Only references to categories and contributors are held; resolving
/// them is the job of the content pipeline. The title doubles as the
/// route key of the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Title, unique per route
    pub title: String,
    /// Raw markup text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Lead image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<String>,
    /// Category references, in authored order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cats: Option<Vec<CategoryId>>,
    /// Contributor references, in authored order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<UserId>>,
}

impl Article {
    /// Create an article with only a title
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// With raw content
    #[inline]
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// With lead image
    #[inline]
    #[must_use]
    pub fn with_main_image(mut self, url: impl Into<String>) -> Self {
        self.main_image = Some(url.into());
        self
    }

    /// With category references
    #[must_use]
    pub fn with_cats<I, T>(mut self, cats: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CategoryId>,
    {
        self.cats = Some(cats.into_iter().map(Into::into).collect());
        self
    }

    /// With contributor references
    #[must_use]
    pub fn with_contributors<I, T>(mut self, contributors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<UserId>,
    {
        self.contributors = Some(contributors.into_iter().map(Into::into).collect());
        self
    }

    /// Both reference lists, when the article carries both
    ///
    /// Resolution is only attempted when this returns `Some`.
    #[inline]
    #[must_use]
    pub fn references(&self) -> Option<(&[CategoryId], &[UserId])> {
        match (&self.cats, &self.contributors) {
            (Some(cats), Some(contributors)) => Some((cats, contributors)),
            _ => None,
        }
    }
}

/// Signed-in user, as far as this pipeline cares
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    /// User id, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Admin role flag
    #[serde(default)]
    pub is_admin: bool,
}

impl Viewer {
    /// Regular signed-in user
    #[inline]
    #[must_use]
    pub fn member(id: impl Into<UserId>) -> Self {
        Self {
            id: Some(id.into()),
            is_admin: false,
        }
    }

    /// Signed-in admin
    #[inline]
    #[must_use]
    pub fn admin(id: impl Into<UserId>) -> Self {
        Self {
            id: Some(id.into()),
            is_admin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_decodes_stored_field_names() {
        let value = serde_json::json!({
            "title": "Kaer Morhen",
            "content": "# Keep",
            "mainImage": "https://img/kaer.png",
            "cats": ["locations"],
            "contributors": ["u1", "u2"]
        });
        let article: Article = serde_json::from_value(value).unwrap();

        assert_eq!(article.main_image.as_deref(), Some("https://img/kaer.png"));
        assert_eq!(article.cats.as_ref().map(Vec::len), Some(1));
        assert_eq!(article.contributors.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn references_require_both_lists() {
        let only_cats = Article::new("A").with_cats(["c1"]);
        assert!(only_cats.references().is_none());

        let only_users = Article::new("A").with_contributors(["u1"]);
        assert!(only_users.references().is_none());

        let both = Article::new("A").with_cats(["c1"]).with_contributors(Vec::<UserId>::new());
        let (cats, users) = both.references().unwrap();
        assert_eq!(cats.len(), 1);
        assert!(users.is_empty());
    }

    #[test]
    fn viewer_flag_defaults_to_false() {
        let viewer: Viewer = serde_json::from_str("{}").unwrap();
        assert!(!viewer.is_admin);
        assert!(Viewer::admin("root").is_admin);
    }
}
