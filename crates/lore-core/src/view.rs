//! Presentation state of one article
//!
//! A snapshot assembled from the installed article, the resolved lists
//! and the viewer's role at the moment [`ArticleContentResolver::view`]
//! is called.
//!
//! [`ArticleContentResolver::view`]: crate::ArticleContentResolver::view

use crate::config::RouteConfig;
use lore_content::{build_outline, normalize, MarkdownRenderer, OutlineEntry, RenderedDocument};
use lore_model::{Article, Category, Contributor};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Alt text shown for the lead image
pub const IMAGE_ALT: &str = "Something went wrong";

/// Everything the shell needs to draw an article
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleView {
    /// Title, verbatim
    pub title: String,
    /// Lead image, when the article has one
    pub image: Option<ImageView>,
    /// Rendered body
    pub body: RenderedDocument,
    /// Headings of the body
    pub outline: Vec<OutlineEntry>,
    /// Resolved categories; empty until the batch commits
    pub categories: Vec<Category>,
    /// Resolved contributors; empty until the batch commits
    pub contributors: Vec<Contributor>,
    /// Edit affordance, admins only
    pub edit: Option<EditLink>,
}

impl ArticleView {
    pub(crate) fn assemble(
        article: &Article,
        renderer: &dyn MarkdownRenderer,
        categories: Vec<Category>,
        contributors: Vec<Contributor>,
        edit: Option<EditLink>,
    ) -> Self {
        // Body and outline must read the same normalized text
        let (body, outline) = match article.content.as_deref() {
            Some(raw) => {
                let normalized = normalize(raw);
                (
                    renderer.render(&normalized),
                    build_outline(&normalized).to_vec(),
                )
            }
            None => (RenderedDocument::default(), Vec::new()),
        };

        Self {
            title: article.title.clone(),
            image: article.main_image.as_ref().map(|src| ImageView {
                src: src.clone(),
                alt: IMAGE_ALT.to_string(),
            }),
            body,
            outline,
            categories,
            contributors,
            edit,
        }
    }

    /// Dropdown sections to show, in display order
    ///
    /// Empty lists produce no section.
    #[must_use]
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections = Vec::with_capacity(2);
        if !self.categories.is_empty() {
            sections.push(Section::Categories(&self.categories));
        }
        if !self.contributors.is_empty() {
            sections.push(Section::Contributors(&self.contributors));
        }
        sections
    }
}

/// Plain-text layout used by the `lore-view` binary
impl Display for ArticleView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        if let Some(edit) = &self.edit {
            writeln!(f, "[edit] {}", edit.href)?;
        }
        if let Some(image) = &self.image {
            writeln!(f, "[image] {}", image.src)?;
        }

        if !self.outline.is_empty() {
            writeln!(f)?;
            writeln!(f, "Contents:")?;
            for entry in &self.outline {
                let indent = "  ".repeat(usize::from(entry.level.saturating_sub(1)));
                writeln!(f, "{indent}- {} (#{})", entry.label, entry.anchor)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.body.html)?;

        for section in self.sections() {
            writeln!(f, "{}:", section.title())?;
            match section {
                Section::Categories(items) => {
                    for category in items {
                        writeln!(f, "  - {}", category.title)?;
                    }
                }
                Section::Contributors(items) => {
                    for contributor in items {
                        writeln!(f, "  - {} ({})", contributor.username, contributor.img)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Lead image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    /// Image URL
    pub src: String,
    /// Alt text
    pub alt: String,
}

/// Collapsible list under the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section<'a> {
    /// Resolved categories
    Categories(&'a [Category]),
    /// Resolved contributors
    Contributors(&'a [Contributor]),
}

impl Section<'_> {
    /// Dropdown heading
    #[inline]
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Categories(_) => "Categories",
            Self::Contributors(_) => "Contributors",
        }
    }

    /// Number of items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(items) => items.len(),
            Self::Contributors(items) => items.len(),
        }
    }

    /// Check if the section has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Link to the edit view of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLink {
    /// Route target
    pub href: String,
}

/// Builds edit links
///
/// Articles are keyed by title, not by a stable id, so a rename breaks
/// previously emitted links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRoute {
    prefix: String,
}

impl EditRoute {
    /// Route with the given prefix
    #[inline]
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Edit link for an article title
    #[must_use]
    pub fn link(&self, title: &str) -> EditLink {
        EditLink {
            href: format!("{}{}", self.prefix, title),
        }
    }
}

impl Default for EditRoute {
    fn default() -> Self {
        Self::from(&RouteConfig::default())
    }
}

impl From<&RouteConfig> for EditRoute {
    fn from(config: &RouteConfig) -> Self {
        Self::new(config.edit_prefix.clone())
    }
}
