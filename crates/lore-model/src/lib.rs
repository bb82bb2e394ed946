//! Lore data model
//!
//! Records read by the article content pipeline. None of them are mutated
//! here; articles are supplied by the surrounding view, categories and
//! contributors are resolved through a document store.
//!
//! # Core Concepts
//!
//! - [`Article`]: the displayed record, holding only references to its
//!   categories and contributors
//! - [`Category`], [`Contributor`]: entities the references resolve to
//! - [`Entity`]: binds an entity type to its [`Collection`]
//! - [`Viewer`]: the signed-in user as reported by the auth collaborator

#![warn(unreachable_pub)]

mod article;
mod entity;
mod ids;

pub use article::{Article, Viewer};
pub use entity::{Category, Collection, Contributor, Entity};
pub use ids::{CategoryId, UserId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
