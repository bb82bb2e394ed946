//! Lore Core - article content resolution
//!
//! Given an [`Article`](lore_model::Article) that only references its
//! categories and contributors, the [`ArticleContentResolver`]:
//! - resolves both reference lists concurrently through a
//!   [`DocumentLookup`](lore_store::DocumentLookup)
//! - renders the body and outline from one normalized copy of the content
//! - exposes an edit link only to admins, as reported by an injected
//!   [`IdentityProvider`]
//!
//! Resolution attempts are numbered ([`Generation`]). Only the newest
//! attempt may write the resolved lists, so a slow answer for an article
//! the viewer already navigated away from is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use lore_core::{ArticleContentResolver, StaticIdentity};
//! use lore_store::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn example(article: lore_model::Article) {
//! let resolver = ArticleContentResolver::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(StaticIdentity::anonymous()),
//! );
//!
//! let report = resolver.resolve(Arc::new(article)).await;
//! let view = resolver.view().expect("article installed");
//! println!("{} categories ({:?})", view.categories.len(), report.categories);
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod generation;
pub mod identity;
pub mod resolver;
pub mod telemetry;
pub mod view;

pub use config::{LoggingConfig, LoreConfig, RouteConfig};
pub use error::{ConfigError, TelemetryError};
pub use generation::Generation;
pub use identity::{IdentityProvider, SharedIdentity, StaticIdentity};
pub use resolver::{ArticleContentResolver, BatchOutcome, ResolutionReport};
pub use view::{ArticleView, EditLink, EditRoute, ImageView, Section};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Lore Core
    pub use crate::{
        ArticleContentResolver, ArticleView, BatchOutcome, IdentityProvider, LoreConfig,
        ResolutionReport, SharedIdentity, StaticIdentity,
    };
    pub use lore_model::{Article, Category, Contributor, Viewer};
    pub use lore_store::{DocumentLookup, LookupError, MemoryStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
