//! Lore document store interface
//!
//! The content pipeline reads categories and users through the
//! [`DocumentLookup`] trait. Timeouts, retries and caching are the
//! concern of whichever backend implements it; this crate adds none.
//!
//! # Example
//!
//! ```rust,ignore
//! use lore_model::Category;
//! use lore_store::{fetch, MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! store.insert_entity(&Category::new("c1", "Witchers"))?;
//!
//! let category: Category = fetch(&store, "c1").await?;
//! assert_eq!(category.title, "Witchers");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod error;
pub mod lookup;
pub mod memory;

pub use error::{LookupError, SeedError};
pub use lookup::{fetch, DocumentLookup};
pub use memory::{MemoryStore, SeedData};
pub use lore_model::Collection;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
