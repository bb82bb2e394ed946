//! Lore content formatting
//!
//! Raw article text goes through one lossy pass, [`normalize`], and the
//! result feeds both the body renderer and the outline builder. Both
//! consumers must see the same normalized string, otherwise outline labels
//! drift from the headings actually rendered.
//!
//! ```text
//! raw content → normalize → ┬→ MarkdownRenderer → RenderedDocument
//!                           └→ build_outline    → Outline (lazy)
//! ```
//!
//! Both passes parse with [`markdown_options`] so they agree on what a
//! heading is.

#![warn(unreachable_pub)]

pub mod normalize;
pub mod outline;
pub mod render;

pub use normalize::normalize;
pub use outline::{build_outline, Outline, OutlineEntry, OutlineIter};
pub use render::{CommonMarkRenderer, MarkdownRenderer, RenderedDocument};

use pulldown_cmark::Options;

/// Markdown dialect shared by rendering and outline extraction
///
/// Plain CommonMark; heading attributes are off so `{#id}` stays text.
#[inline]
#[must_use]
pub fn markdown_options() -> Options {
    Options::empty()
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
