//! Table of contents extraction
//!
//! Headings are detected by the same CommonMark parser the body renderer
//! uses (see [`crate::markdown_options`]):
//!
//! - ATX headings (`#` to `######` at line start) and setext headings
//!   (`===` / `---` underlines) count
//! - the level is the heading depth, 1 to 6
//! - `#` lines inside fenced or indented code blocks, code spans and raw
//!   HTML blocks are not headings
//!
//! The label is the heading's plain text with emphasis markers removed.
//! Malformed markup never fails; the parser's best-effort reading wins.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One heading of the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// Heading depth (1-6)
    pub level: u8,
    /// Heading text
    pub label: String,
    /// In-page anchor slug, unique within one outline
    pub anchor: String,
}

/// Outline over a normalized document
///
/// Holds only the text; every call to [`Outline::iter`] re-parses from the
/// start, so the sequence can be walked any number of times.
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a> {
    text: &'a str,
}

/// Build the outline of normalized text
#[inline]
#[must_use]
pub fn build_outline(normalized: &str) -> Outline<'_> {
    Outline { text: normalized }
}

impl<'a> Outline<'a> {
    /// Lazily iterate the headings in document order
    #[must_use]
    pub fn iter(&self) -> OutlineIter<'a> {
        OutlineIter {
            events: Parser::new_ext(self.text, crate::markdown_options()),
            suffixes: HashMap::new(),
            used: HashSet::new(),
        }
    }

    /// Number of headings
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the text has no headings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect all entries
    #[must_use]
    pub fn to_vec(&self) -> Vec<OutlineEntry> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for Outline<'a> {
    type Item = OutlineEntry;
    type IntoIter = OutlineIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &Outline<'a> {
    type Item = OutlineEntry;
    type IntoIter = OutlineIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy heading iterator
pub struct OutlineIter<'a> {
    events: Parser<'a>,
    /// Slug -> next suffix to try
    suffixes: HashMap<String, usize>,
    /// Anchors already handed out
    used: HashSet<String>,
}

impl std::fmt::Debug for OutlineIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineIter")
            .field("anchors", &self.used.len())
            .finish_non_exhaustive()
    }
}

impl OutlineIter<'_> {
    /// Collect heading text up to the matching end tag
    fn heading_label(&mut self) -> String {
        let mut label = String::new();
        for event in self.events.by_ref() {
            match event {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(text) | Event::Code(text) => label.push_str(&text),
                Event::SoftBreak | Event::HardBreak => label.push(' '),
                _ => {}
            }
        }
        label.trim().to_string()
    }

    fn unique_anchor(&mut self, label: &str) -> String {
        let mut base = slugify(label);
        if base.is_empty() {
            base.push_str("section");
        }

        let anchor = if self.used.contains(&base) {
            let next = self.suffixes.entry(base.clone()).or_insert(1);
            let mut candidate = format!("{base}-{next}");
            while self.used.contains(&candidate) {
                *next += 1;
                candidate = format!("{base}-{next}");
            }
            *next += 1;
            candidate
        } else {
            base
        };
        self.used.insert(anchor.clone());
        anchor
    }
}

impl Iterator for OutlineIter<'_> {
    type Item = OutlineEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Event::Start(Tag::Heading { level, .. }) = self.events.next()? {
                let label = self.heading_label();
                let anchor = self.unique_anchor(&label);
                return Some(OutlineEntry {
                    level: level as u8,
                    label,
                    anchor,
                });
            }
        }
    }
}

/// GitHub-style heading slug
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            slug.push('-');
        } else if ch == '_' {
            slug.push('_');
        }
    }
    slug
}
