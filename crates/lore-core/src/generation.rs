//! Resolution generations

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Tag of one resolution attempt
///
/// Strictly increasing per resolver. `Generation::default()` is the state
/// before any article was installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    /// Following generation
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}
