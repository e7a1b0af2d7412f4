//! Interned-free symbol names.
//!
//! The teacher's `planning/model` crate backs `Sym` with a source `Span` for
//! diagnostics; this crate has no parser front-end, so `Sym` is reduced to a
//! thin, cheaply-clonable name wrapper. Equality, ordering and hashing are by
//! the underlying string, matching the teacher's convention.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

#[derive(Clone, Eq)]
pub struct Sym(Arc<str>);

impl Sym {
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        Sym(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Sym {
    fn from(s: &str) -> Self {
        Sym::new(s)
    }
}

impl From<String> for Sym {
    fn from(s: String) -> Self {
        Sym::new(s)
    }
}

impl PartialEq for Sym {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl std::hash::Hash for Sym {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state)
    }
}

impl PartialOrd for Sym {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sym {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.as_ref().cmp(other.0.as_ref())
    }
}

impl Display for Sym {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Debug for Sym {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
