//! Store configuration.

use std::path::PathBuf;

/// What to do when the backing document cannot be parsed at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Substitute an empty collection and log a warning. Callers cannot
    /// distinguish "no records" from "load failed"; that trade-off is the
    /// historical default and is kept as such.
    #[default]
    FailOpen,
    /// Surface the parse failure as a hard error. A missing document is
    /// still an empty collection under either policy, since a fresh store
    /// must be creatable.
    Strict,
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Location of the backing document.
    pub path: PathBuf,

    /// Policy for a malformed backing document at load.
    pub load_policy: LoadPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
            load_policy: LoadPolicy::FailOpen,
        }
    }
}

impl StoreConfig {
    /// Configuration pointing at the given document with the default policy.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Switch to the strict load policy.
    pub fn strict(mut self) -> Self {
        self.load_policy = LoadPolicy::Strict;
        self
    }
}
