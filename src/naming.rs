//! File name strategies for generated icons and splash screens.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces the file stem for a generated asset.
///
/// Implementations must return a different stem on every call within a
/// process so regenerated assets never overwrite each other.
pub trait NameGenerator {
    fn unique_name(&self, prefix: &str) -> String;
}

/// Appends a random v4 UUID to the prefix, e.g. `app_icon_3f2a...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidNames;

impl NameGenerator for UuidNames {
    fn unique_name(&self, prefix: &str) -> String {
        format!("{prefix}{}", Uuid::new_v4().simple())
    }
}

/// Appends an increasing counter to the prefix, e.g. `app_icon_0`, `app_icon_1`.
#[derive(Debug, Default)]
pub struct SequentialNames {
    next: AtomicU64,
}

impl SequentialNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl NameGenerator for SequentialNames {
    fn unique_name(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}{n}")
    }
}

impl<F> NameGenerator for F
where
    F: Fn(&str) -> String,
{
    fn unique_name(&self, prefix: &str) -> String {
        self(prefix)
    }
}
