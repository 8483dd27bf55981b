//! Identifier generation.
//!
//! Elements without a declared `id` receive one from an [`IdGenerator`].
//! Rendering entry points either take a generator explicitly or fall back to
//! the process-wide generator managed by this module.
//!
//! # Process-wide generator
//!
//! The process-wide generator defaults to [`UuidIds`]. Tests that expect a
//! fixed identifier seed it with [`seed_id`] and restore it with
//! [`reset_id_generator`]:
//!
//! ```rust
//! use ngtag::{next_id, reset_id_generator, seed_id};
//!
//! seed_id("id");
//! assert_eq!(next_id(), "id");
//! reset_id_generator();
//! assert_ne!(next_id(), "id");
//! ```
//!
//! Tests touching the process-wide generator should run serially.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// A source of element identifiers.
///
/// Implementations must be safe to call from several threads at once and,
/// apart from test doubles such as [`FixedId`], must never return the same
/// identifier twice within a process.
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier.
    fn next_id(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for Arc<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Random identifiers: hyphenless v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Counter-based identifiers: `<prefix><n>`.
///
/// The counter is atomic, so concurrent callers always see distinct values.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    /// Creates a generator producing `id_1`, `id_2`, ...
    pub fn new() -> Self {
        Self::with_prefix("id_")
    }

    /// Creates a generator with a custom prefix, starting at 1.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }

    /// Sets the first number handed out.
    pub fn starting_at(self, first: u64) -> Self {
        self.counter.store(first, Ordering::Relaxed);
        self
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

/// Always returns the same identifier.
///
/// Used to make rendered output reproducible in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedId(String);

impl FixedId {
    /// Creates a generator that always yields `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl IdGenerator for FixedId {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}

type SharedGenerator = Arc<dyn IdGenerator>;

static ID_GENERATOR: Lazy<Mutex<SharedGenerator>> =
    Lazy::new(|| Mutex::new(default_id_generator()));

fn default_id_generator() -> SharedGenerator {
    Arc::new(UuidIds)
}

fn current_generator() -> SharedGenerator {
    // A poisoned lock still holds a valid Arc; keep serving ids.
    let guard = ID_GENERATOR.lock().unwrap_or_else(|e| e.into_inner());
    Arc::clone(&guard)
}

/// Replaces the process-wide generator.
pub fn set_id_generator(generator: impl IdGenerator + 'static) {
    let mut guard = ID_GENERATOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = Arc::new(generator);
}

/// Seeds the process-wide generator so every synthesized id is `id`.
pub fn seed_id(id: impl Into<String>) {
    set_id_generator(FixedId::new(id));
}

/// Restores the default process-wide generator.
pub fn reset_id_generator() {
    let mut guard = ID_GENERATOR.lock().unwrap_or_else(|e| e.into_inner());
    *guard = default_id_generator();
}

/// Draws an identifier from the process-wide generator.
pub fn next_id() -> String {
    current_generator().next_id()
}

/// An [`IdGenerator`] that delegates to the process-wide generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalIds;

impl IdGenerator for GlobalIds {
    fn next_id(&self) -> String {
        next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "id_1");
        assert_eq!(ids.next_id(), "id_2");

        let ids = SequentialIds::with_prefix("tree").starting_at(7);
        assert_eq!(ids.next_id(), "tree7");
    }

    #[test]
    fn sequential_ids_unique_across_threads() {
        let ids = Arc::new(SequentialIds::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn uuid_ids_are_simple_and_distinct() {
        let a = UuidIds.next_id();
        let b = UuidIds.next_id();
        assert_eq!(a.len(), 32);
        assert!(!a.contains('-'));
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_id_repeats() {
        let ids = FixedId::new("id");
        assert_eq!(ids.next_id(), "id");
        assert_eq!(ids.next_id(), "id");
    }

    #[test]
    #[serial]
    fn seed_and_reset_global() {
        seed_id("seeded");
        assert_eq!(next_id(), "seeded");
        assert_eq!(GlobalIds.next_id(), "seeded");

        reset_id_generator();
        let id = next_id();
        assert_ne!(id, "seeded");
        assert_eq!(id.len(), 32);
    }

    #[test]
    #[serial]
    fn set_custom_global_generator() {
        set_id_generator(SequentialIds::with_prefix("g"));
        assert_eq!(next_id(), "g1");
        assert_eq!(next_id(), "g2");
        reset_id_generator();
    }
}
