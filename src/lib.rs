//! # guardset
//!
//! A concurrency-safe ordered set for Rust providing reader/writer
//! locking, atomic batch operations, and snapshot iteration.
//!
//! ## Overview
//!
//! This library provides an ordered set of unique elements that can be
//! mutated and queried from any number of threads at once. It is built
//! from two layers:
//!
//! - **Collection**: [`OrderedSet`], a single-threaded ordered set with
//!   a size-adaptive representation (inline storage for small sets,
//!   sorted vector for large ones)
//! - **Synchronization**: [`GuardedOrderedSet`], which owns an
//!   [`OrderedSet`] behind a reader/writer lock and exposes every
//!   operation through it, including batch variants that apply under a
//!   single lock acquisition
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` support for both set types
//!
//! ## Example
//!
//! ```rust
//! use guardset::prelude::*;
//!
//! let set = GuardedOrderedSet::new();
//! assert_eq!(set.insert_slice(&[3, 1, 2, 1]), vec![true, true, true, false]);
//! assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
//! assert_eq!(set.len(), 3);
//! ```
//!
//! [`OrderedSet`]: collection::OrderedSet
//! [`GuardedOrderedSet`]: sync::GuardedOrderedSet

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use guardset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;

    pub use crate::sync::*;
}

pub mod collection;

pub mod sync;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
