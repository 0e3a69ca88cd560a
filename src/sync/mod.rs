//! Concurrency-safe access to the ordered set.
//!
//! This module provides [`GuardedOrderedSet`], which owns an
//! [`OrderedSet`](crate::collection::OrderedSet) behind a
//! reader/writer lock and exposes every set operation through it,
//! turning the single-threaded collection into one safe for concurrent
//! use.
//!
//! # Examples
//!
//! ```rust
//! use guardset::sync::GuardedOrderedSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(GuardedOrderedSet::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|index| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || set.insert(index))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert!(handle.join().unwrap());
//! }
//!
//! assert_eq!(set.len(), 4);
//! ```

mod guarded;

pub use guarded::GuardedOrderedSet;
