//! A weight-balanced sorted set for Rust.
//!
//! This crate provides [`WbtSet`], an ordered set stored in a weight-balanced
//! binary search tree. Every node knows the size of its subtree, so on top of
//! the usual set operations it answers order-statistic queries in O(log n):
//!
//! - [`get_by_rank`](WbtSet::get_by_rank) - Get the element at a given sorted position
//! - [`rank_of`](WbtSet::rank_of) - Get the sorted position of an element
//! - [`remove_by_rank`](WbtSet::remove_by_rank) - Remove the element at a given sorted position
//! - Indexing by [`Rank`] - e.g., `set[Rank(1)]` for the smallest element
//!
//! Ranks are one-based: rank 1 is the smallest element, rank `len()` the largest.
//!
//! # Example
//!
//! ```
//! use wbt_set::{Rank, WbtSet};
//!
//! let mut set = WbtSet::new();
//! for x in [50, 10, 40, 20, 30] {
//!     set.insert(x);
//! }
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.get_by_rank(2), Some(&20));
//! assert_eq!(set.rank_of(&40), Some(4));
//! assert_eq!(set.remove_by_rank(3), Some(30));
//! assert_eq!(set[Rank(3)], 40);
//! ```
//!
//! # Custom ordering
//!
//! A set orders its elements through a [`Comparator`]. The default,
//! [`NaturalOrder`], uses the element's [`Ord`]. [`FnComparator`] takes a pair
//! of closures. A comparator that matches on part of an element (a key)
//! lets [`insert`](WbtSet::insert) overwrite the rest of a stored element in place.
//!
//! # Implementation
//!
//! The tree keeps every node's weight (subtree size plus one) within 5/2 of its
//! sibling's. Mutations record their descent path, do their work at the bottom,
//! then unwind the path, recomputing sizes and applying at most one single or
//! double rotation per ancestor. Nodes live in an arena and link to each other by
//! index, so there is no `unsafe` and no reference counting.
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`tracing`** - Emits `trace` events for rotations (off by default)

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod comparator;
mod order_statistic;
mod raw;

pub mod wbt_set;

pub use comparator::{Comparator, FnComparator, NaturalOrder};
pub use order_statistic::Rank;
pub use wbt_set::WbtSet;
