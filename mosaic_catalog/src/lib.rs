// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mosaic Catalog: media snapshots and deterministic content assignment.
//!
//! An infinite canvas shows a finite set of media over an infinite grid, so
//! two small pieces of state sit between "a listing was fetched" and "this
//! tile shows that file":
//!
//! - [`MediaCatalog`]: the current ordered snapshot of usable media
//!   references, replaced wholesale on every refresh. Listing entries are
//!   classified into images and videos by filename extension; everything
//!   else is filtered out. Snapshots are installed against a
//!   [`FetchTicket`], so a stale in-flight fetch that resolves after a newer
//!   one is rejected instead of clobbering fresher data.
//! - [`ContentAssigner`]: the pure mapping from a grid coordinate to an
//!   index into the catalog, with the strategy made explicit because real
//!   gallery variants genuinely disagree on it (see [`AssignStrategy`]).
//!
//! Fetching itself is the host's job: this crate never performs I/O and
//! never reads a clock. Time enters only as caller-supplied
//! [`Duration`](core::time::Duration) values, which keeps staleness checks
//! deterministic under test.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use mosaic_catalog::{AssignStrategy, ContentAssigner, ListingEntry, MediaCatalog};
//! use mosaic_grid::GridCoord;
//!
//! let mut catalog = MediaCatalog::new();
//! let ticket = catalog.begin_fetch();
//! let applied = catalog.install(
//!     ticket,
//!     [
//!         ListingEntry::new("a.jpg", "https://cdn.example/a.jpg"),
//!         ListingEntry::new("b.mp4", "https://cdn.example/b.mp4"),
//!         ListingEntry::new("notes.txt", "https://cdn.example/notes.txt"),
//!     ],
//!     Duration::ZERO,
//! );
//! assert!(applied);
//! assert_eq!(catalog.len(), 2); // the text file was filtered out
//!
//! let mut assigner = ContentAssigner::new(AssignStrategy::FillOrder);
//! let first = assigner.assign(&catalog, GridCoord::ORIGIN).unwrap();
//! let second = assigner.assign(&catalog, GridCoord::new(1, 0)).unwrap();
//! let third = assigner.assign(&catalog, GridCoord::new(2, 0)).unwrap();
//! assert_eq!(first.content.url, "https://cdn.example/a.jpg");
//! assert_eq!(second.content.url, "https://cdn.example/b.mp4");
//! // Fill order wraps around the catalog length.
//! assert_eq!(third.content.url, first.content.url);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod assign;
mod catalog;
mod media;

pub use assign::{AssignStrategy, Assignment, ContentAssigner};
pub use catalog::{FetchTicket, MediaCatalog};
pub use media::{ListingEntry, MediaKind, MediaRef};
