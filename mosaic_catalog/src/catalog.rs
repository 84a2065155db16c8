// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog snapshots: wholesale replacement, fetch ordering, and staleness.

use alloc::vec::Vec;
use core::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::{ListingEntry, MediaRef};

/// Order marker for one in-flight catalog fetch.
///
/// Tickets are issued by [`MediaCatalog::begin_fetch`] in a strictly
/// increasing sequence. A snapshot installs only if its ticket is newer than
/// the last installed one, which makes concurrent fetch completions
/// last-write-wins without any cross-task coordination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// The current ordered set of usable media references.
///
/// A catalog holds at most one snapshot at a time. Refreshes replace the
/// snapshot wholesale (never merge), bump the [`generation`], and record the
/// caller-supplied install time for TTL bookkeeping. An empty catalog is a
/// legitimate state — before the first fetch completes, or after a listing
/// with no usable entries — and downstream consumers treat it as "no content
/// yet", not as an error.
///
/// [`generation`]: MediaCatalog::generation
#[derive(Clone, Debug, Default)]
pub struct MediaCatalog {
    entries: Vec<MediaRef>,
    generation: u64,
    issued_fetches: u64,
    installed_fetch: u64,
    loaded_at: Option<Duration>,
    ttl: Option<Duration>,
}

impl MediaCatalog {
    /// Creates an empty catalog with no TTL (snapshots never expire).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snapshot time-to-live.
    ///
    /// Once a snapshot is older than the TTL, [`MediaCatalog::is_stale`]
    /// reports it so the host can schedule a refresh. The stale snapshot
    /// keeps serving lookups until the refresh actually installs.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Issues a ticket for a fetch the host is about to start.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued_fetches += 1;
        FetchTicket(self.issued_fetches)
    }

    /// Installs a fetched listing as the new snapshot.
    ///
    /// Entries that do not classify as a known media kind are filtered out.
    /// `now` is a caller-supplied monotonic timestamp used only for TTL
    /// bookkeeping.
    ///
    /// Returns `false` — leaving the catalog untouched — when `ticket` is
    /// not newer than the last installed fetch. This is the stale-fetch
    /// guard: if fetch A starts, fetch B starts, and B installs first, a
    /// late-resolving A is silently discarded.
    pub fn install<I>(&mut self, ticket: FetchTicket, listing: I, now: Duration) -> bool
    where
        I: IntoIterator<Item = ListingEntry>,
    {
        if ticket.0 <= self.installed_fetch {
            return false;
        }
        self.entries = listing
            .into_iter()
            .filter_map(|entry| MediaRef::from_listing(&entry.name, entry.url))
            .collect();
        self.installed_fetch = ticket.0;
        self.generation += 1;
        self.loaded_at = Some(now);
        true
    }

    /// Applies one uniform random permutation to the snapshot.
    ///
    /// Shuffle-once semantics: call this right after a successful
    /// [`install`] to vary presentation order, and not again for the
    /// lifetime of the snapshot, so content assignment stays deterministic
    /// between refreshes.
    ///
    /// [`install`]: MediaCatalog::install
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    /// Returns `true` when a (re)fetch is due: no snapshot has ever been
    /// installed, or the current one has outlived the TTL.
    #[must_use]
    pub fn is_stale(&self, now: Duration) -> bool {
        match self.loaded_at {
            None => true,
            Some(at) => match self.ttl {
                None => false,
                Some(ttl) => now.saturating_sub(at) >= ttl,
            },
        }
    }

    /// Number of usable entries in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the snapshot has no usable entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot counter, incremented on every successful install.
    ///
    /// Content assignment is only stable within a single generation;
    /// consumers that cache per-coordinate content can invalidate on a
    /// generation change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Entry at a direct index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaRef> {
        self.entries.get(index)
    }

    /// The snapshot's entries in assignment order.
    #[must_use]
    pub fn entries(&self) -> &[MediaRef] {
        &self.entries
    }
}
