//! Row-to-row linking of scanlines into region parts.
//!
//! Every scanline of the encoder pool gets a part index (`part_of`). The first
//! row opens one part per run. For each following row a two-pointer sweep
//! pairs every run with the runs of the previous row it touches:
//!
//! - no matching run above: the run opens a fresh part;
//! - one matching run: the run joins that part;
//! - several matching runs: their parts are unioned and the run joins the
//!   surviving root. This is what closes a "U" when its bottom stroke bridges
//!   two previously separate parts.
//!
//! Parts live in a [`UnionFind`] arena, so a merge never moves scanlines: they
//! are reparented logically through their part's root.
//!
//! The linker also tracks, per scanline, how many of its pixel edges are not
//! shared with the same region. A run starts with `2 * len + 2` exposed edges
//! and every matching overlap of length `s` removes `s` from both partners.
//! Summed per region this is the exact crack perimeter.

mod union_find;

pub use union_find::UnionFind;

use crate::scanline::{Connectivity, RunLengthEncoder, Scanline};
use std::ops::Range;

const NO_PART: u32 = u32::MAX;

/// Union-find state for one encoder pool.
#[derive(Clone, Debug, Default)]
pub struct RegionLinker {
    connectivity: Connectivity,
    sets: UnionFind,
    part_of: Vec<u32>,
    exposed: Vec<u32>,
    merges: usize,
}

impl RegionLinker {
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            ..Self::default()
        }
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    pub fn reset(&mut self) {
        self.sets.reset();
        self.part_of.clear();
        self.exposed.clear();
        self.merges = 0;
    }

    /// Link every row of `rle`, replacing the previous state.
    pub fn link(&mut self, rle: &RunLengthEncoder) {
        self.reset();
        let runs = rle.runs();
        self.part_of.resize(runs.len(), NO_PART);
        self.exposed
            .extend(runs.iter().map(|s| 2 * s.len() as u32 + 2));

        let rows = rle.rows();
        if rows.is_empty() {
            return;
        }
        for i in rle.row_range(rows.start) {
            self.part_of[i] = self.sets.make_set();
        }
        for y in rows.start + 1..rows.end {
            self.link_rows(runs, rle.row_range(y - 1), rle.row_range(y));
        }
    }

    /// Join the runs of `prev` (row `y - 1`) and `cur` (row `y`).
    ///
    /// Runs of `cur` that already own a part are unioned instead of attached,
    /// which makes the same sweep usable for seams between linked bands.
    pub fn link_rows(&mut self, runs: &[Scanline], prev: Range<usize>, cur: Range<usize>) {
        let slack = self.connectivity.slack();
        let mut first = prev.start;
        for ci in cur {
            let c = runs[ci];
            debug_assert!(c.xend > c.x, "malformed scanline {c:?}");
            while first < prev.end && runs[first].xend + slack <= c.x {
                first += 1;
            }
            let mut k = first;
            while k < prev.end && runs[k].x < c.xend + slack {
                let l = runs[k];
                if l.value == c.value {
                    let shared = l.overlap_len(&c) as u32;
                    self.exposed[k] -= shared;
                    self.exposed[ci] -= shared;
                    match self.part_of[ci] {
                        NO_PART => self.part_of[ci] = self.part_of[k],
                        part => {
                            let (ra, rb) = (self.sets.find(part), self.sets.find(self.part_of[k]));
                            if ra != rb {
                                self.sets.union(ra, rb);
                                self.merges += 1;
                            }
                        }
                    }
                }
                k += 1;
            }
            if self.part_of[ci] == NO_PART {
                self.part_of[ci] = self.sets.make_set();
            }
        }
    }

    /// Join the seam between row `seam - 1` and row `seam` of `rle`, after the
    /// band starting at `seam` was appended to this linker and to `rle`.
    pub fn merge_boundary(&mut self, rle: &RunLengthEncoder, seam: usize) {
        debug_assert!(seam > rle.rows().start && seam < rle.rows().end);
        self.link_rows(rle.runs(), rle.row_range(seam - 1), rle.row_range(seam));
    }

    /// Append the state of a band linked over the encoder pool that follows
    /// this one; part indices of `other` are shifted past ours.
    pub fn append(&mut self, other: &RegionLinker) {
        let offset = self.sets.append(&other.sets);
        self.part_of
            .extend(other.part_of.iter().map(|&p| p + offset));
        self.exposed.extend_from_slice(&other.exposed);
        self.merges += other.merges;
    }

    /// Canonical part of scanline `i`.
    #[inline]
    pub fn root_of(&mut self, i: usize) -> u32 {
        self.sets.find(self.part_of[i])
    }

    /// Exposed pixel edges of scanline `i`.
    #[inline]
    pub fn exposed(&self, i: usize) -> u32 {
        self.exposed[i]
    }

    /// Number of parts opened so far (merged ones included).
    pub fn part_count(&self) -> usize {
        self.sets.len()
    }

    /// Number of unions that joined two distinct parts.
    pub fn merge_count(&self) -> usize {
        self.merges
    }

    pub fn scanline_count(&self) -> usize {
        self.part_of.len()
    }
}

#[cfg(test)]
mod tests;
