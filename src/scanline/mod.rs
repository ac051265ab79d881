//! Run-length encoding of image rows into scanlines.
//!
//! A [`Scanline`] is a maximal horizontal run of pixels that share the same
//! predicate key (see [`PixelPredicate`]). Each row is walked once; a run is
//! closed whenever the key of the next pixel differs from the current one or
//! the pixel does not match at all. The [`RunLengthEncoder`] keeps the runs of
//! every row in one pool so that the linker can address them by index.
//!
//! Complexity
//! - `extract_row` is O(width) and allocation-free once the pool has grown.

mod encoder;
mod predicate;

pub use encoder::{extract_row, RunLengthEncoder};
pub use predicate::{ChannelBand, PixelPredicate, FOREGROUND};

use crate::error::RegionError;
use serde::{Deserialize, Serialize};

/// Horizontal run `[x, xend)` in row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scanline {
    pub x: usize,
    pub y: usize,
    pub xend: usize,
    pub value: i32,
}

impl Scanline {
    pub fn new(x: usize, y: usize, xend: usize, value: i32) -> Result<Self, RegionError> {
        if xend <= x {
            return Err(RegionError::invalid(format!(
                "scanline at y={y} has xend {xend} <= x {x}"
            )));
        }
        Ok(Self { x, y, xend, value })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xend - self.x
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xend <= self.x
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        y == self.y && x >= self.x && x < self.xend
    }

    /// Whether two runs of adjacent rows touch under `connectivity`.
    #[inline]
    pub fn overlaps(&self, other: &Scanline, connectivity: Connectivity) -> bool {
        match connectivity {
            Connectivity::Four => other.x < self.xend && other.xend > self.x,
            Connectivity::Eight => other.x <= self.xend && other.xend >= self.x,
        }
    }

    /// Number of columns shared by both runs (0 for diagonal contact).
    #[inline]
    pub fn overlap_len(&self, other: &Scanline) -> usize {
        self.xend.min(other.xend).saturating_sub(self.x.max(other.x))
    }
}

/// Pixel neighbourhood used when linking runs of adjacent rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Connectivity {
    /// Edge-sharing neighbours only.
    #[default]
    Four,
    /// Edge- and corner-sharing neighbours.
    Eight,
}

impl Connectivity {
    /// Extra columns two runs of adjacent rows may be apart and still touch.
    #[inline]
    pub fn slack(self) -> usize {
        match self {
            Self::Four => 0,
            Self::Eight => 1,
        }
    }
}
