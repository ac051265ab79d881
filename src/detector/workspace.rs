//! Reusable scanline pools and union-find state.
//!
//! The detector keeps one workspace for its whole lifetime; every call resets
//! it instead of reallocating, so steady-state detection on frames of a fixed
//! size does not grow the heap.
use crate::image::{ImageRef, Pixel};
use crate::linker::RegionLinker;
use crate::scanline::{Connectivity, PixelPredicate, RunLengthEncoder};
use std::ops::Range;

/// Encoder pool and linker for a contiguous range of rows.
#[derive(Clone, Debug, Default)]
pub(crate) struct BandState {
    pub rle: RunLengthEncoder,
    pub linker: RegionLinker,
}

impl BandState {
    /// Encode and link `rows` of `image`, replacing the previous content.
    pub fn run<T: Pixel>(
        &mut self,
        image: &ImageRef<'_, T>,
        predicate: &PixelPredicate,
        connectivity: Connectivity,
        rows: Range<usize>,
    ) {
        self.rle.encode_rows(image, predicate, rows);
        self.linker.set_connectivity(connectivity);
        self.linker.link(&self.rle);
    }
}

/// Workspace storing the pools of the last detection.
#[derive(Debug, Default)]
pub(crate) struct DetectorWorkspace {
    /// Whole-image state, the result of a sequential run or a band merge.
    pub full: BandState,
    /// Per-band state of the banded path.
    pub bands: Vec<BandState>,
}

impl DetectorWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare `n` band slots, keeping existing allocations.
    pub fn ensure_bands(&mut self, n: usize) {
        if self.bands.len() < n {
            self.bands.resize_with(n, BandState::default);
        }
    }

    /// Concatenate the first `n` bands into `full`, then link every seam.
    pub fn merge_bands(&mut self, n: usize, connectivity: Connectivity) {
        let full = &mut self.full;
        full.rle.reset();
        full.linker.reset();
        full.linker.set_connectivity(connectivity);
        for (i, band) in self.bands[..n].iter().enumerate() {
            let seam = full.rle.rows().end;
            full.rle.append(&band.rle);
            full.linker.append(&band.linker);
            if i > 0 {
                full.linker.merge_boundary(&full.rle, seam);
            }
        }
    }
}

/// Split `0..height` into at most `bands` contiguous, non-empty ranges.
pub(crate) fn band_ranges(height: usize, bands: usize) -> Vec<Range<usize>> {
    let n = bands.clamp(1, height.max(1));
    let base = height / n;
    let extra = height % n;
    let mut out = Vec::with_capacity(n);
    let mut start = 0;
    for i in 0..n {
        let len = base + usize::from(i < extra);
        out.push(start..start + len);
        start += len;
    }
    out
}
