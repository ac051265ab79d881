//! Finalized regions and their streaming statistics.
//!
//! Once every row is linked, each scanline is mapped to its part root and the
//! roots are numbered in raster order of their first scanline, which makes
//! region ids deterministic. A counting pass sizes one accumulator per region,
//! then the scanline pool is walked exactly once to feed them.
//!
//! See also
//! - `crate::linker` for the union-find that defines the components.
//! - `crate::blob` for the derived, lazily computed features.

mod accumulator;
pub mod filter;

pub use filter::{accept, Restrictions};

use crate::geometry::Rect;
use crate::linker::RegionLinker;
use crate::scanline::{RunLengthEncoder, Scanline};
use accumulator::RegionAccumulator;
use nalgebra::{Matrix2, Point2};
use serde::{Deserialize, Serialize};

/// Identifier of a region within one detection run (pre-filter numbering).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl RegionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Raw first and second order pixel moments (pixel-centre coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moments {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_yy: f64,
    pub sum_xy: f64,
}

impl Moments {
    pub fn centroid(&self) -> Point2<f64> {
        if self.n == 0 {
            return Point2::new(f64::NAN, f64::NAN);
        }
        let n = self.n as f64;
        Point2::new(self.sum_x / n, self.sum_y / n)
    }

    /// Population covariance `[[sxx, sxy], [sxy, syy]]`.
    pub fn covariance(&self) -> Matrix2<f64> {
        let n = self.n as f64;
        let c = self.centroid();
        let sxx = self.sum_xx / n - c.x * c.x;
        let syy = self.sum_yy / n - c.y * c.y;
        let sxy = self.sum_xy / n - c.x * c.y;
        Matrix2::new(sxx, sxy, sxy, syy)
    }
}

/// Immutable connected component with its aggregated statistics.
///
/// Invariants: `size() > 0` and the bounding box contains every member
/// scanline. Scanlines are stored in raster order.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    id: RegionId,
    value: i32,
    bbox: Rect,
    moments: Moments,
    boundary_len: usize,
    #[serde(skip)]
    scanlines: Vec<Scanline>,
}

impl Region {
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Predicate key shared by all member pixels.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Pixel count.
    pub fn size(&self) -> usize {
        self.moments.n
    }

    /// Bounding box with exclusive max corner.
    pub fn bounding_box(&self) -> Rect {
        self.bbox
    }

    pub fn moments(&self) -> &Moments {
        &self.moments
    }

    pub fn centroid(&self) -> Point2<f64> {
        self.moments.centroid()
    }

    pub fn covariance(&self) -> Matrix2<f64> {
        self.moments.covariance()
    }

    /// Pixel edges shared with other regions or the image border
    /// (4-neighbourhood crack perimeter, holes included).
    pub fn boundary_len(&self) -> usize {
        self.boundary_len
    }

    pub fn scanlines(&self) -> &[Scanline] {
        &self.scanlines
    }
}

/// Regions of one linked pool plus the region index of every scanline.
pub struct Accumulated {
    pub regions: Vec<Region>,
    pub region_of_run: Vec<u32>,
}

/// Finalize every connected component of `rle` exactly once.
pub fn accumulate(rle: &RunLengthEncoder, linker: &mut RegionLinker) -> Accumulated {
    let runs = rle.runs();
    let mut region_of_part = vec![u32::MAX; linker.part_count()];
    let mut region_of_run = Vec::with_capacity(runs.len());
    let mut count = 0u32;
    for i in 0..runs.len() {
        let root = linker.root_of(i) as usize;
        if region_of_part[root] == u32::MAX {
            region_of_part[root] = count;
            count += 1;
        }
        region_of_run.push(region_of_part[root]);
    }

    let mut counts = vec![0usize; count as usize];
    for &r in &region_of_run {
        counts[r as usize] += 1;
    }
    let mut accumulators: Vec<RegionAccumulator> = counts
        .iter()
        .map(|&c| RegionAccumulator::with_capacity(c))
        .collect();
    for (i, &r) in region_of_run.iter().enumerate() {
        accumulators[r as usize].push(runs[i], linker.exposed(i));
    }

    let regions = accumulators
        .into_iter()
        .enumerate()
        .map(|(id, acc)| acc.finish(RegionId(id as u32)))
        .collect();
    Accumulated {
        regions,
        region_of_run,
    }
}

#[cfg(test)]
mod tests;
