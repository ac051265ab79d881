//! Region detector orchestrating the scanline pipeline.
//!
//! Overview
//! - Encodes every image row into maximal runs according to the configured
//!   [`PixelPredicate`](crate::scanline::PixelPredicate).
//! - Links runs of adjacent rows with a union-find so that a part discovered
//!   late (the bottom of a "U") merges the parts it bridges.
//! - Accumulates size, bounding box, moments and crack perimeter per region in
//!   one pass over the scanline pool.
//! - Optionally builds the region graph, then applies the size/value window.
//!
//! Modules
//! - [`options`] – configuration types used by the detector and CLI.
//! - `pipeline` – the main [`RegionDetector`] implementation.
//! - `parallel` – band-wise encoding and linking (rayon behind `parallel`).
//! - `workspace` – reusable pools that amortise allocations across frames.
//!
//! Key Ideas
//! - A banded run links each band on its own, appends the band pools in row
//!   order and re-links only the seam rows, so it labels exactly like the
//!   sequential pass.
//! - Region ids follow the raster order of each region's first run and do not
//!   depend on the band split.

pub mod options;
mod parallel;
mod pipeline;
mod workspace;

pub use options::DetectorOptions;
pub use pipeline::{Detection, RegionDetector, Rejected};
