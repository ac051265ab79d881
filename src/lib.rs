#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod blob;
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod image;
pub mod regions;

// Pipeline stages – public for tools and tests, considered internals.
pub mod angle;
pub mod linker;
pub mod scanline;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::blob::{Blob, PcaInfo};
pub use crate::detector::{Detection, DetectorOptions, RegionDetector, Rejected};
pub use crate::error::RegionError;
pub use crate::regions::{Region, RegionId, Restrictions};
pub use crate::scanline::{ChannelBand, Connectivity, PixelPredicate, Scanline};

// Report attached to every detection.
pub use crate::diagnostics::DetectionReport;

// Geometry helpers that are generally useful.
pub use crate::geometry::{line_intersection, Line, Point, Rect};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use region_detector::prelude::*;
///
/// # fn main() -> Result<(), RegionError> {
/// let (w, h) = (64usize, 48usize);
/// let mut gray = vec![0u8; w * h];
/// gray[10 * w + 10] = 255;
/// let img = ImageU8::new(w, h, &gray);
///
/// let mut det = RegionDetector::new(DetectorOptions::default());
/// let detection = det.detect(&img)?;
/// println!("regions={} latency_ms={:.3}", detection.len(), detection.report.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Image, ImageRef, ImageU8};
    pub use crate::{
        Blob, Connectivity, Detection, DetectorOptions, PixelPredicate, RegionDetector,
        RegionError, Restrictions,
    };
}
