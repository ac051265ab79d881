//! Diagnostics data model exposed by the detector and the tools.
//!
//! `DetectionReport` is attached to every detection and carries the input
//! descriptor, per-stage timings and object counts. `BlobDescriptor` is the
//! JSON view of a single blob used by the inspector.

pub mod blobs;
pub mod pipeline;
pub mod timing;

pub use blobs::BlobDescriptor;
pub use pipeline::{DetectionReport, InputDescriptor, StageCounts};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
