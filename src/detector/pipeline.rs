//! Detector pipeline driving region detection end-to-end.
//!
//! The [`RegionDetector`] exposes a small API: feed an image view and get the
//! accepted blobs plus a report. Internally it runs
//! run-length encoding → row linking → accumulation → optional graph →
//! filtering, reusing its pools between calls.
//!
//! Typical usage:
//! ```no_run
//! use region_detector::{DetectorOptions, RegionDetector};
//! use region_detector::image::Image;
//!
//! # fn example(gray: Image<u8>) -> Result<(), region_detector::RegionError> {
//! let mut detector = RegionDetector::new(DetectorOptions::default());
//! let detection = detector.detect(&gray.as_ref())?;
//! for blob in &detection.blobs {
//!     println!("{:?} size={} cog={:?}", blob.id(), blob.size(), blob.cog());
//! }
//! # Ok(())
//! # }
//! ```
use super::options::DetectorOptions;
use super::parallel::run_bands;
use super::workspace::{band_ranges, BandState, DetectorWorkspace};
use crate::blob::Blob;
use crate::diagnostics::{
    elapsed_ms, DetectionReport, InputDescriptor, StageCounts, TimingBreakdown,
};
use crate::error::RegionError;
use crate::geometry::Point;
use crate::graph::RegionGraph;
use crate::image::{ImageRef, Pixel};
use crate::regions::{accumulate, RegionId, Restrictions};
use log::{debug, warn};
use serde::Serialize;
use std::time::Instant;

/// Regions dropped by the size/value window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejected {
    pub count: usize,
    pub pixels: usize,
}

/// Result of one detection call.
#[derive(Debug)]
pub struct Detection {
    /// Accepted blobs in ascending id order.
    pub blobs: Vec<Blob>,
    pub rejected: Rejected,
    /// Graph over all regions, accepted or not (only with `create_graph`).
    pub graph: Option<RegionGraph>,
    pub report: DetectionReport,
}

impl Detection {
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Accepted blob containing pixel `p`.
    pub fn click(&self, p: Point) -> Option<&Blob> {
        self.blobs.iter().find(|b| b.contains(p))
    }

    /// Accepted blob with region id `id`.
    pub fn blob(&self, id: RegionId) -> Option<&Blob> {
        self.blobs
            .binary_search_by_key(&id, |b| b.id())
            .ok()
            .map(|i| &self.blobs[i])
    }

    /// Total pixel count of the accepted blobs.
    pub fn accepted_pixels(&self) -> usize {
        self.blobs.iter().map(|b| b.size()).sum()
    }
}

/// Connected region detector with reusable scratch state.
pub struct RegionDetector {
    options: DetectorOptions,
    workspace: DetectorWorkspace,
}

impl RegionDetector {
    /// Create a detector with the supplied options.
    pub fn new(options: DetectorOptions) -> Self {
        Self {
            options,
            workspace: DetectorWorkspace::new(),
        }
    }

    pub fn options(&self) -> &DetectorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DetectorOptions) {
        self.options = options;
    }

    /// Replace the size/value window used by subsequent calls.
    pub fn set_restrictions(&mut self, restrictions: Restrictions) -> Result<(), RegionError> {
        restrictions.validate()?;
        self.options.restrictions = restrictions;
        Ok(())
    }

    /// Detect all regions of `image` in a single sequential pass.
    pub fn detect<T: Pixel>(&mut self, image: &ImageRef<'_, T>) -> Result<Detection, RegionError> {
        let total_start = Instant::now();
        self.prepare(image)?;
        debug!(
            "RegionDetector::detect start w={} h={} channels={}",
            image.w, image.h, image.channels
        );
        let mut timings = TimingBreakdown::default();

        let rle_start = Instant::now();
        let full = &mut self.workspace.full;
        full.rle.encode(image, &self.options.predicate);
        timings.push_since("rle", rle_start);

        let link_start = Instant::now();
        full.linker.set_connectivity(self.options.connectivity);
        full.linker.link(&full.rle);
        timings.push_since("link", link_start);

        Ok(self.finish(image, 1, timings, total_start))
    }

    /// Detect all regions by scanning horizontal bands independently and
    /// joining them at the seams.
    ///
    /// With the `parallel` feature the bands run on the rayon pool; without it
    /// they run one after another. Either way the result is identical to
    /// [`detect`](Self::detect).
    pub fn detect_parallel<T: Pixel>(
        &mut self,
        image: &ImageRef<'_, T>,
    ) -> Result<Detection, RegionError> {
        let total_start = Instant::now();
        self.prepare(image)?;
        let ranges = band_ranges(image.h, self.options.bands);
        debug!(
            "RegionDetector::detect_parallel start w={} h={} bands={}",
            image.w,
            image.h,
            ranges.len()
        );
        let mut timings = TimingBreakdown::default();

        let bands_start = Instant::now();
        self.workspace.ensure_bands(ranges.len());
        run_bands(
            &mut self.workspace.bands[..ranges.len()],
            &ranges,
            image,
            &self.options.predicate,
            self.options.connectivity,
        );
        timings.push_since("bands", bands_start);

        let merge_start = Instant::now();
        self.workspace
            .merge_bands(ranges.len(), self.options.connectivity);
        timings.push_since("merge", merge_start);

        Ok(self.finish(image, ranges.len(), timings, total_start))
    }

    /// Validate the call and apply the channel and row budget rules.
    fn prepare<T: Pixel>(&self, image: &ImageRef<'_, T>) -> Result<(), RegionError> {
        image.validate()?;
        self.options.validate()?;
        let required = self.options.predicate.required_channels();
        if required > image.channels {
            return Err(RegionError::UnsupportedChannels {
                required,
                available: image.channels,
            });
        }
        if required == 1 && image.channels > 1 {
            warn!(
                "image has {} channels; detecting on channel 0 only",
                image.channels
            );
        }
        if let Some(budget) = self.options.row_budget {
            if budget < image.h {
                debug!(
                    "RegionDetector: row budget {} below image height {}",
                    budget, image.h
                );
                return Err(RegionError::Incomplete {
                    rows_processed: 0,
                    height: image.h,
                });
            }
        }
        Ok(())
    }

    /// Accumulate, build the graph, filter and wrap the accepted regions.
    fn finish<T: Pixel>(
        &mut self,
        image: &ImageRef<'_, T>,
        bands: usize,
        mut timings: TimingBreakdown,
        total_start: Instant,
    ) -> Detection {
        let BandState { rle, linker } = &mut self.workspace.full;
        let connectivity = self.options.connectivity;

        let acc_start = Instant::now();
        let accumulated = accumulate(rle, linker);
        timings.push_since("accumulate", acc_start);

        let mut graph = None;
        if self.options.create_graph {
            let graph_start = Instant::now();
            graph = Some(RegionGraph::build(
                rle,
                &accumulated.region_of_run,
                &accumulated.regions,
                image.w,
                connectivity,
            ));
            timings.push_since("graph", graph_start);
        }

        let filter_start = Instant::now();
        let restrictions = &self.options.restrictions;
        let mut counts = StageCounts {
            scanlines: rle.len(),
            parts: linker.part_count(),
            merges: linker.merge_count(),
            regions: accumulated.regions.len(),
            ..StageCounts::default()
        };
        let mut blobs = Vec::new();
        let mut rejected = Rejected::default();
        for region in accumulated.regions {
            if restrictions.accepts(&region) {
                let links = graph
                    .as_ref()
                    .and_then(|g| g.links(region.id()).cloned());
                blobs.push(Blob::new(region, connectivity, links));
            } else {
                rejected.count += 1;
                rejected.pixels += region.size();
            }
        }
        timings.push_since("filter", filter_start);

        counts.accepted = blobs.len();
        counts.rejected = rejected.count;
        counts.rejected_pixels = rejected.pixels;
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "RegionDetector: scanlines={} parts={} merges={} regions={} accepted={} rejected={} total={:.3}ms",
            counts.scanlines,
            counts.parts,
            counts.merges,
            counts.regions,
            counts.accepted,
            counts.rejected,
            timings.total_ms
        );

        Detection {
            blobs,
            rejected,
            graph,
            report: DetectionReport {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    channels: image.channels,
                    bands,
                },
                timings,
                counts,
            },
        }
    }
}
