//! Band-parallel encoding and linking.
//!
//! Each band owns its encoder pool and union-find, so bands share nothing but
//! the read-only image. Joining them is left to
//! `DetectorWorkspace::merge_bands`, which runs sequentially.
use super::workspace::BandState;
use crate::image::{ImageRef, Pixel};
use crate::scanline::{Connectivity, PixelPredicate};
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Encode and link `ranges[i]` into `bands[i]` for every band.
pub(crate) fn run_bands<T: Pixel>(
    bands: &mut [BandState],
    ranges: &[Range<usize>],
    image: &ImageRef<'_, T>,
    predicate: &PixelPredicate,
    connectivity: Connectivity,
) {
    debug_assert_eq!(bands.len(), ranges.len());
    #[cfg(feature = "parallel")]
    {
        bands
            .par_iter_mut()
            .zip(ranges.par_iter())
            .for_each(|(band, rows)| band.run(image, predicate, connectivity, rows.clone()));
    }
    #[cfg(not(feature = "parallel"))]
    {
        bands
            .iter_mut()
            .zip(ranges.iter())
            .for_each(|(band, rows)| band.run(image, predicate, connectivity, rows.clone()));
    }
}
