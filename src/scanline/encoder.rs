use super::{PixelPredicate, Scanline};
use crate::image::{ImageRef, Pixel};
use std::ops::Range;

/// Append the maximal runs of one row to `out`.
///
/// `rows[c]` is row `y` of plane `c`; only as many planes as the predicate
/// requires need to be supplied.
pub fn extract_row<T: Pixel>(
    rows: &[&[T]],
    y: usize,
    predicate: &PixelPredicate,
    out: &mut Vec<Scanline>,
) {
    let width = rows.first().map_or(0, |r| r.len());
    let mut start = 0usize;
    let mut current: Option<i32> = None;
    for x in 0..width {
        let key = predicate.key(rows, x);
        if key != current {
            if let Some(value) = current {
                out.push(Scanline {
                    x: start,
                    y,
                    xend: x,
                    value,
                });
            }
            current = key;
            start = x;
        }
    }
    if let Some(value) = current {
        out.push(Scanline {
            x: start,
            y,
            xend: width,
            value,
        });
    }
}

/// Scanline pool for a contiguous band of rows.
///
/// Runs are stored row after row; `row_starts[i]..row_starts[i + 1]` indexes
/// the runs of row `first_row + i`. The pool is reused across calls.
#[derive(Clone, Debug, Default)]
pub struct RunLengthEncoder {
    runs: Vec<Scanline>,
    row_starts: Vec<usize>,
    first_row: usize,
}

impl RunLengthEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all runs but keep the allocations.
    pub fn reset(&mut self) {
        self.runs.clear();
        self.row_starts.clear();
        self.first_row = 0;
    }

    /// Encode every row of `image`.
    pub fn encode<T: Pixel>(&mut self, image: &ImageRef<'_, T>, predicate: &PixelPredicate) {
        self.encode_rows(image, predicate, 0..image.h);
    }

    /// Encode the rows `rows` of `image`, replacing the previous content.
    pub fn encode_rows<T: Pixel>(
        &mut self,
        image: &ImageRef<'_, T>,
        predicate: &PixelPredicate,
        rows: Range<usize>,
    ) {
        self.reset();
        self.first_row = rows.start;
        self.row_starts.push(0);
        let planes = predicate.required_channels().min(image.channels).max(1);
        let mut plane_rows: Vec<&[T]> = Vec::with_capacity(planes);
        for y in rows {
            plane_rows.clear();
            plane_rows.extend((0..planes).map(|c| image.channel_row(c, y)));
            extract_row(&plane_rows, y, predicate, &mut self.runs);
            self.row_starts.push(self.runs.len());
        }
    }

    /// Append the rows of `other`, which must start where this pool ends.
    pub fn append(&mut self, other: &RunLengthEncoder) {
        if self.row_starts.is_empty() {
            self.first_row = other.first_row;
            self.row_starts.push(0);
        }
        debug_assert_eq!(self.rows().end, other.first_row, "bands must be contiguous");
        let base = self.runs.len();
        self.runs.extend_from_slice(&other.runs);
        self.row_starts
            .extend(other.row_starts.iter().skip(1).map(|&s| s + base));
    }

    /// Absolute row indices covered by the pool.
    pub fn rows(&self) -> Range<usize> {
        self.first_row..self.first_row + self.row_count()
    }

    pub fn row_count(&self) -> usize {
        self.row_starts.len().saturating_sub(1)
    }

    /// Pool indices of the runs in absolute row `y`.
    #[inline]
    pub fn row_range(&self, y: usize) -> Range<usize> {
        let i = y - self.first_row;
        self.row_starts[i]..self.row_starts[i + 1]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Scanline] {
        &self.runs[self.row_range(y)]
    }

    pub fn runs(&self) -> &[Scanline] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
