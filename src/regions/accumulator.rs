use super::{Moments, Region, RegionId};
use crate::geometry::Rect;
use crate::scanline::Scanline;

/// Sum of `k` for `k = 0..=m` (zero for `m = -1`).
#[inline]
fn eval_sum(m: f64) -> f64 {
    m * (m + 1.0) * 0.5
}

/// Sum of `k^2` for `k = 0..=m` (zero for `m = -1`).
#[inline]
fn eval_sum_of_squares(m: f64) -> f64 {
    m * (m + 1.0) * (2.0 * m + 1.0) / 6.0
}

/// Streaming statistics of one region, fed run by run.
///
/// Pixel coordinates are taken at pixel centres (`x + 0.5`, `y + 0.5`); per
/// run the sums over `x` are evaluated in closed form.
pub(crate) struct RegionAccumulator {
    scanlines: Vec<Scanline>,
    size: usize,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
    bbox: Option<Rect>,
    boundary: usize,
}

impl RegionAccumulator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            scanlines: Vec::with_capacity(capacity),
            size: 0,
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xx: 0.0,
            sum_yy: 0.0,
            sum_xy: 0.0,
            bbox: None,
            boundary: 0,
        }
    }

    pub(crate) fn push(&mut self, s: Scanline, exposed_edges: u32) {
        let len = s.len();
        let n = len as f64;
        let first = s.x as f64 - 1.0;
        let last = s.xend as f64 - 1.0;
        let sum_k = eval_sum(last) - eval_sum(first);
        let sum_kk = eval_sum_of_squares(last) - eval_sum_of_squares(first);
        let sx = sum_k + 0.5 * n;
        let sxx = sum_kk + sum_k + 0.25 * n;
        let yc = s.y as f64 + 0.5;

        self.size += len;
        self.sum_x += sx;
        self.sum_y += n * yc;
        self.sum_xx += sxx;
        self.sum_yy += n * yc * yc;
        self.sum_xy += yc * sx;
        self.boundary += exposed_edges as usize;

        let run_box = Rect::new(s.x, s.y, s.xend, s.y + 1);
        self.bbox = Some(match self.bbox {
            Some(b) => b.union(&run_box),
            None => run_box,
        });
        self.scanlines.push(s);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.size
    }

    /// Freeze the statistics into an immutable region.
    pub(crate) fn finish(self, id: RegionId) -> Region {
        debug_assert!(self.size > 0, "finalized an empty region");
        let value = self.scanlines.first().map_or(0, |s| s.value);
        Region {
            id,
            value,
            bbox: self.bbox.unwrap_or_default(),
            moments: Moments {
                n: self.size,
                sum_x: self.sum_x,
                sum_y: self.sum_y,
                sum_xx: self.sum_xx,
                sum_yy: self.sum_yy,
                sum_xy: self.sum_xy,
            },
            boundary_len: self.boundary,
            scanlines: self.scanlines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(runs: &[Scanline]) -> (f64, f64, f64, f64, f64) {
        let (mut sx, mut sy, mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
        for s in runs {
            for x in s.x..s.xend {
                let xf = x as f64 + 0.5;
                let yf = s.y as f64 + 0.5;
                sx += xf;
                sy += yf;
                sxx += xf * xf;
                syy += yf * yf;
                sxy += xf * yf;
            }
        }
        (sx, sy, sxx, syy, sxy)
    }

    #[test]
    fn closed_form_sums_match_pixel_walk() {
        let runs = [
            Scanline { x: 0, y: 0, xend: 1, value: 3 },
            Scanline { x: 3, y: 1, xend: 9, value: 3 },
            Scanline { x: 17, y: 4, xend: 40, value: 3 },
        ];
        let mut acc = RegionAccumulator::with_capacity(runs.len());
        for s in runs {
            acc.push(s, 0);
        }
        assert_eq!(acc.len(), 1 + 6 + 23);
        let (sx, sy, sxx, syy, sxy) = brute_force(&runs);
        let region = acc.finish(RegionId(0));
        let m = region.moments();
        for (a, b) in [
            (m.sum_x, sx),
            (m.sum_y, sy),
            (m.sum_xx, sxx),
            (m.sum_yy, syy),
            (m.sum_xy, sxy),
        ] {
            assert!((a - b).abs() < 1e-6, "{a} != {b}");
        }
        assert_eq!(region.bounding_box(), Rect::new(0, 0, 40, 5));
        assert_eq!(region.value(), 3);
    }
}
