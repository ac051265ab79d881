//! Boundary extraction for a single region.
//!
//! All queries run against a [`RegionMask`], a bitmap over the region's
//! bounding box filled from its scanlines. Pixels outside the box (including
//! positions outside the image) are never members.
//!
//! Notes
//! - `boundary_pixels` returns every member with a 4-neighbour outside the
//!   region, in raster order. Hole rims are included.
//! - `trace_contour` follows only the outer rim. It starts at the upper-left
//!   pixel with an upward search and stops once the second contour pixel is
//!   re-entered with the same search direction. Four-connected regions are
//!   traced with the 4-neighbourhood, eight-connected ones with the Moore
//!   neighbourhood so that diagonal bridges are crossed.
//! - `thin_contour` drops every contour point whose successor is still an
//!   8-neighbour of the last kept point.
//! - `contour_length` weights each thinned point by the number of diagonal
//!   steps touching it: 1, `1/cos(atan(0.5))` or `sqrt(2)`.
//!
//! Complexity
//! - Mask construction and `boundary_pixels` are O(bbox area).
//! - Tracing visits each rim pixel at most four times.
use crate::geometry::{Point, Rect};
use crate::scanline::{Connectivity, Scanline};

const DIRS4: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIRS8: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Membership bitmap over a bounding box.
pub(crate) struct RegionMask {
    bbox: Rect,
    bits: Vec<bool>,
}

impl RegionMask {
    pub(crate) fn new(bbox: Rect, scanlines: &[Scanline]) -> Self {
        let w = bbox.width();
        let mut bits = vec![false; w * bbox.height()];
        for s in scanlines {
            let row = (s.y - bbox.y0) * w;
            bits[row + s.x - bbox.x0..row + s.xend - bbox.x0].fill(true);
        }
        Self { bbox, bits }
    }

    #[inline]
    pub(crate) fn contains(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if !self.bbox.contains(x, y) {
            return false;
        }
        self.bits[(y - self.bbox.y0) * self.bbox.width() + x - self.bbox.x0]
    }
}

/// Members with at least one 4-neighbour outside the region, raster order.
pub(crate) fn boundary_pixels(mask: &RegionMask, scanlines: &[Scanline]) -> Vec<Point> {
    let mut out = Vec::new();
    for s in scanlines {
        let y = s.y as i32;
        for x in s.x..s.xend {
            let x = x as i32;
            let interior = DIRS4
                .iter()
                .all(|&(dx, dy)| mask.contains(x + dx, y + dy));
            if !interior {
                out.push(Point::new(x, y));
            }
        }
    }
    out
}

/// Neighbourhood walked by the tracer.
struct Walk {
    dirs: &'static [(i32, i32)],
}

impl Walk {
    fn for_connectivity(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => Self { dirs: &DIRS4 },
            Connectivity::Eight => Self { dirs: &DIRS8 },
        }
    }

    /// First search direction after a step in direction `d`.
    #[inline]
    fn restart(&self, d: usize) -> usize {
        let n = self.dirs.len();
        if n == 4 {
            (d + 3) % 4
        } else {
            (d + 6 - (d & 1)) % 8
        }
    }

    /// Clockwise search for the next member starting at direction `from`.
    fn step(&self, mask: &RegionMask, p: Point, from: usize) -> Option<(Point, usize)> {
        let n = self.dirs.len();
        (0..n).map(|k| (from + k) % n).find_map(|d| {
            let (dx, dy) = self.dirs[d];
            let q = Point::new(p.x + dx, p.y + dy);
            mask.contains(q.x, q.y).then_some((q, d))
        })
    }
}

/// Ordered outer contour starting at `start`, the upper-left member.
pub(crate) fn trace_contour(
    mask: &RegionMask,
    start: Point,
    size: usize,
    connectivity: Connectivity,
) -> Vec<Point> {
    let mut contour = vec![start];
    if size < 2 {
        return contour;
    }
    let walk = Walk::for_connectivity(connectivity);
    let Some((second, d)) = walk.step(mask, start, 0) else {
        return contour;
    };
    let stop_dir = walk.restart(d);

    let mut p = second;
    let mut search = stop_dir;
    // each pixel can be entered from at most every direction once
    let cap = walk.dirs.len() * size + 2;
    for _ in 0..cap {
        contour.push(p);
        let Some((next, d)) = walk.step(mask, p, search) else {
            break;
        };
        p = next;
        search = walk.restart(d);
        if p == second && search == stop_dir {
            // the last point pushed is `start` again
            contour.pop();
            break;
        }
    }
    contour
}

/// Drop contour points that can be skipped without breaking 8-adjacency.
pub(crate) fn thin_contour(contour: &[Point]) -> Vec<Point> {
    let n = contour.len();
    if n < 3 {
        return contour.to_vec();
    }
    let mut thinned = Vec::with_capacity(n);
    let mut last = contour[0];
    thinned.push(last);
    let mut i = 2;
    while i < n {
        if !contour[i].is_adjacent8(&last) {
            i -= 1;
        }
        last = contour[i];
        thinned.push(last);
        i += 2;
    }
    if !thinned[0].is_adjacent8(&last) {
        thinned.push(contour[n - 1]);
    }
    thinned
}

/// Slope-aware length of a closed, thinned contour.
pub(crate) fn contour_length(thinned: &[Point]) -> f32 {
    let n = thinned.len();
    if n < 2 {
        return 0.0;
    }
    let weights = [
        1.0f32,
        1.0 / 0.5f32.atan().cos(),
        std::f32::consts::SQRT_2,
    ];
    let diagonal = |a: Point, b: Point| a.x != b.x && a.y != b.y;
    (0..n)
        .map(|i| {
            let pre = thinned[(i + n - 1) % n];
            let cur = thinned[i];
            let post = thinned[(i + 1) % n];
            weights[diagonal(pre, cur) as usize + diagonal(cur, post) as usize]
        })
        .sum()
}
