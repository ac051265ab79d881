//! Accepted regions with lazily derived features.
//!
//! A [`Blob`] owns its [`Region`] and computes the expensive features on first
//! access: principal axes, boundary pixels, the ordered outer contour and its
//! thinned form, the contour length and the form factor. Each of them is
//! cached in a `OnceCell`, so repeated calls are free and always return the
//! same data.
//!
//! Graph accessors are only backed by data when the detector ran with
//! `create_graph`; otherwise they report [`RegionError::NoGraph`].
//!
//! See also
//! - `boundary` for the tracing and length estimation rules.
//! - `pca` for the closed-form axis decomposition.

mod boundary;
pub mod pca;

pub use pca::PcaInfo;

use crate::error::RegionError;
use crate::geometry::{Point, Rect};
use crate::graph::GraphLinks;
use crate::image::{Image, ImageViewMut, Pixel};
use crate::regions::{Region, RegionId};
use crate::scanline::{Connectivity, Scanline};
use boundary::RegionMask;
use nalgebra::Point2;
use std::cell::OnceCell;

/// Accepted region handle.
#[derive(Clone, Debug)]
pub struct Blob {
    region: Region,
    connectivity: Connectivity,
    graph: Option<GraphLinks>,
    pca: OnceCell<PcaInfo>,
    boundary: OnceCell<Vec<Point>>,
    contour: OnceCell<Vec<Point>>,
    thinned: OnceCell<Vec<Point>>,
    boundary_length: OnceCell<f32>,
}

impl Blob {
    pub fn new(region: Region, connectivity: Connectivity, graph: Option<GraphLinks>) -> Self {
        Self {
            region,
            connectivity,
            graph,
            pca: OnceCell::new(),
            boundary: OnceCell::new(),
            contour: OnceCell::new(),
            thinned: OnceCell::new(),
            boundary_length: OnceCell::new(),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn id(&self) -> RegionId {
        self.region.id()
    }

    pub fn value(&self) -> i32 {
        self.region.value()
    }

    pub fn size(&self) -> usize {
        self.region.size()
    }

    pub fn bounding_box(&self) -> Rect {
        self.region.bounding_box()
    }

    /// Centre of gravity in pixel-centre coordinates.
    pub fn cog(&self) -> Point2<f32> {
        let c = self.region.centroid();
        Point2::new(c.x as f32, c.y as f32)
    }

    /// Pixel containing the centre of gravity.
    pub fn cog_rounded(&self) -> (i32, i32) {
        let c = self.region.centroid();
        (c.x.floor() as i32, c.y.floor() as i32)
    }

    pub fn pca(&self) -> &PcaInfo {
        self.pca.get_or_init(|| {
            PcaInfo::from_covariance(&self.region.covariance(), self.region.centroid())
        })
    }

    pub fn scanlines(&self) -> &[Scanline] {
        self.region.scanlines()
    }

    /// Member pixels in raster order. The iterator can be recreated at will.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + '_ {
        self.region.scanlines().iter().flat_map(|s| {
            let y = s.y as i32;
            (s.x..s.xend).map(move |x| Point::new(x as i32, y))
        })
    }

    pub fn contains(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if !self.region.bounding_box().contains(x, y) {
            return false;
        }
        let runs = self.region.scanlines();
        // runs are sorted by row, then column
        let i = runs.partition_point(|s| (s.y, s.xend) <= (y, x));
        runs.get(i).is_some_and(|s| s.contains(x, y))
    }

    fn mask(&self) -> RegionMask {
        RegionMask::new(self.region.bounding_box(), self.region.scanlines())
    }

    /// Members with a 4-neighbour outside the region, raster order.
    pub fn boundary(&self) -> &[Point] {
        self.boundary
            .get_or_init(|| boundary::boundary_pixels(&self.mask(), self.region.scanlines()))
    }

    /// Upper-left member pixel, where contour tracing starts.
    pub fn upper_left(&self) -> Point {
        // the first run is in the top row and leftmost there
        self.region
            .scanlines()
            .first()
            .map(|s| Point::new(s.x as i32, s.y as i32))
            .unwrap_or_default()
    }

    /// Ordered outer contour, clockwise from the upper-left pixel.
    pub fn contour(&self) -> &[Point] {
        self.contour.get_or_init(|| {
            boundary::trace_contour(
                &self.mask(),
                self.upper_left(),
                self.size(),
                self.connectivity,
            )
        })
    }

    /// Contour without points that are redundant for an 8-connected chain.
    pub fn thinned_contour(&self) -> &[Point] {
        self.thinned
            .get_or_init(|| boundary::thin_contour(self.contour()))
    }

    /// Slope-aware length estimate of the outer contour.
    pub fn boundary_length(&self) -> f32 {
        *self
            .boundary_length
            .get_or_init(|| boundary::contour_length(self.thinned_contour()))
    }

    /// `L^2 / (4 pi n)`: about 1 for discs, larger for elongated or frayed
    /// shapes. NaN when the region has no measurable boundary.
    pub fn form_factor(&self) -> f32 {
        let l = self.boundary_length();
        let n = self.size() as f32;
        if n == 0.0 || l == 0.0 {
            return f32::NAN;
        }
        l * l / (4.0 * std::f32::consts::PI * n)
    }

    /// Paint the member pixels into plane 0 of `image`, clipped to its size.
    pub fn draw_to<T: Pixel>(&self, image: &mut Image<T>, value: T) {
        let (w, h) = (image.w, image.h);
        for s in self.region.scanlines() {
            if s.y >= h || s.x >= w {
                continue;
            }
            image.row_mut(s.y)[s.x..s.xend.min(w)].fill(value);
        }
    }

    fn links(&self) -> Result<&GraphLinks, RegionError> {
        self.graph.as_ref().ok_or(RegionError::NoGraph)
    }

    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph_links(&self) -> Option<&GraphLinks> {
        self.graph.as_ref()
    }

    /// Ids of the regions sharing an edge with this one.
    pub fn neighbours(&self) -> Result<&[RegionId], RegionError> {
        Ok(&self.links()?.neighbours)
    }

    /// Whether the region touches the image border.
    pub fn is_border(&self) -> Result<bool, RegionError> {
        Ok(self.links()?.is_border)
    }

    /// Regions directly enclosed by this one.
    pub fn sub_regions(&self) -> Result<&[RegionId], RegionError> {
        Ok(&self.links()?.sub_regions)
    }

    /// Enclosing region, if any.
    pub fn parent(&self) -> Result<Option<RegionId>, RegionError> {
        Ok(self.links()?.parent)
    }
}
