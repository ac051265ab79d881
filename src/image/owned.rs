//! Owned planar image in row-major layout (stride == width).
//!
//! Used for synthetic inputs and as the render target of
//! [`Blob::draw_to`](crate::blob::Blob::draw_to).
use super::{ImageRef, ImageView, ImageViewMut, Pixel};
use crate::error::RegionError;

#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    pub channels: usize,
    /// Backing storage, planes back to back
    pub data: Vec<T>,
}

impl<T: Pixel> Image<T> {
    /// Single-plane image filled with `fill`.
    pub fn new(w: usize, h: usize, fill: T) -> Self {
        Self {
            w,
            h,
            channels: 1,
            data: vec![fill; w * h],
        }
    }

    pub fn with_channels(w: usize, h: usize, channels: usize, fill: T) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![fill; w * h * channels],
        }
    }

    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self, RegionError> {
        if data.len() != w * h {
            return Err(RegionError::invalid(format!(
                "expected {} elements for {}x{}, got {}",
                w * h,
                w,
                h,
                data.len()
            )));
        }
        Ok(Self {
            w,
            h,
            channels: 1,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) of plane `c` to a linear index into `data`.
    pub fn idx(&self, c: usize, x: usize, y: usize) -> usize {
        c * self.w * self.h + y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(0, x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(0, x, y);
        self.data[i] = v;
    }
    #[inline]
    pub fn set_channel(&mut self, c: usize, x: usize, y: usize, v: T) {
        let i = self.idx(c, x, y);
        self.data[i] = v;
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)` of plane 0.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, v: T) {
        for y in y0..y1.min(self.h) {
            let row = self.row_mut(y);
            let end = x1.min(row.len());
            if x0 < end {
                row[x0..end].fill(v);
            }
        }
    }

    pub fn as_ref(&self) -> ImageRef<'_, T> {
        ImageRef::planar(self.w, self.h, self.channels, &self.data)
    }
}

impl<T: Pixel> ImageView for Image<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl<T: Pixel> ImageViewMut for Image<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_clips_to_image() {
        let mut img = Image::new(4, 3, 0u8);
        img.fill_rect(2, 1, 10, 10, 7);
        assert_eq!(img.row(0), &[0, 0, 0, 0]);
        assert_eq!(img.row(1), &[0, 0, 7, 7]);
        assert_eq!(img.row(2), &[0, 0, 7, 7]);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Image::from_vec(2, 2, vec![0u8; 3]).is_err());
        assert_eq!(Image::from_vec(2, 2, vec![1u8; 4]).map(|i| i.get(1, 1)), Ok(1));
    }
}
