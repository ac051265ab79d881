//! Borrowed planar image view.
//!
//! Planes are stored back to back: plane `c`, row `y` starts at
//! `c * stride * h + y * stride`. Single-plane images are the common case.
use super::{ImageView, Pixel};
use crate::error::RegionError;

#[derive(Clone, Copy, Debug)]
pub struct ImageRef<'a, T> {
    pub w: usize,
    pub h: usize,
    /// Elements between consecutive rows of one plane.
    pub stride: usize,
    pub channels: usize,
    pub data: &'a [T],
}

/// 8-bit single or multi plane view.
pub type ImageU8<'a> = ImageRef<'a, u8>;

impl<'a, T: Pixel> ImageRef<'a, T> {
    /// Tightly packed single-plane view.
    pub fn new(w: usize, h: usize, data: &'a [T]) -> Self {
        Self {
            w,
            h,
            stride: w,
            channels: 1,
            data,
        }
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Tightly packed planar view with `channels` planes.
    pub fn planar(w: usize, h: usize, channels: usize, data: &'a [T]) -> Self {
        Self {
            w,
            h,
            stride: w,
            channels,
            data,
        }
    }

    /// Check dimensions, stride and buffer length against each other.
    pub fn validate(&self) -> Result<(), RegionError> {
        if self.w == 0 || self.h == 0 {
            return Err(RegionError::invalid(format!(
                "zero-dimension image {}x{}",
                self.w, self.h
            )));
        }
        if self.channels == 0 {
            return Err(RegionError::invalid("image has no channels"));
        }
        if self.stride < self.w {
            return Err(RegionError::invalid(format!(
                "stride {} smaller than width {}",
                self.stride, self.w
            )));
        }
        let needed = self
            .stride
            .checked_mul(self.h)
            .and_then(|plane| plane.checked_mul(self.channels - 1))
            .and_then(|planes| planes.checked_add((self.h - 1).checked_mul(self.stride)?))
            .and_then(|offset| offset.checked_add(self.w))
            .ok_or_else(|| RegionError::invalid("image dimensions overflow"))?;
        if self.data.len() < needed {
            return Err(RegionError::invalid(format!(
                "buffer holds {} elements, {} required",
                self.data.len(),
                needed
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn channel_row(&self, channel: usize, y: usize) -> &'a [T] {
        let start = channel * self.stride * self.h + y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    /// View of a single plane.
    pub fn plane(&self, channel: usize) -> ImageRef<'a, T> {
        let start = channel * self.stride * self.h;
        ImageRef {
            w: self.w,
            h: self.h,
            stride: self.stride,
            channels: 1,
            data: &self.data[start..],
        }
    }
}

impl<'a, T: Pixel> ImageView for ImageRef<'a, T> {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        self.channel_row(0, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_buffers_and_empty_images() {
        let data = vec![0u8; 10];
        assert!(ImageRef::new(0, 4, &data).validate().is_err());
        assert!(ImageRef::new(4, 3, &data).validate().is_err());
        assert!(ImageRef::new(4, 2, &data).with_stride(3).validate().is_err());
        assert!(ImageRef::new(5, 2, &data).validate().is_ok());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let data = [0u8; 16];
        let tall = ImageRef::new(1, (1usize << 61) + 1, &data).with_stride(8);
        assert_eq!(
            tall.validate(),
            Err(RegionError::invalid("image dimensions overflow"))
        );
        let many = ImageRef::planar(4, 4, usize::MAX, &data);
        assert!(matches!(many.validate(), Err(RegionError::InvalidInput(_))));
    }

    #[test]
    fn padded_last_row_is_accepted() {
        // stride 4, width 3: the last row needs no trailing padding
        let data = vec![1u8; 4 + 3];
        let img = ImageRef::new(3, 2, &data).with_stride(4);
        assert!(img.validate().is_ok());
        assert_eq!(img.rows().count(), 2);
        assert_eq!(img.row(1).len(), 3);
    }

    #[test]
    fn planes_are_addressed_back_to_back() {
        let data: Vec<u8> = (0..12).collect();
        let img = ImageRef::planar(3, 2, 2, &data);
        assert_eq!(img.channel_row(1, 0), &[6, 7, 8]);
        assert_eq!(img.plane(1).get(2, 1), 11);
    }
}
