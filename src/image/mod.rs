//! Image buffers consumed by the region detector.
//!
//! - [`ImageRef`]: borrowed planar view with explicit row stride.
//! - [`Image`]: owned planar buffer used by tests, tools and label rendering.
//! - [`Pixel`]: integer pixel depths the detector can read.
pub mod io;
pub mod owned;
pub mod pixel;
pub mod traits;
pub mod view;

pub use self::owned::Image;
pub use self::pixel::Pixel;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::view::{ImageRef, ImageU8};
