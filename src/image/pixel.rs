/// Integer pixel depth readable by the detector.
///
/// Region values are carried as `i32`; floating point depths are not
/// supported since equal-value runs are ill-defined on them.
pub trait Pixel: Copy + PartialEq + Send + Sync + 'static {
    fn value(self) -> i32;

    /// Saturating conversion back from a region value.
    fn from_value(v: i32) -> Self;
}

macro_rules! impl_pixel {
    ($($t:ty),*) => {
        $(
            impl Pixel for $t {
                #[inline]
                fn value(self) -> i32 {
                    self as i32
                }

                #[inline]
                fn from_value(v: i32) -> Self {
                    v.clamp(<$t>::MIN as i32, <$t>::MAX as i32) as $t
                }
            }
        )*
    };
}

impl_pixel!(u8, i8, u16, i16);

impl Pixel for i32 {
    #[inline]
    fn value(self) -> i32 {
        self
    }

    #[inline]
    fn from_value(v: i32) -> Self {
        v
    }
}
