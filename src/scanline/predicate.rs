use crate::error::RegionError;
use crate::image::Pixel;
use serde::{Deserialize, Serialize};

/// Region value assigned to runs produced by the thresholding predicates.
pub const FOREGROUND: i32 = 255;

/// Inclusive value band on one image plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBand {
    pub channel: usize,
    pub min: i32,
    pub max: i32,
}

impl ChannelBand {
    #[inline]
    pub fn matches(&self, v: i32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Strategy deciding which pixels form runs and which runs may be joined.
///
/// Every pixel is mapped to an optional key. Adjacent pixels (and overlapping
/// runs of adjacent rows) belong together iff both keys are `Some` and equal;
/// the key becomes the run's and the region's value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PixelPredicate {
    /// Label every pixel with its own value (generic connected components).
    #[default]
    EqualRun,
    /// Foreground is `min <= v <= max`; background pixels produce no runs.
    ValueBand { min: i32, max: i32 },
    /// Multi-plane threshold: a pixel is foreground when every band matches.
    AllOf { bands: Vec<ChannelBand> },
}

impl PixelPredicate {
    pub fn validate(&self) -> Result<(), RegionError> {
        match self {
            Self::EqualRun => Ok(()),
            Self::ValueBand { min, max } if min > max => Err(RegionError::invalid(format!(
                "value band [{min}, {max}] is empty"
            ))),
            Self::ValueBand { .. } => Ok(()),
            Self::AllOf { bands } if bands.is_empty() => {
                Err(RegionError::invalid("channel threshold without bands"))
            }
            Self::AllOf { bands } => match bands.iter().find(|b| b.min > b.max) {
                Some(b) => Err(RegionError::invalid(format!(
                    "band [{}, {}] on channel {} is empty",
                    b.min, b.max, b.channel
                ))),
                None => Ok(()),
            },
        }
    }

    /// Number of leading planes the predicate reads.
    pub fn required_channels(&self) -> usize {
        match self {
            Self::EqualRun | Self::ValueBand { .. } => 1,
            Self::AllOf { bands } => bands.iter().map(|b| b.channel + 1).max().unwrap_or(1),
        }
    }

    /// Key of pixel `x`; `rows[c]` is the current row of plane `c`.
    #[inline]
    pub fn key<T: Pixel>(&self, rows: &[&[T]], x: usize) -> Option<i32> {
        match self {
            Self::EqualRun => Some(rows[0][x].value()),
            Self::ValueBand { min, max } => {
                let v = rows[0][x].value();
                (v >= *min && v <= *max).then_some(FOREGROUND)
            }
            Self::AllOf { bands } => bands
                .iter()
                .all(|b| b.matches(rows[b.channel][x].value()))
                .then_some(FOREGROUND),
        }
    }

    /// Whether two keyed runs may be linked.
    #[inline]
    pub fn matches(&self, a: i32, b: i32) -> bool {
        a == b
    }
}
