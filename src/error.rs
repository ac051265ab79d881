//! Error type shared by the detection pipeline.
use thiserror::Error;

/// Failures reported by [`RegionDetector`](crate::RegionDetector) and the
/// region accessors.
///
/// Structural problems abort the whole call; nothing partial is returned.
/// Per-region anomalies (e.g. a degenerate form factor) are not errors and
/// surface as sentinel values on the affected field instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Empty image, short buffer, bad stride, inverted restriction range or a
    /// scanline with `xend <= x`.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The predicate reads more planes than the image provides.
    #[error("predicate needs {required} channel(s) but the image has {available}")]
    UnsupportedChannels { required: usize, available: usize },
    /// The image has more rows than the configured row budget. The budget is
    /// checked before scanning, so `rows_processed` is 0 for such calls.
    #[error("row budget exhausted after {rows_processed} of {height} rows")]
    Incomplete { rows_processed: usize, height: usize },
    /// A region graph query was made on a detection run without `create_graph`.
    #[error("no region graph information available")]
    NoGraph,
}

impl RegionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
