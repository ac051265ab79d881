//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce a plain equal-value labelling: every maximal run of
//! identical pixel values is a scanline, 4-connectivity, no graph and the
//! classic size/value window `[0, 1e6] x [0, 255]`.

use crate::error::RegionError;
use crate::regions::Restrictions;
use crate::scanline::{Connectivity, PixelPredicate};
use serde::Deserialize;

/// Detector-wide options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorOptions {
    /// Which pixels form scanlines and which runs may join.
    pub predicate: PixelPredicate,
    /// Neighbourhood used when linking runs of adjacent rows.
    pub connectivity: Connectivity,
    /// Size and value window applied after accumulation.
    pub restrictions: Restrictions,
    /// Compute neighbours, border flags and containment for every region.
    pub create_graph: bool,
    /// Maximum number of rows a single call may scan. Larger images fail
    /// with [`RegionError::Incomplete`].
    pub row_budget: Option<usize>,
    /// Horizontal bands used by `detect_parallel` (>= 1).
    pub bands: usize,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            predicate: PixelPredicate::default(),
            connectivity: Connectivity::default(),
            restrictions: Restrictions::default(),
            create_graph: false,
            row_budget: None,
            bands: 4,
        }
    }
}

impl DetectorOptions {
    pub fn validate(&self) -> Result<(), RegionError> {
        self.predicate.validate()?;
        self.restrictions.validate()?;
        if self.bands == 0 {
            return Err(RegionError::invalid("bands must be at least 1"));
        }
        Ok(())
    }

    pub fn with_predicate(mut self, predicate: PixelPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn with_restrictions(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = restrictions;
        self
    }

    pub fn with_graph(mut self, create_graph: bool) -> Self {
        self.create_graph = create_graph;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let opts: DetectorOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DetectorOptions::default());
        assert_eq!(opts.restrictions.max_size, 1_000_000);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn parses_band_predicate_and_restrictions() {
        let json = r#"{
            "predicate": { "mode": "value-band", "min": 200, "max": 255 },
            "connectivity": "eight",
            "restrictions": { "minSize": 10, "maxSize": 500 },
            "createGraph": true,
            "rowBudget": 64
        }"#;
        let opts: DetectorOptions = serde_json::from_str(json).unwrap();
        assert_eq!(opts.predicate, PixelPredicate::ValueBand { min: 200, max: 255 });
        assert_eq!(opts.connectivity, Connectivity::Eight);
        assert_eq!(opts.restrictions.min_size, 10);
        assert_eq!(opts.restrictions.max_value, 255);
        assert!(opts.create_graph);
        assert_eq!(opts.row_budget, Some(64));
    }

    #[test]
    fn zero_bands_is_rejected() {
        let opts = DetectorOptions {
            bands: 0,
            ..DetectorOptions::default()
        };
        assert!(matches!(opts.validate(), Err(RegionError::InvalidInput(_))));
    }
}
