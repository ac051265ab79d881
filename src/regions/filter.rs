use super::Region;
use crate::error::RegionError;
use serde::{Deserialize, Serialize};

/// Size and value window a region must fall into to be exposed.
///
/// All bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Restrictions {
    pub min_size: usize,
    pub max_size: usize,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for Restrictions {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: 1_000_000,
            min_value: 0,
            max_value: 255,
        }
    }
}

impl Restrictions {
    pub fn new(
        min_size: usize,
        max_size: usize,
        min_value: i32,
        max_value: i32,
    ) -> Result<Self, RegionError> {
        let r = Self {
            min_size,
            max_size,
            min_value,
            max_value,
        };
        r.validate()?;
        Ok(r)
    }

    /// Accept everything.
    pub fn unrestricted() -> Self {
        Self {
            min_size: 0,
            max_size: usize::MAX,
            min_value: i32::MIN,
            max_value: i32::MAX,
        }
    }

    pub fn validate(&self) -> Result<(), RegionError> {
        if self.min_size > self.max_size {
            return Err(RegionError::invalid(format!(
                "size range [{}, {}] is empty",
                self.min_size, self.max_size
            )));
        }
        if self.min_value > self.max_value {
            return Err(RegionError::invalid(format!(
                "value range [{}, {}] is empty",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn accepts(&self, region: &Region) -> bool {
        accept(region, self)
    }
}

/// Whether `region` lies inside the size and value window.
#[inline]
pub fn accept(region: &Region, restrictions: &Restrictions) -> bool {
    let size = region.size();
    let value = region.value();
    size >= restrictions.min_size
        && size <= restrictions.max_size
        && value >= restrictions.min_value
        && value <= restrictions.max_value
}
