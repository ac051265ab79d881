use crate::blob::{Blob, PcaInfo};
use crate::geometry::Rect;
use crate::graph::GraphLinks;
use crate::regions::RegionId;
use serde::Serialize;

/// Serializable snapshot of an accepted blob and its derived features.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobDescriptor {
    pub id: RegionId,
    pub value: i32,
    pub size: usize,
    pub bbox: Rect,
    pub cog: [f32; 2],
    pub pca: PcaInfo,
    /// `None` for regions without a measurable boundary.
    pub form_factor: Option<f32>,
    pub boundary_length: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphLinks>,
}

impl BlobDescriptor {
    pub fn from_blob(blob: &Blob) -> Self {
        let cog = blob.cog();
        let ff = blob.form_factor();
        Self {
            id: blob.id(),
            value: blob.value(),
            size: blob.size(),
            bbox: blob.bounding_box(),
            cog: [cog.x, cog.y],
            pca: *blob.pca(),
            form_factor: (!ff.is_nan()).then_some(ff),
            boundary_length: blob.boundary_length(),
            graph: blob.graph_links().cloned(),
        }
    }
}
