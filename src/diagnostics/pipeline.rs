use super::TimingBreakdown;
use serde::Serialize;

/// Run summary returned with every [`Detection`](crate::Detection).
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub counts: StageCounts,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Number of horizontal bands the image was split into (1 when sequential).
    pub bands: usize,
}

/// Object counts after each stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    pub scanlines: usize,
    /// Parts opened by the linker, merged ones included.
    pub parts: usize,
    pub merges: usize,
    pub regions: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub rejected_pixels: usize,
}

impl DetectionReport {
    /// One-line human readable summary used by the tools.
    pub fn summary(&self) -> String {
        format!(
            "{}x{} ({} band(s)): {} scanlines, {} parts, {} merges, {} regions, {} accepted, {} rejected in {:.3} ms",
            self.input.width,
            self.input.height,
            self.input.bands,
            self.counts.scanlines,
            self.counts.parts,
            self.counts.merges,
            self.counts.regions,
            self.counts.accepted,
            self.counts.rejected,
            self.timings.total_ms
        )
    }
}
