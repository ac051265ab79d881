//! Region adjacency graph.
//!
//! Built once per detection over all regions, before filtering, so ids refer
//! to the unfiltered numbering.
//!
//! Notes
//! - Two regions are neighbours when one of their runs touch: directly
//!   consecutive runs of a row (`a.xend == b.x`) or runs of adjacent rows that
//!   overlap under the detector's connectivity.
//! - A region is a border region when it owns a pixel on the image border.
//! - `B` is a direct sub-region of `A` when `B` is not a border region and
//!   either `A` is its only neighbour, or a depth-first walk from `B` that
//!   never enters `A` meets neither a border region nor a region whose bounding
//!   box sticks out of `A`'s. Only regions with more than one neighbour can
//!   have sub-regions.
//!
//! Complexity
//! - Adjacency is O(scanlines log scanlines) for the sort and dedup.
//! - Containment walks are bounded by the number of regions per candidate.
use crate::geometry::Rect;
use crate::regions::{Region, RegionId};
use crate::scanline::{Connectivity, RunLengthEncoder};
use serde::Serialize;

/// Graph data attached to one region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLinks {
    pub neighbours: Vec<RegionId>,
    pub is_border: bool,
    pub sub_regions: Vec<RegionId>,
    pub parent: Option<RegionId>,
}

/// Adjacency and containment for every region of a detection run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegionGraph {
    links: Vec<GraphLinks>,
}

impl RegionGraph {
    pub fn build(
        rle: &RunLengthEncoder,
        region_of_run: &[u32],
        regions: &[Region],
        width: usize,
        connectivity: Connectivity,
    ) -> Self {
        let mut links = vec![GraphLinks::default(); regions.len()];
        let runs = rle.runs();
        let rows = rle.rows();
        let mut pairs: Vec<(u32, u32)> = Vec::new();
        let mut push_pair = |a: u32, b: u32| {
            if a != b {
                pairs.push((a, b));
                pairs.push((b, a));
            }
        };

        for y in rows.clone() {
            let cur = rle.row_range(y);
            let on_edge_row = y == rows.start || y + 1 == rows.end;
            for i in cur.clone() {
                let s = runs[i];
                let r = region_of_run[i];
                if on_edge_row || s.x == 0 || s.xend == width {
                    links[r as usize].is_border = true;
                }
                if i + 1 < cur.end && runs[i + 1].x == s.xend {
                    push_pair(r, region_of_run[i + 1]);
                }
            }
            if y == rows.start {
                continue;
            }
            let prev = rle.row_range(y - 1);
            let mut j = prev.start;
            for i in cur {
                let s = runs[i];
                while j < prev.end && runs[j].xend + connectivity.slack() <= s.x {
                    j += 1;
                }
                let mut k = j;
                while k < prev.end && runs[k].x < s.xend + connectivity.slack() {
                    push_pair(region_of_run[i], region_of_run[k]);
                    k += 1;
                }
            }
        }

        pairs.sort_unstable();
        pairs.dedup();
        for (a, b) in pairs {
            links[a as usize].neighbours.push(RegionId(b));
        }

        let mut graph = Self { links };
        graph.resolve_containment(regions);
        graph
    }

    fn resolve_containment(&mut self, regions: &[Region]) {
        let mut walk = Walk {
            visited: vec![u32::MAX; self.links.len()],
            stack: Vec::new(),
            stamp: 0,
        };
        for outer in 0..self.links.len() {
            if self.links[outer].neighbours.len() < 2 {
                continue;
            }
            let outer_id = RegionId(outer as u32);
            let bbox = regions[outer].bounding_box();
            let children: Vec<RegionId> = self.links[outer]
                .neighbours
                .iter()
                .copied()
                .filter(|&inner| {
                    let n = &self.links[inner.index()];
                    !n.is_border
                        && (n.neighbours.len() == 1
                            || !walk.escapes(&self.links, regions, outer_id, inner, &bbox))
                })
                .collect();
            for &child in &children {
                self.links[child.index()].parent = Some(outer_id);
            }
            self.links[outer].sub_regions = children;
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self, id: RegionId) -> Option<&GraphLinks> {
        self.links.get(id.index())
    }

    /// All regions nested below `id`, direct children first.
    pub fn descendants(&self, id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut seen = vec![false; self.links.len()];
        let mut queue = std::collections::VecDeque::from([id]);
        while let Some(r) = queue.pop_front() {
            let Some(l) = self.links.get(r.index()) else {
                continue;
            };
            for &c in &l.sub_regions {
                if !seen[c.index()] {
                    seen[c.index()] = true;
                    out.push(c);
                    queue.push_back(c);
                }
            }
        }
        out
    }

    /// Chain of parents from the direct parent up to the outermost region.
    pub fn ancestors(&self, id: RegionId) -> Vec<RegionId> {
        let mut out = Vec::new();
        let mut cur = self.links(id).and_then(|l| l.parent);
        while let Some(p) = cur {
            if out.contains(&p) || p == id {
                break;
            }
            out.push(p);
            cur = self.links(p).and_then(|l| l.parent);
        }
        out
    }
}

/// Scratch state of the containment walk, reused across candidates.
struct Walk {
    visited: Vec<u32>,
    stack: Vec<RegionId>,
    stamp: u32,
}

impl Walk {
    /// Whether a walk from `inner` avoiding `outer` reaches the border or
    /// leaves `bbox`.
    fn escapes(
        &mut self,
        links: &[GraphLinks],
        regions: &[Region],
        outer: RegionId,
        inner: RegionId,
        bbox: &Rect,
    ) -> bool {
        self.stamp = self.stamp.wrapping_add(1);
        let stamp = self.stamp;
        self.stack.clear();
        self.visited[outer.index()] = stamp;
        self.visited[inner.index()] = stamp;
        self.stack.push(inner);
        while let Some(r) = self.stack.pop() {
            if links[r.index()].is_border || !bbox.contains_rect(&regions[r.index()].bounding_box()) {
                return true;
            }
            for &n in &links[r.index()].neighbours {
                if self.visited[n.index()] != stamp {
                    self.visited[n.index()] = stamp;
                    self.stack.push(n);
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Image;
    use crate::linker::RegionLinker;
    use crate::regions::accumulate;
    use crate::scanline::PixelPredicate;

    fn graph_of(img: &Image<u8>) -> (Vec<Region>, RegionGraph) {
        let mut rle = RunLengthEncoder::new();
        rle.encode(&img.as_ref(), &PixelPredicate::EqualRun);
        let mut linker = RegionLinker::new(Connectivity::Four);
        linker.link(&rle);
        let acc = accumulate(&rle, &mut linker);
        let graph = RegionGraph::build(
            &rle,
            &acc.region_of_run,
            &acc.regions,
            img.w,
            Connectivity::Four,
        );
        (acc.regions, graph)
    }

    #[test]
    fn nested_squares_form_a_chain() {
        // background 0, ring 1, hole 2 inside the ring
        let mut img = Image::new(12, 12, 0u8);
        img.fill_rect(2, 2, 10, 10, 1);
        img.fill_rect(4, 4, 8, 8, 2);
        let (regions, graph) = graph_of(&img);
        assert_eq!(regions.len(), 3);
        let bg = RegionId(0);
        let ring = RegionId(1);
        let hole = RegionId(2);
        assert_eq!(regions[2].value(), 2);

        assert!(graph.links(bg).unwrap().is_border);
        assert!(!graph.links(ring).unwrap().is_border);
        assert_eq!(graph.links(bg).unwrap().neighbours, vec![ring]);
        assert_eq!(graph.links(ring).unwrap().neighbours, vec![bg, hole]);

        assert_eq!(graph.links(ring).unwrap().sub_regions, vec![hole]);
        assert_eq!(graph.links(hole).unwrap().parent, Some(ring));
        // the background has a single neighbour and so no sub-regions
        assert!(graph.links(bg).unwrap().sub_regions.is_empty());
        assert_eq!(graph.links(ring).unwrap().parent, None);
        assert_eq!(graph.ancestors(hole), vec![ring]);
        assert_eq!(graph.descendants(ring), vec![hole]);
    }

    #[test]
    fn touching_the_border_prevents_containment() {
        let mut img = Image::new(10, 6, 0u8);
        img.fill_rect(0, 2, 4, 4, 1);
        img.fill_rect(6, 2, 8, 4, 2);
        let (_, graph) = graph_of(&img);
        let left = graph.links(RegionId(1)).unwrap();
        assert!(left.is_border);
        assert_eq!(left.parent, None);
        // the inner square is enclosed by the background only
        let right = graph.links(RegionId(2)).unwrap();
        assert!(!right.is_border);
        assert_eq!(right.neighbours, vec![RegionId(0)]);
        assert_eq!(right.parent, Some(RegionId(0)));
    }
}
