/// Disjoint-set forest over dense `u32` indices.
///
/// `find` uses path halving and `union` links by rank, so any sequence of
/// operations runs in amortized near-constant time per call.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.parent.clear();
        self.rank.clear();
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Create a singleton set and return its index.
    pub fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    pub fn find(&mut self, mut i: u32) -> u32 {
        while self.parent[i as usize] != i {
            let grand = self.parent[self.parent[i as usize] as usize];
            self.parent[i as usize] = grand;
            i = grand;
        }
        i
    }

    /// Merge the sets of `a` and `b`; returns the surviving root.
    pub fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        let (hi, lo) = if self.rank[ra as usize] >= self.rank[rb as usize] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[lo as usize] = hi;
        if self.rank[hi as usize] == self.rank[lo as usize] {
            self.rank[hi as usize] += 1;
        }
        hi
    }

    /// Append the sets of `other`, shifting its indices; returns the shift.
    pub fn append(&mut self, other: &UnionFind) -> u32 {
        let offset = self.parent.len() as u32;
        self.parent.extend(other.parent.iter().map(|&p| p + offset));
        self.rank.extend_from_slice(&other.rank);
        offset
    }
}
