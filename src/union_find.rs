/// Union-Find (Disjoint Sets) forest used to detect cycle-forming edges
use crate::error::{non_negative, Error, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Create a new DisjointSet with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        DisjointSet {
            parent,
            rank,
            sets: n,
        }
    }

    /// Create a DisjointSet from a signed element count
    pub fn try_new(n: i64) -> Result<Self> {
        Ok(Self::new(non_negative("element count", n)?))
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently represented
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    /// Find the root of element x with path compression
    ///
    /// Two passes: walk up to the root, then walk the same path again
    /// pointing every node straight at the root. No recursion, so chains
    /// of any length are fine.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Union two sets containing x and y
    ///
    /// Returns `true` if two distinct sets were merged, `false` if x and y
    /// already shared a root.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        // Union by rank; ties hang y's root under x's root
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        self.sets -= 1;

        Ok(true)
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Get all sets as groups of indices, ordered by their smallest member
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut slot_of_root = vec![usize::MAX; n];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.sets);

        for i in 0..n {
            let root = self.root(i);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = groups.len();
                groups.push(Vec::new());
            }
            groups[slot_of_root[root]].push(i);
        }

        groups
    }
}
