/* =========================
 *   Union-Find (union by rank + path compression)
 * ========================= */
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// `n` 個の要素がそれぞれ別のグループに属している状態を作る
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 現在のグループ数
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// `x` の属するグループの代表を返す.
    /// 根を見つけた後, 経路上の全要素を根に直接つなぎ替える.
    pub fn find(&mut self, x: usize) -> usize {
        debug_assert!(x < self.len());
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    #[cfg(test)]
    fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// `x` と `y` のグループをマージする. 既に同じグループなら何もせず false.
    ///
    /// rank が同じときは y 側の根を x 側の根の下につなぎ, x 側の rank を 1 増やす.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.components -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.component_count(), 4);
        for v in 0..4 {
            assert_eq!(ds.find(v), v);
        }
        assert!(!ds.same(0, 1));
    }

    #[test]
    fn union_merges_and_is_idempotent() {
        let mut ds = DisjointSet::new(5);
        assert!(ds.union(0, 1));
        assert!(ds.union(3, 4));
        assert!(ds.same(0, 1));
        assert!(!ds.same(1, 3));
        assert_eq!(ds.component_count(), 3);

        assert!(!ds.union(1, 0));
        assert_eq!(ds.component_count(), 3);

        assert!(ds.union(1, 4));
        assert!(ds.same(0, 3));
        assert_eq!(ds.component_count(), 2);
    }

    #[test]
    fn tie_attaches_second_root_under_first() {
        let mut ds = DisjointSet::new(2);
        ds.union(0, 1);
        assert_eq!(ds.find(1), 0);
        assert_eq!(ds.rank[0], 1);
        assert_eq!(ds.rank[1], 0);
    }

    #[test]
    fn lower_rank_goes_under_higher_rank() {
        let mut ds = DisjointSet::new(3);
        ds.union(0, 1);
        // {2} (rank 0) joins {0,1} (rank 1) as child even though it is passed first
        ds.union(2, 0);
        assert_eq!(ds.find(2), 0);
        assert_eq!(ds.rank[0], 1);
    }

    #[test]
    fn find_compresses_path() {
        let mut ds = DisjointSet::new(4);
        // Build a chain 3 -> 2 -> 1 -> 0 by hand.
        ds.parent = vec![0, 0, 1, 2];
        assert_eq!(ds.find(3), 0);
        assert_eq!(ds.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn long_chain_does_not_overflow_stack() {
        let n = 200_000;
        let mut ds = DisjointSet::new(n);
        ds.parent = (0..n).map(|i| i.saturating_sub(1)).collect();
        assert_eq!(ds.find(n - 1), 0);
        assert_eq!(ds.find(n / 2), 0);
    }

    #[test]
    fn empty_set() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.component_count(), 0);
    }
}
