//! Boyer–Myrvold edge-addition planarity test over a dense vertex index.
//!
//! - J. Boyer and W. Myrvold, "Stop minding your p's and q's: a simplified
//!   O(n) planar embedding algorithm", 1999.
//! - J. Boyer and W. Myrvold, "On the Cutting Edge: Simplified O(n) Planarity
//!   by Edge Addition", 2004.

use std::ops::Range;

use super::lists::{CyclicListPool, UndirectedCyclicListPool};

const UNSET: u32 = u32::MAX;

/// Compressed adjacency lists; both directions of every edge are stored
pub(super) struct Adjacency {
    head: Vec<u32>,
    link: Vec<u32>,
}

impl Adjacency {
    pub fn from_edges(n_verts: usize, edges: &[[u32; 2]]) -> Self {
        let mut head = vec![0u32; n_verts + 1];
        for &[u, v] in edges {
            head[u as usize] += 1;
            head[v as usize] += 1;
        }
        for i in 0..n_verts {
            head[i + 1] += head[i];
        }

        let mut link = vec![UNSET; head[n_verts] as usize];
        for &[u, v] in edges {
            head[u as usize] -= 1;
            link[head[u as usize] as usize] = v;
            head[v as usize] -= 1;
            link[head[v as usize] as usize] = u;
        }

        Self { head, link }
    }

    fn len(&self) -> usize {
        self.head.len() - 1
    }

    fn edge_range(&self, u: usize) -> Range<usize> {
        self.head[u] as usize..self.head[u + 1] as usize
    }
}

#[derive(Debug)]
struct DfsForest {
    parent: Vec<u32>,
    parent_edge: Vec<u32>,
    t_in: Vec<u32>,
    tour: Vec<u32>,

    // Lowest discovery time reachable through a subtree's back edges
    low: Vec<u32>,
    // Lowest discovery time reachable through a back edge of the vertex itself
    least_ancestor: Vec<u32>,

    order_by_low: Vec<u32>,
}

impl DfsForest {
    fn new(adj: &Adjacency) -> Self {
        let n = adj.len();

        let mut parent: Vec<u32> = (0..n as u32).collect();
        let mut parent_edge = vec![UNSET; n];
        let mut t_in = vec![UNSET; n];
        let mut tour = Vec::with_capacity(n);

        let mut low = vec![UNSET; n];
        let mut least_ancestor = vec![UNSET; n];

        let mut current_edge = adj.head[..n].to_vec();
        let mut timer = 0u32;
        for root in 0..n as u32 {
            if t_in[root as usize] != UNSET {
                continue;
            }

            parent[root as usize] = root;
            least_ancestor[root as usize] = timer;

            let mut u = root;
            loop {
                let p = parent[u as usize];
                let e = current_edge[u as usize];
                current_edge[u as usize] += 1;
                if e == adj.head[u as usize] {
                    // Enter
                    t_in[u as usize] = timer;
                    low[u as usize] = timer;
                    tour.push(u);
                    timer += 1;
                }
                if e == adj.head[u as usize + 1] {
                    // Exit
                    if p == u {
                        break;
                    }

                    low[p as usize] = low[p as usize].min(low[u as usize]);

                    u = p;
                    continue;
                }

                let v = adj.link[e as usize];
                if v == p {
                    continue;
                }
                debug_assert!(u != v, "self-loop on {u}");

                if t_in[v as usize] == UNSET {
                    // Tree edge
                    parent[v as usize] = u;
                    parent_edge[v as usize] = e;
                    least_ancestor[v as usize] = t_in[u as usize];

                    u = v;
                } else if t_in[v as usize] < t_in[u as usize] {
                    // Back edge
                    low[u as usize] = low[u as usize].min(t_in[v as usize]);
                    least_ancestor[u as usize] =
                        least_ancestor[u as usize].min(t_in[v as usize]);
                }
            }
        }

        let mut order_by_low: Vec<u32> = (0..n as u32).collect();
        order_by_low.sort_by_key(|&u| low[u as usize]);

        Self {
            parent,
            parent_edge,
            t_in,
            tour,
            low,
            least_ancestor,
            order_by_low,
        }
    }
}

/// State of one edge-addition run
///
/// Vertex `v` of the input lives at index `v`; the virtual root of the
/// biconnected component hanging below DFS child `c` lives at `n + c`.
pub(super) struct EdgeAddition {
    adj: Adjacency,
    dfs: DfsForest,

    // Separated DFS children, sorted by low point, tracking external activity.
    // Indexing: children 0..n, list heads n..2n
    sep_children: CyclicListPool,

    // External face of every biconnected component.
    // Indexing: vertices 0..n, component roots n..2n
    boundary: UndirectedCyclicListPool,

    // Pertinent component roots hanging below each vertex.
    // Indexing: same as `boundary`
    pertinent_roots: CyclicListPool,

    // Markers for `walk_up` and `walk_down`
    visited_from: Vec<u32>,
    back_edge_flag: Vec<u32>,

    merge_stack: Vec<(u32, u32, u32)>,
}

impl EdgeAddition {
    pub fn new(adj: Adjacency) -> Self {
        let n = adj.len();
        let dfs = DfsForest::new(&adj);

        let mut this = Self {
            adj,
            dfs,
            sep_children: CyclicListPool::with_size(n + n),
            boundary: UndirectedCyclicListPool::with_size(n + n),
            pertinent_roots: CyclicListPool::with_size(n + n),
            visited_from: vec![UNSET; n + n],
            back_edge_flag: vec![UNSET; n],
            merge_stack: Vec::new(),
        };

        for &u in &this.dfs.order_by_low {
            let p = this.dfs.parent[u as usize];
            if u == p {
                continue;
            }

            this.sep_children.insert_left(n as u32 + p, u);
            this.boundary.insert_any_side(n as u32 + u, u);
        }

        this
    }

    fn n_verts(&self) -> usize {
        self.adj.len()
    }

    fn is_pertinent(&self, u: u32, w: u32) -> bool {
        self.back_edge_flag[w as usize] == u || !self.pertinent_roots.is_isolated(w)
    }

    fn is_externally_active(&self, u: u32, w: u32) -> bool {
        let n = self.n_verts() as u32;
        self.dfs.least_ancestor[w as usize] < self.dfs.t_in[u as usize]
            || !self.sep_children.is_isolated(n + w) && {
                let c0 = self.sep_children.next(n + w);
                self.dfs.low[c0 as usize] < self.dfs.t_in[u as usize]
            }
    }

    fn is_internally_active(&self, u: u32, w: u32) -> bool {
        self.is_pertinent(u, w) && !self.is_externally_active(u, w)
    }

    fn is_active(&self, u: u32, w: u32) -> bool {
        self.is_pertinent(u, w) || self.is_externally_active(u, w)
    }

    /// Mark the path from back-edge endpoint `w` up to `u` as pertinent
    fn walk_up(&mut self, u: u32, mut w: u32) {
        let n = self.n_verts() as u32;

        self.back_edge_flag[w as usize] = u;

        loop {
            let visited_from = &mut self.visited_from;
            let Some(bcc_root) = self.boundary.bidirectional_search(w, |g| {
                if visited_from[g as usize] == u {
                    return Err(None);
                }
                visited_from[g as usize] = u;

                if g >= n {
                    Err(Some(g))
                } else {
                    Ok(())
                }
            }) else {
                return;
            };

            let c = bcc_root - n;
            let r = self.dfs.parent[c as usize];
            // Activity is measured against `u`; a child whose low point is
            // `u` itself is internally active
            if self.dfs.low[c as usize] < self.dfs.t_in[u as usize] {
                // Externally active components go last
                self.pertinent_roots.insert_left(r, bcc_root);
            } else {
                self.pertinent_roots.insert_right(r, bcc_root);
            }

            if r == u || self.visited_from[r as usize] == u {
                break;
            }
            w = r;
        }
    }

    /// Embed the back edges of `u` reachable from `bcc_root`
    ///
    /// Returns `false` when a pertinent vertex is blocked by externally
    /// active ones on both sides, which witnesses a Kuratowski subgraph.
    fn walk_down(&mut self, u: u32, bcc_root: u32) -> bool {
        let n = self.n_verts() as u32;

        self.merge_stack.clear();
        let mut a = bcc_root;
        loop {
            let [la, ra] = self.boundary.links(a);
            let Some((x, px)) = self.boundary.find1(a, la, |w| self.is_active(u, w)) else {
                break;
            };
            let Some((y, py)) = self.boundary.find1(a, ra, |w| self.is_active(u, w)) else {
                break;
            };

            let z = if self.is_internally_active(u, x) {
                x
            } else if self.is_internally_active(u, y) {
                y
            } else if self.is_pertinent(u, x) {
                x
            } else if self.is_pertinent(u, y) {
                y
            } else {
                debug_assert!(self.is_externally_active(u, x));
                debug_assert!(self.is_externally_active(u, y));
                if x != y {
                    // A pertinent vertex strictly between `x` and `y` can only
                    // reach the root through one of them, crossing its
                    // external path. Only vertices marked by `walk_up` are
                    // traversed.
                    let (mut c, mut pc) = (x, px);
                    loop {
                        self.boundary.step(&mut c, &mut pc);
                        if c == y || self.visited_from[c as usize] != u {
                            break;
                        }
                        if self.is_pertinent(u, c) {
                            return false;
                        }
                    }

                    if c != y {
                        let (mut d, mut pd) = (y, py);
                        loop {
                            self.boundary.step(&mut d, &mut pd);
                            if self.visited_from[d as usize] != u {
                                break;
                            }
                            if self.is_pertinent(u, d) {
                                return false;
                            }
                        }
                    }
                }

                // Short-circuit edge
                self.boundary.split_slice_out(px, x, y, py);
                self.boundary.isolate(bcc_root);
                self.boundary.insert_between(x, y, bcc_root);

                break;
            };

            let mut pz = if z == x { px } else { py };
            let mut fz = if z == x { ra } else { la };
            if self.back_edge_flag[z as usize] != u {
                debug_assert!(!self.pertinent_roots.is_isolated(z));
                self.merge_stack.push((z, pz, fz));
                a = self.pertinent_roots.next(z);
                continue;
            }

            // Back edge found: merge every component on the root path and
            // rebuild the external face.
            self.back_edge_flag[z as usize] = UNSET;
            while let Some((s, ps, fs)) = self.merge_stack.pop() {
                let Some(root) = self.pertinent_roots.pop_right(s) else {
                    unreachable!("merge stack entry {s} has no pertinent root");
                };
                a = root;

                let c = a - n;
                self.sep_children.isolate(c);

                //     lower cycle      pz-z-...-fz-a-...-pz
                //     upper cycle      ps-s-...-fs-...-ps
                //     after merging    ps-z-...-fz-s-...-fs-...-ps
                self.boundary.split_slice_out(pz, z, fz, a);
                self.boundary.insert_slice_between(ps, z, fz, s);

                pz = ps;
                fz = fs;
            }

            a = bcc_root;
            let ez = self.boundary.xor(bcc_root) ^ fz;
            self.boundary.split_slice_out(pz, z, bcc_root, ez);
        }

        true
    }

    pub fn run(&mut self) -> bool {
        for t in (0..self.n_verts()).rev() {
            let u = self.dfs.tour[t];

            for e in self.adj.edge_range(u as usize) {
                let w = self.adj.link[e];
                if self.dfs.t_in[u as usize] < self.dfs.t_in[w as usize]
                    && self.dfs.parent_edge[w as usize] != e as u32
                {
                    self.walk_up(u, w);
                }
            }

            while let Some(r) = self.pertinent_roots.pop_right(u) {
                if !self.walk_down(u, r) {
                    return false;
                }
            }
        }

        true
    }
}
