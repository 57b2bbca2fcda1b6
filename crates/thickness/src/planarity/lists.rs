//! Arena-allocated cyclic linked lists used by the edge-addition test.

/// Pool of directed cyclic doubly linked lists over `0..n`
///
/// `links[u] = [prev, next]`; an isolated node links to itself.
#[derive(Clone, Debug, Default)]
pub(super) struct CyclicListPool {
    links: Vec<[u32; 2]>,
}

impl CyclicListPool {
    pub fn with_size(n_nodes: usize) -> Self {
        Self {
            links: (0..n_nodes as u32).map(|u| [u, u]).collect(),
        }
    }

    pub fn is_isolated(&self, u: u32) -> bool {
        self.links[u as usize][0] == u
    }

    pub fn next(&self, u: u32) -> u32 {
        self.links[u as usize][1]
    }

    pub fn isolate(&mut self, u: u32) {
        let [a, b] = self.links[u as usize];
        if a == u {
            return;
        }

        self.links[a as usize][1] = b;
        self.links[b as usize][0] = a;
        self.links[u as usize] = [u, u];
    }

    pub fn insert_left(&mut self, pivot: u32, u: u32) {
        debug_assert!(self.is_isolated(u));
        let [a, _] = self.links[pivot as usize];
        self.links[a as usize][1] = u;
        self.links[u as usize] = [a, pivot];
        self.links[pivot as usize][0] = u;
    }

    pub fn insert_right(&mut self, pivot: u32, u: u32) {
        debug_assert!(self.is_isolated(u));
        let [_, a] = self.links[pivot as usize];
        self.links[pivot as usize][1] = u;
        self.links[u as usize] = [pivot, a];
        self.links[a as usize][0] = u;
    }

    pub fn pop_right(&mut self, u: u32) -> Option<u32> {
        let [_, v] = self.links[u as usize];
        if u == v {
            return None;
        }

        self.isolate(v);
        Some(v)
    }
}

/// Pool of cyclic lists whose two links per node carry no orientation
///
/// Traversal keeps the previous node around and steps with `prev ^ a ^ b`,
/// which lets whole slices be flipped in O(1) when biconnected components
/// merge.
#[derive(Clone, Debug, Default)]
pub(super) struct UndirectedCyclicListPool {
    links: Vec<[u32; 2]>,
}

impl UndirectedCyclicListPool {
    pub fn with_size(n_nodes: usize) -> Self {
        Self {
            links: (0..n_nodes as u32).map(|u| [u, u]).collect(),
        }
    }

    pub fn xor(&self, u: u32) -> u32 {
        let [a, b] = self.links[u as usize];
        a ^ b
    }

    pub fn any_side(&self, u: u32) -> u32 {
        self.links[u as usize][0]
    }

    pub fn links(&self, u: u32) -> [u32; 2] {
        self.links[u as usize]
    }

    #[inline]
    fn update_link(&mut self, u: u32, old: u32, new: u32) {
        debug_assert!(self.links[u as usize].contains(&old));
        let side = (self.links[u as usize][1] == old) as usize;
        self.links[u as usize][side] = new;
    }

    pub fn isolate(&mut self, u: u32) {
        let [x, y] = self.links[u as usize];
        if x == u {
            return;
        }

        self.update_link(x, u, y);
        self.update_link(y, u, x);
        self.links[u as usize] = [u, u];
    }

    pub fn step(&self, u: &mut u32, prev: &mut u32) {
        *u = self.xor(*u) ^ std::mem::replace(prev, *u);
    }

    /// Splice the slice `u..v` between the adjacent nodes `pu` and `nv`
    pub fn insert_slice_between(&mut self, pu: u32, u: u32, v: u32, nv: u32) {
        debug_assert!(self.links[u as usize].contains(&v));
        debug_assert!(self.links[pu as usize].contains(&nv));
        debug_assert!(pu != u);
        debug_assert!(nv != v);

        self.update_link(pu, nv, u);
        self.update_link(u, v, pu);
        self.update_link(v, u, nv);
        self.update_link(nv, pu, v);
    }

    pub fn insert_between(&mut self, u: u32, v: u32, a: u32) {
        debug_assert!(self.links[u as usize].contains(&v));
        debug_assert!(u != a);
        debug_assert!(v != a);

        self.update_link(u, v, a);
        self.update_link(v, u, a);
        self.links[a as usize] = [u, v];
    }

    pub fn insert_any_side(&mut self, pivot: u32, u: u32) {
        self.insert_between(pivot, self.any_side(pivot), u);
    }

    /// Cut the slice `u..v` out of its cycle, closing both remaining gaps
    pub fn split_slice_out(&mut self, pu: u32, u: u32, v: u32, nv: u32) {
        debug_assert!(self.links[u as usize].contains(&pu));
        debug_assert!(self.links[v as usize].contains(&nv));
        debug_assert!(pu != u);
        debug_assert!(nv != v);

        self.update_link(pu, u, nv);
        self.update_link(u, pu, v);
        self.update_link(v, nv, u);
        self.update_link(nv, v, pu);
    }

    /// Walk from `entry` towards `next` and return the first node matching
    /// `pred` along with its predecessor
    pub fn find1(
        &self,
        entry: u32,
        next: u32,
        mut pred: impl FnMut(u32) -> bool,
    ) -> Option<(u32, u32)> {
        let mut prev = entry;
        let mut c = next;
        while c != entry {
            if pred(c) {
                return Some((c, prev));
            }

            self.step(&mut c, &mut prev);
        }

        None
    }

    /// Walk both directions from `entry` in lockstep until `visitor` stops
    pub fn bidirectional_search<T>(
        &self,
        entry: u32,
        mut visitor: impl FnMut(u32) -> Result<(), T>,
    ) -> T {
        let mut prev = self.links[entry as usize];
        let mut c = [entry; 2];
        loop {
            if let Err(e) = visitor(c[0]) {
                return e;
            }
            self.step(&mut c[0], &mut prev[0]);

            self.step(&mut c[1], &mut prev[1]);
            if let Err(e) = visitor(c[1]) {
                return e;
            }
        }
    }
}
