use crate::minimize::Order;
use ndarray::prelude::*;

// Coefficients from Lagarias, Reeds, Wright and Wright, "Convergence
// Properties of the Nelder-Mead Simplex Method in Low Dimensions",
// SIAM J. Optim. 9 (1998), 112-147.
/// Reflection coefficient
pub const RHO: f64 = 1.0;
/// Expansion coefficient
pub const CHI: f64 = 2.0;
/// Contraction coefficient
pub const GAMMA: f64 = 0.5;
/// Shrinkage coefficient
pub const SIGMA: f64 = 0.5;

/// Arena of `n + 4` point slots of dimension `n`.
///
/// Slots `0..=n` are the simplex vertices, kept sorted from best to worst
/// between moves. Slot `n + 1` holds the centroid and doubles as temporary
/// storage when vertices are moved. Slots `n + 2` and `n + 3` hold trial
/// points.
pub struct Simplex<'a, O: Order + ?Sized> {
    order: &'a mut O,
    n: usize,
    x: Array2<f64>,
    comparisons: usize,
}

impl<'a, O: Order + ?Sized> Simplex<'a, O> {
    pub fn new(order: &'a mut O, n: usize) -> Self {
        Simplex {
            order,
            n,
            x: Array2::zeros((n + 4, n)),
            comparisons: 0,
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn centroid_slot(&self) -> usize {
        self.n + 1
    }

    pub fn trial_slots(&self) -> (usize, usize) {
        (self.n + 2, self.n + 3)
    }

    pub fn point(&self, i: usize) -> ArrayView1<f64> {
        self.x.row(i)
    }

    /// The live vertices, best first.
    pub fn vertices(&self) -> ArrayView2<f64> {
        self.x.slice(s![..=self.n, ..])
    }

    /// Number of calls made to the ordering predicate so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }

    /// Reports whether slot `i` ranks strictly before slot `j`.
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        self.comparisons += 1;
        self.order.less(self.x.row(i), self.x.row(j))
    }

    fn copy_point(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let (from, mut to) = self.x.multi_slice_mut((s![src, ..], s![dst, ..]));
        to.assign(&from);
    }

    /// Vertex 0 is `x0`; vertex `k` is `x0` with coordinate `k - 1` moved by
    /// `eps`. The vertices are sorted afterwards.
    pub fn init(&mut self, x0: ArrayView1<f64>, eps: f64) {
        for k in 0..=self.n {
            self.x.row_mut(k).assign(&x0);
            if k > 0 {
                self.x[[k, k - 1]] += eps;
            }
        }
        self.sort();
    }

    /// Store the mean of vertices `0..n` (all but the worst) in the
    /// centroid slot.
    pub fn centroid(&mut self) {
        let n = self.n;
        let (verts, mut scratch) = self.x.view_mut().split_at(Axis(0), n);
        let mut cent = scratch.row_mut(1);
        cent.fill(0.0);
        for v in verts.outer_iter() {
            cent += &v;
        }
        cent /= n as f64;
    }

    /// Set slot `a` to `(1 - lambda) * b + lambda * c`. `a` may coincide
    /// with `b` or `c`.
    pub fn shift(&mut self, a: usize, b: usize, c: usize, lambda: f64) {
        for k in 0..self.n {
            self.x[[a, k]] = (1.0 - lambda) * self.x[[b, k]] + lambda * self.x[[c, k]];
        }
    }

    /// Pull vertices `1..=n` towards vertex 0.
    pub fn shrink(&mut self) {
        let n = self.n;
        let (best, mut rest) = self.x.view_mut().split_at(Axis(0), 1);
        let best = best.row(0);
        for mut v in rest.slice_mut(s![..n, ..]).outer_iter_mut() {
            v.zip_mut_with(&best, |p, &b| *p = (1.0 - SIGMA) * b + SIGMA * *p);
        }
    }

    // Smallest index in [i, j] where `src` ranks before the vertex.
    // Invariant: !less(src, i - 1) and less(src, j), where j may also sit
    // one past the candidates and is never compared.
    fn search(&mut self, src: usize, mut i: usize, mut j: usize) -> usize {
        while i < j {
            let h = i + (j - i) / 2;
            if !self.less(src, h) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        i
    }

    /// Insert slot `src` among the vertices, given that its rank is known
    /// to be one of `i..=j`. The worst vertex is dropped.
    pub fn insert(&mut self, src: usize, i: usize, j: usize) {
        let pos = self.search(src, i, j);
        for k in (pos..self.n).rev() {
            self.copy_point(k, k + 1);
        }
        self.copy_point(src, pos);
    }

    /// Stable binary insertion sort of vertices `0..=n`. Moves rows through
    /// the centroid slot, so the centroid is stale afterwards.
    pub fn sort(&mut self) {
        let tmp = self.centroid_slot();
        for k in 1..=self.n {
            let pos = self.search(k, 0, k);
            if pos == k {
                continue;
            }
            self.copy_point(k, tmp);
            for m in (pos..k).rev() {
                self.copy_point(m, m + 1);
            }
            self.copy_point(tmp, pos);
        }
    }

    pub fn best(&self) -> Array1<f64> {
        self.x.row(0).to_owned()
    }
}
