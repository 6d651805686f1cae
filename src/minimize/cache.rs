use crate::minimize::Order;
use ndarray::prelude::*;

/// Memoizing wrapper around a scalar objective.
///
/// Remembers the last `n + 4` evaluated points, the size of the simplex
/// working set, in most-recently-used order. Lookups use exact coordinate
/// equality; there is no tolerance. Used as an [`Order`] it ranks points by
/// `f(x) < f(y)`, so the repeated comparisons the simplex makes against the
/// same trial point within one iteration cost a single evaluation.
///
/// Storage is allocated on the first lookup and sized from that point's
/// dimension. Every later query must have the same dimension.
pub struct EvalCache<F> {
    f: F,
    n: usize,
    len: usize,
    // One row per entry: n coordinates followed by the value.
    entries: Array2<f64>,
    tmp: Array1<f64>,
    fn_evals: usize,
    hits: usize,
}

impl<F> EvalCache<F>
where
    F: FnMut(ArrayView1<f64>) -> f64,
{
    pub fn new(f: F) -> Self {
        EvalCache {
            f,
            n: 0,
            len: 0,
            entries: Array2::zeros((0, 0)),
            tmp: Array1::zeros(0),
            fn_evals: 0,
            hits: 0,
        }
    }

    fn allocate(&mut self, n: usize) {
        self.n = n;
        self.len = 0;
        // NaN never compares equal, so unwritten rows cannot produce a hit
        self.entries = Array2::from_elem((n + 4, n + 1), f64::NAN);
        self.tmp = Array1::from_elem(n + 1, f64::NAN);
    }

    /// Value of the objective at `x`, from the cache when possible.
    ///
    /// # Panics
    /// If `x` does not have the dimension of the first point looked up.
    pub fn get(&mut self, x: ArrayView1<f64>) -> f64 {
        if self.entries.nrows() == 0 {
            self.allocate(x.len());
        }
        let n = self.n;

        let hit = self
            .entries
            .slice(s![..self.len, ..])
            .outer_iter()
            .position(|row| row.slice(s![..n]) == x);

        match hit {
            Some(k) => {
                self.hits += 1;
                self.tmp.assign(&self.entries.row(k));
                self.push_front(k);
                self.entries.row_mut(0).assign(&self.tmp);
            }
            None => {
                let value = (self.f)(x.view());
                self.fn_evals += 1;
                // Drops the least recently used entry once full
                let last = self.len.min(self.capacity() - 1);
                self.push_front(last);
                self.len = (self.len + 1).min(self.capacity());
                let mut front = self.entries.row_mut(0);
                front.slice_mut(s![..n]).assign(&x);
                front[n] = value;
            }
        }
        self.entries[[0, n]]
    }

    // Move rows 0..k down one slot, overwriting row k.
    fn push_front(&mut self, k: usize) {
        for i in (0..k).rev() {
            let (src, mut dst) = self.entries.multi_slice_mut((s![i, ..], s![i + 1, ..]));
            dst.assign(&src);
        }
    }

    /// Number of calls made to the wrapped objective.
    pub fn fn_evals(&self) -> usize {
        self.fn_evals
    }

    /// Number of lookups answered without calling the objective.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Maximum number of remembered points; zero before the first lookup.
    pub fn capacity(&self) -> usize {
        self.entries.nrows()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F> Order for EvalCache<F>
where
    F: FnMut(ArrayView1<f64>) -> f64,
{
    fn less(&mut self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> bool {
        self.get(x) < self.get(y)
    }
}
