use ndarray::prelude::*;

/// A strict weak ordering over points.
///
/// The simplex engine only ever asks whether one point ranks before
/// another, so anything that can answer that question can be minimized:
/// a scalar objective (through [`EvalCache`](crate::minimize::EvalCache))
/// or a hand-written comparator (through [`LessFn`]).
pub trait Order {
    /// Reports whether `x` ranks strictly before `y`.
    fn less(&mut self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> bool;
}

// Wrapper for caller-supplied comparators
#[derive(Clone)]
pub struct LessFn<F>(pub F)
where
    F: FnMut(ArrayView1<f64>, ArrayView1<f64>) -> bool;

impl<F> LessFn<F>
where
    F: FnMut(ArrayView1<f64>, ArrayView1<f64>) -> bool,
{
    pub fn new(f: F) -> Self {
        LessFn(f)
    }
}

impl<F> Order for LessFn<F>
where
    F: FnMut(ArrayView1<f64>, ArrayView1<f64>) -> bool,
{
    fn less(&mut self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> bool {
        (self.0)(x, y)
    }
}
