use crate::{
    error::MinimizerError,
    minimize::{
        EvalCache, LessFn, Order,
        simplex::{CHI, GAMMA, RHO, Simplex},
    },
};
use ndarray::prelude::*;
use std::fmt;

/// Why the iteration loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The iteration cap was reached.
    MaxIterations,
    /// Too many shrink steps without an accepted expansion.
    Stagnation,
    /// The starting point had no coordinates.
    EmptyDomain,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::MaxIterations => write!(f, "maximum iterations reached"),
            Termination::Stagnation => write!(f, "simplex stagnated"),
            Termination::EmptyDomain => write!(f, "empty starting point"),
        }
    }
}

/// Result of a run driven by an ordering predicate
#[derive(Debug, Clone)]
pub struct SimplexResult {
    pub xmin: Array1<f64>,
    pub iters: usize,
    pub shrinks: usize,
    pub comparisons: usize,
    pub termination: Termination,
}

impl SimplexResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Stagnation
    }
}

/// Result of a run driven by a scalar objective
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    pub xmin: Array1<f64>,
    pub fmin: f64,
    pub iters: usize,
    pub shrinks: usize,
    pub fn_evals: usize,
    pub cache_hits: usize,
    pub termination: Termination,
}

impl NelderMeadResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Stagnation
    }
}

/// The move taken by one iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Reflected point ranked between best and second-worst.
    Reflect,
    /// Expanded point beat the reflected one, which beat the best.
    Expand,
    /// Reflected point beat the best, expanded point did not beat it.
    ReflectBest,
    /// Outside or inside contraction beat the worst vertex.
    Contract,
    /// Nothing beat the worst vertex; the simplex shrank towards the best.
    Shrink,
}

/// One Nelder-Mead iteration on a sorted simplex. The vertices are sorted
/// again when it returns.
pub fn step<O: Order + ?Sized>(s: &mut Simplex<O>) -> Step {
    let n = s.dim();
    let c = s.centroid_slot();
    let (a, b) = s.trial_slots();

    s.centroid();
    s.shift(a, c, n, -RHO); // reflect
    let winner = s.less(a, 0);
    if !winner && s.less(a, n - 1) {
        s.insert(a, 1, n - 1);
        return Step::Reflect;
    }

    if winner {
        s.shift(b, c, a, CHI); // expand
        if s.less(b, a) {
            s.insert(b, 0, 0);
            return Step::Expand;
        }
        s.insert(a, 0, 0);
        return Step::ReflectBest;
    }

    if s.less(a, n) {
        s.shift(a, c, a, GAMMA); // outside contraction
    } else {
        s.shift(a, c, n, GAMMA); // inside contraction
    }
    if s.less(a, n) {
        s.insert(a, 0, n);
        return Step::Contract;
    }

    s.shrink();
    s.sort();
    Step::Shrink
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NelderMeadOptions {
    max_iterations: usize,
    max_shrinks: usize, // Consecutive shrinks tolerated before stopping
}

impl NelderMeadOptions {
    pub fn new(max_iters: Option<usize>, max_shrinks: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            max_iterations: max_iters.unwrap_or(defaults.max_iterations),
            max_shrinks: max_shrinks.unwrap_or(defaults.max_shrinks),
        }
    }

    /// Longer-running limits: 100,000 iterations, 100 shrinks.
    pub fn extended() -> Self {
        Self {
            max_iterations: 100_000,
            max_shrinks: 100,
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn max_shrinks(&self) -> usize {
        self.max_shrinks
    }

    pub fn set_max_iterations(&mut self, iters: usize) {
        self.max_iterations = iters;
    }

    pub fn set_max_shrinks(&mut self, val: usize) {
        self.max_shrinks = val;
    }
}

impl Default for NelderMeadOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            max_shrinks: 10,
        }
    }
}

/// Nelder-Mead simplex minimizer, in the variant of Lagarias, Reeds,
/// Wright and Wright.
///
/// Only the ranking of points matters, so the minimizer runs on any
/// [`Order`]. Termination is move based: the loop ends at the iteration cap
/// or once the simplex has shrunk more than `max_shrinks` times since the
/// last accepted expansion. The result is a local minimum at best.
#[derive(Debug, Clone, Default)]
pub struct NelderMead {
    opts: NelderMeadOptions,
}

impl NelderMead {
    pub fn new(opts: NelderMeadOptions) -> Self {
        NelderMead { opts }
    }

    pub fn options(&self) -> &NelderMeadOptions {
        &self.opts
    }

    /// Run the simplex iteration from `x0` with an initial simplex of size
    /// `eps`. Inputs are not checked; an `eps` of zero leaves every vertex
    /// at `x0`.
    pub fn run<O: Order + ?Sized>(
        &self,
        order: &mut O,
        x0: ArrayView1<f64>,
        eps: f64,
    ) -> SimplexResult {
        let n = x0.len();
        if n == 0 {
            return SimplexResult {
                xmin: Array1::zeros(0),
                iters: 0,
                shrinks: 0,
                comparisons: 0,
                termination: Termination::EmptyDomain,
            };
        }
        tracing::debug!(
            n,
            eps,
            max_iterations = self.opts.max_iterations,
            max_shrinks = self.opts.max_shrinks,
            "starting nelder-mead"
        );

        let mut s = Simplex::new(order, n);
        s.init(x0, eps);

        let mut iters = 0;
        let mut shrinks = 0;
        let mut shrink_count = 0;
        let termination = loop {
            if iters >= self.opts.max_iterations {
                break Termination::MaxIterations;
            }
            iters += 1;

            let mv = step(&mut s);
            tracing::trace!(iter = iters, step = ?mv, "simplex step");
            match mv {
                Step::Expand => shrink_count = 0,
                Step::Shrink => {
                    shrinks += 1;
                    shrink_count += 1;
                    if shrink_count > self.opts.max_shrinks {
                        break Termination::Stagnation;
                    }
                }
                _ => {}
            }
        };

        tracing::debug!(
            %termination,
            iters,
            shrinks,
            comparisons = s.comparisons(),
            "nelder-mead finished"
        );
        SimplexResult {
            xmin: s.best(),
            iters,
            shrinks,
            comparisons: s.comparisons(),
            termination,
        }
    }

    fn check_start(x0: &Array1<f64>, eps: f64) -> Result<(), MinimizerError> {
        if x0.is_empty() {
            tracing::warn!("rejecting empty starting point");
            return Err(MinimizerError::InvalidDimension);
        }
        if eps == 0.0 || !eps.is_finite() {
            tracing::warn!(eps, "rejecting initial simplex size");
            return Err(MinimizerError::InvalidStepSize);
        }
        if x0.iter().any(|xi| !xi.is_finite()) {
            tracing::warn!("rejecting non-finite starting point");
            return Err(MinimizerError::InfeasibleStartingPoint);
        }
        Ok(())
    }

    /// Minimize `f` near `x0`, caching objective values between
    /// comparisons.
    ///
    /// # Errors
    /// * `InvalidDimension` if `x0` is empty
    /// * `InvalidStepSize` if `eps` is zero or not finite
    /// * `InfeasibleStartingPoint` if `x0` or `f(x0)` is not finite
    pub fn minimize<F>(
        &self,
        f: F,
        x0: &Array1<f64>,
        eps: f64,
    ) -> Result<NelderMeadResult, MinimizerError>
    where
        F: FnMut(ArrayView1<f64>) -> f64,
    {
        Self::check_start(x0, eps)?;
        let mut cache = EvalCache::new(f);
        if !cache.get(x0.view()).is_finite() {
            tracing::warn!("objective is not finite at the starting point");
            return Err(MinimizerError::InfeasibleStartingPoint);
        }

        let res = self.run(&mut cache, x0.view(), eps);
        let fmin = cache.get(res.xmin.view());
        Ok(NelderMeadResult {
            xmin: res.xmin,
            fmin,
            iters: res.iters,
            shrinks: res.shrinks,
            fn_evals: cache.fn_evals(),
            cache_hits: cache.hits(),
            termination: res.termination,
        })
    }

    /// Minimize with respect to a caller-supplied ordering.
    ///
    /// # Errors
    /// * `InvalidDimension` if `x0` is empty
    /// * `InvalidStepSize` if `eps` is zero or not finite
    /// * `InfeasibleStartingPoint` if `x0` is not finite
    pub fn minimize_with_order<O: Order + ?Sized>(
        &self,
        order: &mut O,
        x0: &Array1<f64>,
        eps: f64,
    ) -> Result<SimplexResult, MinimizerError> {
        Self::check_start(x0, eps)?;
        Ok(self.run(order, x0.view(), eps))
    }
}

/// Find an approximate local minimum of `f` near `x0`; `eps` is the size of
/// the initial simplex.
///
/// Objective values are cached, so comparing the same point repeatedly
/// evaluates `f` once. Inputs are not validated; see
/// [`NelderMead::minimize`] for a checked variant.
pub fn minimize<F>(f: F, x0: &Array1<f64>, eps: f64) -> Array1<f64>
where
    F: FnMut(ArrayView1<f64>) -> f64,
{
    let mut cache = EvalCache::new(f);
    NelderMead::default().run(&mut cache, x0.view(), eps).xmin
}

/// Find an approximate local minimum near `x0` of the ordering `less`,
/// where `less(x, y)` reports whether `x` is strictly better than `y`.
pub fn minimize_with_order<F>(less: F, x0: &Array1<f64>, eps: f64) -> Array1<f64>
where
    F: FnMut(ArrayView1<f64>, ArrayView1<f64>) -> bool,
{
    let mut order = LessFn::new(less);
    NelderMead::default().run(&mut order, x0.view(), eps).xmin
}
