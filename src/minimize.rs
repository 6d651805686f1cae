//! Derivative-free local minimization with the Nelder-Mead simplex method.
//!
//! The variant implemented is the one analysed in Jeffrey C. Lagarias,
//! James A. Reeds, Margaret H. Wright and Paul E. Wright, "Convergence
//! Properties of the Nelder-Mead Simplex Method in Low Dimensions",
//! SIAM J. Optim. 9 (1998), 112-147.
//!
//! ```
//! use ndarray::prelude::*;
//! use nmsimplex::minimize::minimize;
//!
//! let rosenbrock = |x: ArrayView1<f64>| (1.0 - x[0]).powi(2) + 100.0 * (x[1] - x[0] * x[0]).powi(2);
//! let xmin = minimize(rosenbrock, &array![-2.0, 2.0], 0.1);
//! assert!(rosenbrock(xmin.view()) < 1e-6);
//! ```

pub mod cache;
pub mod nelder_mead;
pub mod order;
pub mod simplex;

pub use self::cache::EvalCache;
pub use self::nelder_mead::{
    NelderMead, NelderMeadOptions, NelderMeadResult, SimplexResult, Step, Termination, minimize,
    minimize_with_order, step,
};
pub use self::order::{LessFn, Order};
pub use self::simplex::{CHI, GAMMA, RHO, SIGMA, Simplex};
