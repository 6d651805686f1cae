//! nmsimplex prelude.
//!
//! This module contains the most used types, traits and functions, which
//! you can import easily as a group.
//!
//! ```
//! use nmsimplex::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::MinimizerError;

#[doc(no_inline)]
pub use crate::minimize::{
    EvalCache, LessFn, NelderMead, NelderMeadOptions, NelderMeadResult, Order, SimplexResult,
    Termination, minimize, minimize_with_order,
};
