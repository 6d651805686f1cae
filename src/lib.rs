pub mod error;
pub mod minimize;
pub mod prelude;
