//! # typhon-decompose
//!
//! Additive separation of a monthly series into trend, seasonal, and
//! residual components.
//!
//! The decomposition algorithm is an external collaborator with a fixed
//! contract: the [`Decompose`] trait. Callers (the dataset orchestrator)
//! depend only on the trait, so an STL implementation can be slotted in
//! without touching them. [`MovingAverageDecomposer`] is the in-tree
//! default — a classical moving-average decomposition whose residual is
//! defined by subtraction, making the additive reconstruction exact.
//!
//! ```ignore
//! use typhon_decompose::{Decompose, MovingAverageDecomposer};
//!
//! let decomposer = MovingAverageDecomposer::default(); // period 12
//! let parts = decomposer.decompose(&series)?;
//! // parts.trend() + parts.seasonal() + parts.residual() == series
//! ```

mod decomposition;
mod error;
mod moving_average;

pub use decomposition::{Decompose, Decomposition};
pub use error::DecomposeError;
pub use moving_average::MovingAverageDecomposer;
