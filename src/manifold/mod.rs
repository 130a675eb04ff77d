//! Manifold learning: embedding items into a low-dimensional space.
//!
//! This module provides metric multidimensional scaling:
//! - `MDS`: SMACOF-based optimizer that positions points so their pairwise
//!   Euclidean distances match a caller-supplied target distance matrix
//! - `StressFunc`: pluggable goodness-of-fit functions (`KruskalStress`,
//!   `SammonStress`, `SignedSammonStress`, `SignedRelativeStress`, or any
//!   closure with the same signature)
//!
//! # Examples
//!
//! ## Embedding a distance matrix
//! ```rust
//! use lowdim::MDS;
//! use ndarray::array;
//!
//! // Four items, all at distance 1 from each other
//! let distances = array![
//!     [0.0, 1.0, 1.0, 1.0],
//!     [1.0, 0.0, 1.0, 1.0],
//!     [1.0, 1.0, 0.0, 1.0],
//!     [1.0, 1.0, 1.0, 0.0]
//! ];
//!
//! let mut mds = MDS::new(&distances, 2).unwrap();
//! mds.randomize_points(Some(42));
//! mds.optimize(100);
//!
//! // The 4x2 embedding and how well it reproduces the targets
//! let embedding = mds.points();
//! println!("stress: {:.4}", mds.average_stress());
//! assert_eq!(embedding.shape(), &[4, 2]);
//! ```
//!
//! ## Driving the loop by hand
//! ```rust
//! use lowdim::{MDS, KruskalStress};
//! use ndarray::array;
//!
//! let distances = array![[0.0, 2.0], [2.0, 0.0]];
//! let start = array![[0.0, 0.0], [0.5, 0.5]];
//!
//! let mut mds = MDS::with_points(&distances, 2, start).unwrap();
//! for _ in 0..10 {
//!     mds.smacof_step();
//! }
//! mds.refresh_distances();
//! let stress = mds.evaluate_stress(Some(&KruskalStress));
//! println!("raw stress after 10 steps: {:.6}", stress);
//! ```
//!
//! ## Progress reporting and cancellation
//! ```rust
//! use lowdim::{MDS, SignedRelativeStress, Termination};
//! use ndarray::array;
//!
//! let distances = array![
//!     [0.0, 1.0, 2.0],
//!     [1.0, 0.0, 1.0],
//!     [2.0, 1.0, 0.0]
//! ];
//!
//! let mut mds = MDS::new(&distances, 2).unwrap();
//! mds.randomize_points(Some(7));
//!
//! // The callback sees the fraction of the budget spent; returning false
//! // stops the run with whatever embedding has been reached.
//! let mut report = |done: f64| {
//!     println!("{:.0}% done", done * 100.0);
//!     done < 0.5
//! };
//! let outcome = mds.optimize_with(10, &SignedRelativeStress, 0.0, Some(&mut report));
//! assert_eq!(outcome, Termination::Cancelled);
//! ```

mod mds;
mod stress;

pub use mds::{MDS, Termination};
pub use stress::{
    KruskalStress, SammonStress, SignedRelativeStress, SignedSammonStress, StressFunc,
};
