pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod manifold;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use manifold::{
    KruskalStress, MDS, SammonStress, SignedRelativeStress, SignedSammonStress, StressFunc,
    Termination,
};
