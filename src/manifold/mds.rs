use crate::Matrix;
use crate::manifold::stress::{SignedRelativeStress, StressFunc};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Floor for projected distances in the Guttman transform. Coincident points
// would otherwise divide by zero; flooring approximates the limiting case of
// points at vanishing separation and is intended behavior, not a guard to
// tune away.
const MIN_DISTANCE: f64 = 1e-6;

/// How an optimization run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Successive stress values came within the relative tolerance.
    Converged,
    /// The progress callback asked to stop; points reflect the completed
    /// iterations, nothing is rolled back.
    Cancelled,
    /// The iteration budget ran out before convergence.
    MaxIterations,
}

/// Metric multidimensional scaling via SMACOF iterative majorization.
///
/// The engine borrows a caller-owned symmetric distance matrix and owns the
/// point configuration it moves toward agreement with it, along with the
/// projected-distance and stress matrices derived from the points each
/// iteration.
#[derive(Clone, Debug)]
pub struct MDS<'a> {
    distances: &'a Matrix,
    points: Matrix,
    projected: Matrix,
    stress: Matrix,
    avg_stress: f64,
    fresh: bool,
    n_components: usize,
}

impl<'a> MDS<'a> {
    /// Creates an engine for `distances` with a zero-initialized point
    /// configuration of shape n x `n_components`.
    ///
    /// The matrix must be square and symmetric with a zero diagonal and
    /// non-negative entries; anything else is rejected here rather than
    /// truncated or padded.
    pub fn new(distances: &'a Matrix, n_components: usize) -> Result<Self, String> {
        if n_components == 0 {
            return Err("n_components must be >= 1".to_string());
        }

        let n = distances.nrows();
        if distances.ncols() != n {
            return Err(format!(
                "Distance matrix must be square, got {}x{}",
                n,
                distances.ncols()
            ));
        }

        for i in 0..n {
            if distances[[i, i]] != 0.0 {
                return Err(format!(
                    "Distance matrix must have a zero diagonal, got {} at ({}, {})",
                    distances[[i, i]],
                    i,
                    i
                ));
            }
            for j in 0..i {
                if distances[[i, j]] != distances[[j, i]] {
                    return Err(format!(
                        "Distance matrix must be symmetric: ({}, {}) is {} but ({}, {}) is {}",
                        i,
                        j,
                        distances[[i, j]],
                        j,
                        i,
                        distances[[j, i]]
                    ));
                }
                if distances[[i, j]] < 0.0 {
                    return Err(format!(
                        "Distances must be non-negative, got {} at ({}, {})",
                        distances[[i, j]],
                        i,
                        j
                    ));
                }
            }
        }

        Ok(Self {
            distances,
            points: Matrix::zeros((n, n_components)),
            projected: Matrix::zeros((n, n)),
            stress: Matrix::zeros((n, n)),
            avg_stress: 0.0,
            fresh: false,
            n_components,
        })
    }

    /// Creates an engine with a caller-supplied starting configuration.
    pub fn with_points(
        distances: &'a Matrix,
        n_components: usize,
        points: Matrix,
    ) -> Result<Self, String> {
        let mut mds = Self::new(distances, n_components)?;
        mds.set_points(points)?;
        Ok(mds)
    }

    /// Number of items being embedded.
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    pub fn n_components(&self) -> usize {
        self.n_components
    }

    pub fn distances(&self) -> &Matrix {
        self.distances
    }

    pub fn points(&self) -> &Matrix {
        &self.points
    }

    /// Mutable view of the point configuration. Marks the projected
    /// distances stale, so the next read recomputes them.
    ///
    /// The n x n_components shape is fixed at construction, which is why
    /// this is a view rather than `&mut Matrix`; replacing the whole
    /// configuration goes through `set_points`, which checks the shape.
    pub fn points_mut(&mut self) -> ndarray::ArrayViewMut2<'_, f64> {
        self.fresh = false;
        self.points.view_mut()
    }

    /// Replaces the point configuration. The replacement must match the
    /// engine's n x n_components shape.
    pub fn set_points(&mut self, points: Matrix) -> Result<(), String> {
        if points.nrows() != self.len() || points.ncols() != self.n_components {
            return Err(format!(
                "Points must be {}x{}, got {}x{}",
                self.len(),
                self.n_components,
                points.nrows(),
                points.ncols()
            ));
        }
        self.points = points;
        self.fresh = false;
        Ok(())
    }

    /// Overwrites the point configuration with uniform-random coordinates in
    /// [0, 1), the usual starting state before `optimize`. A seed makes the
    /// configuration reproducible.
    pub fn randomize_points(&mut self, random_state: Option<u64>) {
        let shape = (self.len(), self.n_components);
        self.points = match random_state {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Matrix::random_using(shape, Uniform::new(0.0, 1.0), &mut rng)
            }
            None => Matrix::random(shape, Uniform::new(0.0, 1.0)),
        };
        self.fresh = false;
    }

    /// Euclidean distances between point rows, as of the last refresh.
    pub fn projected_distances(&self) -> &Matrix {
        &self.projected
    }

    /// Per-pair contributions and mean absolute stress from the last
    /// `evaluate_stress` call.
    pub fn stress_matrix(&self) -> &Matrix {
        &self.stress
    }

    pub fn average_stress(&self) -> f64 {
        self.avg_stress
    }

    /// Recomputes the projected distances from the current points. Skips all
    /// work when the points have not changed since the last refresh.
    pub fn refresh_distances(&mut self) {
        if self.fresh {
            return;
        }

        let n = self.points.nrows();
        for i in 0..n {
            for j in 0..i {
                let mut sum = 0.0;
                for k in 0..self.n_components {
                    let diff = self.points[[i, k]] - self.points[[j, k]];
                    sum += diff * diff;
                }
                let dist = sum.sqrt();
                self.projected[[i, j]] = dist;
                self.projected[[j, i]] = dist;
            }
            self.projected[[i, i]] = 0.0;
        }
        self.fresh = true;
    }

    /// Performs one SMACOF majorization iteration: refreshes the projected
    /// distances, builds the Guttman transform R, and replaces the points
    /// with (1/n) R points.
    ///
    /// Projected distances below 1e-6 are floored before the division, so
    /// near-coincident points move apart instead of producing infinities.
    pub fn smacof_step(&mut self) {
        self.refresh_distances();

        let n = self.points.nrows();
        if n == 0 {
            return;
        }

        let mut r = Matrix::zeros((n, n));
        for i in 0..n {
            let mut sum = 0.0;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let s = 1.0 / self.projected[[i, j]].max(MIN_DISTANCE);
                let t = self.distances[[i, j]] * s;
                r[[i, j]] = -t;
                sum += t;
            }
            r[[i, i]] = sum;
        }

        self.points = r.dot(&self.points) / n as f64;
        self.fresh = false;
    }

    /// Fills the stress matrix from the projected and target distances and
    /// returns the average stress.
    ///
    /// The function is applied to every ordered pair; the diagonal is then
    /// forced to zero (distance-to-self is degenerate) and contributes
    /// nothing to the average, which is taken over all n^2 entries. With no
    /// function this returns 0.0 and leaves the stress matrix untouched.
    ///
    /// Reads the projected distances as they stand; callers that mutated the
    /// points directly should `refresh_distances` first.
    pub fn evaluate_stress(&mut self, fun: Option<&dyn StressFunc>) -> f64 {
        let fun = match fun {
            Some(fun) => fun,
            None => return 0.0,
        };

        let n = self.points.nrows();
        if n == 0 {
            self.avg_stress = 0.0;
            return 0.0;
        }

        for i in 0..n {
            for j in 0..n {
                self.stress[[i, j]] =
                    fun.evaluate(self.projected[[i, j]], self.distances[[i, j]], 1.0);
            }
            self.stress[[i, i]] = 0.0;
        }

        let total: f64 = self.stress.iter().map(|s| s.abs()).sum();
        self.avg_stress = total / (n * n) as f64;
        self.avg_stress
    }

    /// Runs up to `num_iterations` SMACOF steps with the default
    /// signed-relative stress, a relative tolerance of 1e-3, and no progress
    /// callback.
    pub fn optimize(&mut self, num_iterations: usize) -> Termination {
        self.optimize_with(num_iterations, &SignedRelativeStress, 1e-3, None)
    }

    /// Runs up to `num_iterations` SMACOF steps, stopping early when the
    /// change in average stress drops below `old_stress * eps` or when the
    /// progress callback returns false.
    ///
    /// The callback is invoked once per iteration, after the convergence
    /// check, with the fraction of the budget spent. Cancellation is
    /// cooperative: the iteration that was running completes, and the points
    /// keep their latest values.
    pub fn optimize_with(
        &mut self,
        num_iterations: usize,
        fun: &dyn StressFunc,
        eps: f64,
        mut progress: Option<&mut dyn FnMut(f64) -> bool>,
    ) -> Termination {
        self.refresh_distances();
        let mut old_stress = self.evaluate_stress(Some(fun));

        for iteration in 1..=num_iterations {
            self.smacof_step();
            self.refresh_distances();
            let stress = self.evaluate_stress(Some(fun));

            if (old_stress - stress).abs() < old_stress * eps {
                return Termination::Converged;
            }
            if let Some(callback) = progress.as_deref_mut() {
                if !callback(iteration as f64 / num_iterations as f64) {
                    return Termination::Cancelled;
                }
            }
            old_stress = stress;
        }
        Termination::MaxIterations
    }
}
