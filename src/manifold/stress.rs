/// Per-pair stress contribution: how badly a projected distance disagrees
/// with the target distance it is supposed to reproduce.
///
/// Implementations must be pure functions of their arguments. The `weight`
/// argument is 1.0 whenever the `MDS` engine drives the evaluation; it is
/// kept in the signature so externally weighted callers can reuse the same
/// functions.
///
/// Any closure with the matching signature implements this trait, so
/// user-supplied stress functions are interchangeable with the built-ins:
///
/// ```rust
/// use lowdim::StressFunc;
///
/// let absolute = |current: f64, target: f64, weight: f64| (current - target).abs() * weight;
/// assert_eq!(absolute.evaluate(3.0, 1.0, 1.0), 2.0);
/// ```
pub trait StressFunc {
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64;
}

impl<F> StressFunc for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64 {
        self(current, target, weight)
    }
}

// Divisor floor shared by the normalized variants. Target distances can be
// legitimately zero (coincident items), so the denominator is clamped rather
// than rejected.
const MIN_TARGET: f64 = 1e-6;

/// Kruskal raw stress: weighted squared difference.
#[derive(Clone, Copy, Debug, Default)]
pub struct KruskalStress;

impl StressFunc for KruskalStress {
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64 {
        let residual = current - target;
        residual * residual * weight
    }
}

/// Sammon stress: squared difference normalized by the target distance, so
/// errors on short target distances count for more.
#[derive(Clone, Copy, Debug, Default)]
pub struct SammonStress;

impl StressFunc for SammonStress {
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64 {
        let residual = current - target;
        residual * residual * weight / target.max(MIN_TARGET)
    }
}

/// Sign-preserving Sammon stress: same magnitude as `SammonStress` but
/// negative when the projection underestimates the target, distinguishing
/// over- from under-estimation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedSammonStress;

impl StressFunc for SignedSammonStress {
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64 {
        let residual = current - target;
        residual * residual.abs() * weight / target.max(MIN_TARGET)
    }
}

/// Signed relative stress: the signed residual as a fraction of the target
/// distance. The engine's default scoring function.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedRelativeStress;

impl StressFunc for SignedRelativeStress {
    fn evaluate(&self, current: f64, target: f64, weight: f64) -> f64 {
        (current - target) * weight / target.max(MIN_TARGET)
    }
}
