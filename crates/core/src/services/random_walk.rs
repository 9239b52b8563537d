use rand::Rng;

/// One bounded random-walk step:
/// `previous + uniform(-volatility/2, +volatility/2)`, clamped to `[lower, upper]`.
///
/// A NaN bound is ignored, leaving that side open.
pub fn next<R: Rng + ?Sized>(
    previous: f64,
    volatility: f64,
    lower: f64,
    upper: f64,
    rng: &mut R,
) -> f64 {
    let (lower, upper) = if upper < lower { (upper, lower) } else { (lower, upper) };
    // f64::max/min return the other operand when one is NaN
    (previous + step(volatility, rng)).max(lower).min(upper)
}

/// The unclamped perturbation, centered on zero.
fn step<R: Rng + ?Sized>(volatility: f64, rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * volatility
}

/// A configured walk: step size plus optional clamp bounds.
///
/// Chart prices use a bounded walk; position PnL is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    volatility: f64,
    bounds: Option<(f64, f64)>,
}

impl RandomWalk {
    /// Bounded walk. Bounds are swapped if given in the wrong order.
    pub fn bounded(volatility: f64, lower: f64, upper: f64) -> Self {
        let (lower, upper) = if upper < lower { (upper, lower) } else { (lower, upper) };
        Self {
            volatility: volatility.abs(),
            bounds: Some((lower, upper)),
        }
    }

    pub fn unbounded(volatility: f64) -> Self {
        Self {
            volatility: volatility.abs(),
            bounds: None,
        }
    }

    #[must_use]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.bounds
    }

    pub fn next<R: Rng + ?Sized>(&self, previous: f64, rng: &mut R) -> f64 {
        match self.bounds {
            Some((lower, upper)) => next(previous, self.volatility, lower, upper, rng),
            None => previous + step(self.volatility, rng),
        }
    }

    /// Walk `len` steps from `start`, returning every visited value
    /// (the start itself is not included).
    pub fn series<R: Rng + ?Sized>(&self, start: f64, len: usize, rng: &mut R) -> Vec<f64> {
        let mut values = Vec::with_capacity(len);
        let mut current = start;
        for _ in 0..len {
            current = self.next(current, rng);
            values.push(current);
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_volatility_is_identity_within_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next(42.0, 0.0, 30.0, 60.0, &mut rng), 42.0);
    }

    #[test]
    fn out_of_range_start_is_pulled_into_bounds() {
        let mut rng = StdRng::seed_from_u64(2);
        let v = next(100.0, 1.0, 30.0, 60.0, &mut rng);
        assert_eq!(v, 60.0);
    }

    #[test]
    fn step_magnitude_is_at_most_half_volatility() {
        let mut rng = StdRng::seed_from_u64(3);
        let walk = RandomWalk::unbounded(100.0);
        for _ in 0..1_000 {
            let v = walk.next(0.0, &mut rng);
            assert!(v.abs() <= 50.0, "step {v} exceeds half volatility");
        }
    }

    #[test]
    fn nan_bound_leaves_that_side_open() {
        let mut rng = StdRng::seed_from_u64(4);
        let v = next(100.0, 1.0, f64::NAN, 60.0, &mut rng);
        assert_eq!(v, 60.0);
        let v = next(10.0, 1.0, 30.0, f64::NAN, &mut rng);
        assert_eq!(v, 30.0);
        let v = next(500.0, 0.0, f64::NAN, f64::NAN, &mut rng);
        assert_eq!(v, 500.0);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let walk = RandomWalk::bounded(-2.0, 60.0, 30.0);
        assert_eq!(walk.bounds(), Some((30.0, 60.0)));
        assert_eq!(walk.volatility(), 2.0);
    }
}
