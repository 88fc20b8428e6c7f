/// Running mean and sum of squared deviations (Welford)
#[derive(Debug, Clone, Default)]
pub struct Moments {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample
    pub fn update(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.mean = value;
            return;
        }

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, or `None` before the first sample
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Population variance (denominator `n`), or `None` before the first sample
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }
}

impl FromIterator<f64> for Moments {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut moments = Moments::new();
        for value in iter {
            moments.update(value);
        }
        moments
    }
}

/// Largest magnitude in `values`, used to keep Welford deltas in `[-2, 2]`
fn magnitude(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |max, v| max.max(v.abs()))
}

/// Arithmetic mean; `None` for an empty slice
///
/// Accumulates on values scaled by their largest magnitude, so finite
/// input near `f64::MAX` does not overflow.
pub fn mean(values: &[f64]) -> Option<f64> {
    let scale = magnitude(values);
    if scale == 0.0 {
        return (!values.is_empty()).then_some(0.0);
    }

    values
        .iter()
        .map(|v| v / scale)
        .collect::<Moments>()
        .mean()
        .map(|m| m * scale)
}

/// Population standard deviation (ddof = 0); 0 for an empty slice
///
/// Scaled like [`mean`]; the result never exceeds the largest magnitude.
pub fn population_std_dev(values: &[f64]) -> f64 {
    let scale = magnitude(values);
    if scale == 0.0 {
        return 0.0;
    }

    values
        .iter()
        .map(|v| v / scale)
        .collect::<Moments>()
        .population_variance()
        .map(|var| var.sqrt() * scale)
        .unwrap_or(0.0)
}

/// Shannon entropy in bits: `Σ p · log2(1/p)`, skipping zero probabilities
pub fn shannon_entropy_bits(probabilities: &[f64]) -> f64 {
    let entropy: f64 = probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * (1.0 / p).log2())
        .sum();

    // Rounding in the model can push a dominant p just above 1
    entropy.max(0.0)
}
