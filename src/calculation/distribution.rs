//! Log-normal wage distribution math.
//!
//! Wages are modelled as log-normal with a single global shape parameter
//! [`SIGMA`]. A distribution is calibrated from a reference mean so that its
//! arithmetic mean equals that reference, whatever the shape.

/// Shape parameter of the wage distribution.
///
/// Calibrated so that the modelled national wage Gini coefficient is about 0.45.
pub const SIGMA: f64 = 0.87;

/// Number of bisection steps used by [`LogNormal::salary_at_percentile`].
const BISECTION_STEPS: usize = 50;

/// Standard normal cumulative distribution function.
///
/// Uses the Abramowitz & Stegun 26.2.17 polynomial approximation, with a
/// maximum absolute error of 7.5e-8.
///
/// # Examples
///
/// ```
/// use salary_rank::calculation::normal_cdf;
///
/// assert!((normal_cdf(0.0) - 0.5).abs() < 1e-6);
/// assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
/// ```
pub fn normal_cdf(z: f64) -> f64 {
    let x = z.abs();
    let t = 1.0 / (1.0 + 0.231_641_9 * x);
    let d = 0.398_942_3 * (-x * x / 2.0).exp();
    let poly = t
        * (0.319_381_5
            + t * (-0.356_563_8 + t * (1.781_477_9 + t * (-1.821_256_0 + t * 1.330_274_4))));
    let p = 1.0 - d * poly;

    if z >= 0.0 { p } else { 1.0 - p }
}

/// A log-normal distribution described by the mean and standard deviation
/// of the underlying normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
}

impl LogNormal {
    /// Calibrates a distribution with shape [`SIGMA`] whose arithmetic mean is `mean`.
    ///
    /// The location is `ln(mean) - SIGMA² / 2`.
    pub fn from_mean(mean: f64) -> Self {
        Self::with_shape(mean, SIGMA)
    }

    /// Calibrates a distribution with the given shape whose arithmetic mean is `mean`.
    pub fn with_shape(mean: f64, sigma: f64) -> Self {
        Self {
            mu: mean.ln() - sigma * sigma / 2.0,
            sigma,
        }
    }

    /// Location parameter of the underlying normal distribution.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Shape parameter of the underlying normal distribution.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The median of the distribution, `exp(mu)`.
    pub fn median(&self) -> f64 {
        self.mu.exp()
    }

    /// Standardized variate of `x`: `(ln(x) - mu) / sigma`.
    pub fn z_score(&self, x: f64) -> f64 {
        (x.ln() - self.mu) / self.sigma
    }

    /// Probability that a draw is at most `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        normal_cdf(self.z_score(x))
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let exponent = -(x.ln() - self.mu).powi(2) / (2.0 * self.sigma * self.sigma);
        exponent.exp() / (x * self.sigma * (2.0 * std::f64::consts::PI).sqrt())
    }

    /// Finds the value whose cumulative probability is `percentile` percent.
    ///
    /// Searches `[low, high]` by bisection, so the answer is clamped to that
    /// bracket. Used to place a salary marker on a distribution plot.
    pub fn salary_at_percentile(&self, percentile: f64, low: f64, high: f64) -> f64 {
        let (mut lo, mut hi) = (low, high);
        for _ in 0..BISECTION_STEPS {
            let mid = (lo + hi) / 2.0;
            if self.cdf(mid) * 100.0 < percentile {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    /// Samples `(x, pdf(x))` at `points` log-spaced positions in `[x_min, x_max]`.
    ///
    /// Both bounds must be positive.
    pub fn curve(&self, x_min: f64, x_max: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(x_min, self.pdf(x_min))],
            _ => {
                let ratio = x_max / x_min;
                let last = (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = x_min * ratio.powf(i as f64 / last);
                        (x, self.pdf(x))
                    })
                    .collect()
            }
        }
    }
}
