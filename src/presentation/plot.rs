//! Distribution curve data for result plots.

use serde::{Deserialize, Serialize};

use crate::calculation::LogNormal;

/// Lower end of the plotted range, as a multiple of the mean.
pub const PLOT_MIN: f64 = 0.05;

/// Upper end of the plotted range, as a multiple of the mean.
pub const PLOT_MAX: f64 = 5.0;

/// Number of curve samples.
pub const PLOT_POINTS: usize = 301;

/// A mean-normalized wage density curve with a marker at a percentile.
///
/// `x` values are multiples of the reference mean; `y` values are scaled so
/// that the curve's highest sample is 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionPlot {
    /// Curve samples as `(x, y)`, log-spaced in `x`.
    pub points: Vec<(f64, f64)>,
    /// Marker position for the percentile.
    pub marker: (f64, f64),
}

impl DistributionPlot {
    /// Builds the plot with a marker at `percentile`.
    pub fn for_percentile(percentile: u8) -> Self {
        let distribution = LogNormal::from_mean(1.0);
        let samples = distribution.curve(PLOT_MIN, PLOT_MAX, PLOT_POINTS);
        let peak = samples
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::MIN_POSITIVE, f64::max);

        let marker_x =
            distribution.salary_at_percentile(f64::from(percentile), PLOT_MIN, PLOT_MAX);

        Self {
            points: samples.iter().map(|(x, y)| (*x, y / peak)).collect(),
            marker: (marker_x, distribution.pdf(marker_x) / peak),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_is_normalized() {
        let plot = DistributionPlot::for_percentile(50);
        assert_eq!(plot.points.len(), PLOT_POINTS);

        let peak = plot.points.iter().map(|(_, y)| *y).fold(0.0, f64::max);
        assert!((peak - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_marker_moves_right_with_percentile() {
        let low = DistributionPlot::for_percentile(10);
        let high = DistributionPlot::for_percentile(90);
        assert!(low.marker.0 < high.marker.0);
    }

    #[test]
    fn test_marker_at_67th_percentile_is_near_mean() {
        let plot = DistributionPlot::for_percentile(67);
        assert!((plot.marker.0 - 1.0).abs() < 0.02, "marker x was {}", plot.marker.0);
    }
}
