//! Closed-form ordinary least squares for a straight line.
//!
//! For `y = slope * x + intercept` the normal equations have the solution:
//!
//! ```text
//! slope     = (n Σxy - Σx Σy) / (n Σx² - (Σx)²)
//! intercept = Σy / n - slope * Σx / n
//! ```
//!
//! All sums are accumulated in a single pass. Degenerate inputs (every `x`
//! equal, non-finite values) are not special-cased: the natural floating
//! point result (`NaN`/`±inf`) is returned to the caller.

/// Running sums needed by the line fit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_xx: f64,
}

impl LineSums {
    /// Accumulate sums over positionally paired `x`/`y`.
    ///
    /// Only the common prefix is visited; callers validate lengths first.
    pub fn accumulate(x: &[f64], y: &[f64]) -> Self {
        let mut sums = Self::default();
        for (&xi, &yi) in x.iter().zip(y) {
            sums.n += 1;
            sums.sum_x += xi;
            sums.sum_y += yi;
            sums.sum_xy += xi * yi;
            sums.sum_xx += xi * xi;
        }
        sums
    }

    /// Solve for `(slope, intercept)`.
    pub fn solve(&self) -> (f64, f64) {
        let n = self.n as f64;
        let slope = (n * self.sum_xy - self.sum_x * self.sum_y) / (n * self.sum_xx - self.sum_x * self.sum_x);
        let intercept = self.sum_y / n - slope * self.sum_x / n;
        (slope, intercept)
    }
}

/// Fit a straight line, returning `(slope, intercept)`.
pub fn fit_line(x: &[f64], y: &[f64]) -> (f64, f64) {
    LineSums::accumulate(x, y).solve()
}
