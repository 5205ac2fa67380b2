//! Synthetic samples drawn from a fitted model plus Gaussian noise.
//!
//! `x` is drawn uniformly from `[x_min, x_max]` and sorted; each `y` is the
//! model value plus `noise · z` with `z ~ N(0, 1)`. A fixed seed always yields
//! the same sample.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::DatasetStats;
use crate::error::AppError;
use crate::models::AnyModel;

/// Sample generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of the additive noise (`0` for exact model values).
    pub noise: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct SampleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub stats: DatasetStats,
}

pub fn generate_sample(model: &AnyModel, config: &SampleConfig) -> Result<SampleData, AppError> {
    if config.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    // The width must be finite too, otherwise the uniform draw overflows.
    if !(config.x_min.is_finite()
        && config.x_max.is_finite()
        && config.x_max > config.x_min
        && (config.x_max - config.x_min).is_finite())
    {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise must be a finite value >= 0."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;

    let mut x: Vec<f64> = (0..config.count)
        .map(|_| rng.gen_range(config.x_min..=config.x_max))
        .collect();
    x.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut y = Vec::with_capacity(config.count);
    for &xi in &x {
        let base = model.get_y(xi);
        if !base.is_finite() {
            return Err(AppError::new(
                4,
                format!("Model is not finite at x={xi}; narrow the sample range."),
            ));
        }
        let z: f64 = normal.sample(&mut rng);
        y.push(base + config.noise * z);
    }

    let stats = DatasetStats::from_points(&x, &y)
        .ok_or_else(|| AppError::new(4, "Failed to compute sample stats."))?;

    Ok(SampleData { x, y, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FittableModel, Power, SimpleLinear};

    fn config(noise: f64, seed: u64) -> SampleConfig {
        SampleConfig {
            count: 50,
            x_min: 1.0,
            x_max: 100.0,
            noise,
            seed,
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let model = AnyModel::from(SimpleLinear::new(2.0, 1.0));
        let a = generate_sample(&model, &config(0.5, 7)).unwrap();
        let b = generate_sample(&model, &config(0.5, 7)).unwrap();
        let c = generate_sample(&model, &config(0.5, 8)).unwrap();
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_ne!(a.x, c.x);
    }

    #[test]
    fn x_is_sorted_and_in_range() {
        let model = AnyModel::from(SimpleLinear::new(2.0, 1.0));
        let s = generate_sample(&model, &config(0.0, 1)).unwrap();
        assert!(s.x.windows(2).all(|w| w[0] <= w[1]));
        assert!(s.x.iter().all(|&v| (1.0..=100.0).contains(&v)));
        assert_eq!(s.stats.n_points, 50);
    }

    #[test]
    fn noiseless_power_sample_is_recovered() {
        let truth = Power::new(24.13, 0.66);
        let s = generate_sample(&AnyModel::from(truth), &config(0.0, 3)).unwrap();
        let fitted = Power::fit(&s.x, &s.y).unwrap();
        assert!((fitted.coefficient() - 24.13).abs() < 1e-9);
        assert!((fitted.exponent() - 0.66).abs() < 1e-9);
    }

    #[test]
    fn noisy_linear_sample_fits_close_to_truth() {
        let s = generate_sample(&AnyModel::from(SimpleLinear::new(3.0, -5.0)), &config(1.0, 11)).unwrap();
        let fitted = SimpleLinear::fit(&s.x, &s.y).unwrap();
        assert!((fitted.slope() - 3.0).abs() < 0.05);
        assert!(fitted.score(&s.x, &s.y).unwrap().r2(None) > 0.99);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let model = AnyModel::from(SimpleLinear::new(1.0, 0.0));
        let mut bad = config(0.0, 1);
        bad.count = 0;
        assert_eq!(generate_sample(&model, &bad).unwrap_err().exit_code(), 2);

        let mut bad = config(-1.0, 1);
        bad.noise = -1.0;
        assert_eq!(generate_sample(&model, &bad).unwrap_err().exit_code(), 2);

        let mut bad = config(0.0, 1);
        bad.x_max = bad.x_min;
        assert_eq!(generate_sample(&model, &bad).unwrap_err().exit_code(), 2);

        let mut bad = config(0.0, 1);
        bad.x_min = -1e308;
        bad.x_max = 1e308;
        assert_eq!(generate_sample(&model, &bad).unwrap_err().exit_code(), 2);
    }
}
