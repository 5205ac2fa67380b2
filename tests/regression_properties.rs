use approx::assert_relative_eq;
use fit_curves::{AnyModel, FitError, FittableModel, Power, SimpleLinear};

const POWER_X: [f64; 11] = [17.6, 26.0, 31.9, 38.9, 45.8, 51.2, 58.1, 64.7, 66.7, 80.8, 82.9];
const POWER_Y: [f64; 11] = [159.9, 206.9, 236.8, 269.9, 300.6, 323.6, 351.7, 377.6, 384.1, 437.2, 444.7];

// ============================================================================
// Simple linear
// ============================================================================

#[test]
fn test_get_y_matches_predict_for_every_input() {
    let x = [0.3, 1.7, 2.2, 4.9, 5.5, 8.0];
    let y = [1.2, 3.9, 4.1, 10.2, 10.8, 16.5];
    let model = SimpleLinear::fit(&x, &y).unwrap();
    for &xi in &x {
        assert_eq!(model.get_y(xi), model.predict(&[xi])[0]);
    }
}

#[test]
fn test_decreasing_line() {
    let model = SimpleLinear::fit(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 8.0, 6.0, 4.0, 2.0, 0.0]).unwrap();
    assert_eq!(model.slope(), -2.0);
    assert_eq!(model.intercept(), 10.0);
    assert_eq!(model.equation(Some(0)), "f(x) = -2x + 10");
}

#[test]
fn test_constant_function() {
    let model = SimpleLinear::fit(&[0.0, 1.0, 2.0, 3.0], &[2.0, 2.0, 2.0, 2.0]).unwrap();
    assert_eq!(model.slope(), 0.0);
    assert_eq!(model.equation(Some(2)), "f(x) = 2");
}

#[test]
fn test_negative_intercept_formatting() {
    let model = SimpleLinear::fit(&[-1.0, 0.0, 1.0], &[-2.0, -1.0, 0.0]).unwrap();
    assert_eq!(model.equation(None), "f(x) = x - 1");
}

#[test]
fn test_mismatched_lengths() {
    let err = SimpleLinear::fit(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(err, FitError::DimensionMismatch { x_len: 3, y_len: 2 }));

    let model = SimpleLinear::new(1.0, 0.0);
    let err = model.score(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert!(matches!(err, FitError::DimensionMismatch { .. }));
}

// ============================================================================
// Power
// ============================================================================

#[test]
fn test_power_reference_dataset() {
    let model = Power::fit(&POWER_X, &POWER_Y).unwrap();
    assert_relative_eq!(model.coefficient(), 24.13, epsilon = 0.005);
    assert_relative_eq!(model.exponent(), 0.66, epsilon = 0.005);

    let score = model.score(&POWER_X, &POWER_Y).unwrap();
    assert_eq!(score.r2(Some(6)), 0.999987);
}

#[test]
fn test_power_scores_validation_set() {
    let model = Power::fit(&POWER_X[..6], &POWER_Y[..6]).unwrap();
    let score = model.score(&POWER_X[6..], &POWER_Y[6..]).unwrap();
    assert!(score.r2(None) > 0.99);
}

// ============================================================================
// Score
// ============================================================================

#[test]
fn test_r2_is_r_squared() {
    let linear = SimpleLinear::fit(&POWER_X, &POWER_Y).unwrap();
    let power = Power::fit(&POWER_X, &POWER_Y).unwrap();
    for score in [
        linear.score(&POWER_X, &POWER_Y).unwrap(),
        power.score(&POWER_X, &POWER_Y).unwrap(),
    ] {
        assert_eq!(score.r2(None), score.r(None) * score.r(None));
    }
}

#[test]
fn test_scalar_inputs_score_and_predict() {
    let model = SimpleLinear::new(2.0, 1.0);
    assert_eq!(model.predict(3.0), vec![7.0]);
    // A single observation is a valid (if degenerate) observation set.
    let score = model.score(3.0, 8.0).unwrap();
    assert_relative_eq!(score.chi2(None), 1.0 / 8.0);
    assert_relative_eq!(score.rmsd(None), 1.0);
}

#[test]
fn test_unknown_statistic() {
    let score = SimpleLinear::new(1.0, 0.0).score(&[1.0, 2.0], &[1.0, 2.5]).unwrap();
    assert!(matches!(
        score.get("mae", None),
        Err(FitError::InvalidProperty { ref name, type_name: "Score" }) if name == "mae"
    ));
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn test_record_round_trip_both_families() {
    let linear = SimpleLinear::fit(&POWER_X, &POWER_Y).unwrap();
    let record = linear.to_record();
    assert_eq!(SimpleLinear::from_record(record.clone()).unwrap().to_record(), record);

    let power = Power::fit(&POWER_X, &POWER_Y).unwrap();
    let record = power.to_record();
    assert_eq!(Power::from_record(record.clone()).unwrap().to_record(), record);
}

#[test]
fn test_json_round_trip_is_lossless() {
    let power = Power::fit(&POWER_X, &POWER_Y).unwrap();
    let restored = Power::from_json(&power.to_json().unwrap()).unwrap();
    assert_eq!(restored.coefficient(), power.coefficient());
    assert_eq!(restored.exponent(), power.exponent());

    let any = AnyModel::from_json(&power.to_json().unwrap()).unwrap();
    assert_eq!(any.to_json().unwrap(), power.to_json().unwrap());
}

#[test]
fn test_cross_family_import_is_type_mismatch() {
    let json = SimpleLinear::new(1.0, 2.0).to_json().unwrap();
    assert!(matches!(Power::from_json(&json), Err(FitError::TypeMismatch { .. })));

    let json = Power::new(1.0, 2.0).to_json().unwrap();
    assert!(matches!(SimpleLinear::from_json(&json), Err(FitError::TypeMismatch { .. })));
}

#[test]
fn test_linear_record_field_order() {
    let json = SimpleLinear::new(3.0, -1.5).to_json().unwrap();
    let positions: Vec<usize> = ["\"name\"", "\"slope\"", "\"intercept\"", "\"coefficients\"", "\"equation\""]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(json.contains("\"coefficients\":[-1.5,3.0]"));
    assert!(json.contains("\"equation\":\"f(x) = 3x - 1.5\""));
}
