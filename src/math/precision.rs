//! Decimal precision helpers shared by `Score` accessors and equation rendering.

/// Round `value` to `precision` decimal places (half away from zero).
///
/// `None` returns the value untouched. When scaling by `10^precision` leaves
/// the finite range the value is returned as is: an `f64` carries no digits
/// that far out, so rounding there cannot change it.
pub fn round_to(value: f64, precision: Option<u32>) -> f64 {
    let Some(digits) = precision else {
        return value;
    };
    let rounded = match i32::try_from(digits) {
        Ok(exp) => {
            let scale = 10f64.powi(exp);
            let scaled = value * scale;
            if scale.is_finite() && scaled.is_finite() {
                scaled.round() / scale
            } else {
                value
            }
        }
        Err(_) => value,
    };
    // Keep `-0.0` out of rendered output.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Render a number for display: rounded, then Rust's shortest `Display` form
/// (`2.0` renders as `2`).
pub fn format_number(value: f64, precision: Option<u32>) -> String {
    format!("{}", round_to(value, precision))
}
