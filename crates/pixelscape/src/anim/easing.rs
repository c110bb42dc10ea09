// anim/easing.rs
//
// Pure easing helpers for animation parameters.
// No dependencies on scene state — just math on f64 (JS `number` semantics).
//
// Nothing here validates its arguments. Zero spans propagate NaN/Infinity
// the way IEEE-754 division does.

/// Restrict `x` to `[min, max]`.
///
/// Evaluated as `min(max, max(min, x))` with `NaN` in any argument
/// yielding `NaN`, so `min > max` yields `max`.
/// Callers must keep `min <= max` for this to behave as a clamp.
/// Unlike [`f64::clamp`] this never panics.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    if min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    let lower = if x < min { min } else { x };
    if lower > max {
        max
    } else {
        lower
    }
}

/// Cubic ease in/out: `3x² − 2x³`.
///
/// Maps `0 → 0`, `0.5 → 0.5`, `1 → 1`. Not clamped: inputs outside
/// `[0, 1]` extrapolate the polynomial.
#[inline]
pub fn ease_in_out_cubic(x: f64) -> f64 {
    x.powi(2) * 3.0 - x.powi(3) * 2.0
}

/// Linear ramp from 0 at `edge0` to 1 at `edge1`, clamped outside.
///
/// Precondition: `edge0 != edge1`.
#[inline]
pub fn linear_step(x: f64, edge0: f64, edge1: f64) -> f64 {
    let w = edge1 - edge0;
    // slope with a rise of 1
    let m = 1.0 / w;
    let y0 = -m * edge0;
    clamp(y0 + m * x, 0.0, 1.0)
}

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
