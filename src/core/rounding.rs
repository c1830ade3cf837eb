use crate::domain::model::RoundingPolicy;

/// Magnitude from which every f64 is already a whole number.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds `value` to `policy.precision` decimal places.
///
/// Ties go away from zero, or to the even neighbour when `bankers_rounding`
/// is set. Values too large to carry the requested decimals come back
/// unchanged.
pub fn round_to(value: f64, policy: RoundingPolicy) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(policy.precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }
    let rounded = if policy.bankers_rounding {
        scaled.round_ties_even()
    } else {
        scaled.round()
    };
    rounded / factor
}
