/// Depth comparison tolerance.
///
/// Every depth-ordering decision in profile assembly goes through these two
/// predicates, so the "strictly greater" and "equal within tolerance" tests
/// share one definition and cannot drift apart.

/// Absolute tolerance for comparing breakpoint depths [m].
pub const DEPTH_EPSILON: f64 = 1.0e-10;

/// True when `a` exceeds `b` by more than the tolerance.
pub fn epsilon_greater(a: f64, b: f64) -> bool {
    a > b + DEPTH_EPSILON
}

/// True when `a` and `b` lie within the tolerance of each other.
pub fn epsilon_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= DEPTH_EPSILON
}
