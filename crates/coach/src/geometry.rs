use base::Vec2;

/// Angle reported when a direction is undefined.
pub const NEUTRAL_ANGLE: f32 = 180.0;

/// Angle in degrees at vertex `b` between the rays `b->a` and `b->c`.
///
/// The result is always in `[0, 180]`. The cosine is clamped to `[-1, 1]`
/// before `acos`. If `a` or `c` coincides with `b` one ray has no direction
/// and the result is `NEUTRAL_ANGLE` (a straight limb).
pub fn angle_at(a: Vec2<f32>, b: Vec2<f32>, c: Vec2<f32>) -> f32 {
    let ba = a - b;
    let bc = c - b;
    let norms = ba.length() * bc.length();
    if norms <= f32::EPSILON || !norms.is_finite() {
        return NEUTRAL_ANGLE;
    }
    let cosine = (ba.dot(bc) / norms).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}
