//! Projectile-motion formulas and scalar smoothing

/// Gravity (negative, downward) that makes a jump peak at `max_jump_height`
/// after `time_to_apex` seconds.
pub fn object_gravity(max_jump_height: f32, time_to_apex: f32) -> f32 {
    -(2.0 * max_jump_height) / (time_to_apex * time_to_apex)
}

/// Launch velocity that reaches zero vertical speed after `time_to_apex`
pub fn jump_velocity(gravity: f32, time_to_apex: f32) -> f32 {
    gravity.abs() * time_to_apex
}

/// Launch velocity that peaks at exactly `min_jump_height`
pub fn min_jump_velocity(gravity: f32, min_jump_height: f32) -> f32 {
    (2.0 * gravity.abs() * min_jump_height).sqrt()
}

/// Critically damped approach of `current` toward `target`.
///
/// `velocity` is the smoothing accumulator carried between calls. The
/// result never passes the target.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;

    let output = target + (change + temp) * decay;

    // Overshoot guard
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }

    output
}
