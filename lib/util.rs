use glam::DVec3;

pub fn is_near_zero(v: DVec3) -> bool {
    return v.abs_diff_eq(DVec3::ZERO, f64::EPSILON);
}

/// Component of `v` along `onto`. Projecting onto a zero vector yields zero.
pub fn project(v: DVec3, onto: DVec3) -> DVec3 {
    let denom = onto.length_squared();
    if denom == 0.0 {
        return DVec3::ZERO;
    }
    return onto * (v.dot(onto) / denom);
}

/// Mirror `v` about `normal`: `v + 2 proj(-v, normal)`.
pub fn reflect(v: DVec3, normal: DVec3) -> DVec3 {
    return v + 2.0 * project(-v, normal);
}

/// Normalize `v`, or fail with `what` when it has no direction.
pub(crate) fn unit(v: DVec3, what: &str) -> Result<DVec3, String> {
    if !v.is_finite() || is_near_zero(v) {
        return Err(format!("{} must be a non-zero vector, got {}", what, v));
    }
    return Ok(v.normalize());
}
