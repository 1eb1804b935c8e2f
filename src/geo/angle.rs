use crate::constants::MILS_PER_CIRCLE;

/// Floored modulus: result lies in `[0, m)` for any finite `x` and `m > 0`
///
/// Unlike `%`, negative inputs wrap to the positive side. Values already in
/// `[0, m)` are returned unchanged.
pub fn modulo(x: f64, m: f64) -> f64 {
    let r = x.rem_euclid(m);
    // rem_euclid can round up to exactly m for tiny negative x
    if r >= m { 0.0 } else { r }
}

/// Wrap `n` into the half-open range `[min, max)`
///
/// `n` is returned untouched when already in range, so wrapping is
/// idempotent. Requires `max > min`.
pub fn wrap(n: f64, min: f64, max: f64) -> f64 {
    debug_assert!(max > min, "wrap requires max > min");
    if min <= n && n < max {
        return n;
    }
    let wrapped = min + modulo(n - min, max - min);
    if wrapped >= max { min } else { wrapped }
}

/// Convert degrees to NATO mils (6400 per circle, 160/9 per degree)
pub fn degrees_to_mils(degrees: f64) -> f64 {
    degrees * MILS_PER_CIRCLE / 360.0
}
