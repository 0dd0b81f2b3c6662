use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

/// Upper tail of the standard normal, 1 - Φ(z), without cancellation for
/// large z.
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}
