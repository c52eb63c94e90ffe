//! The boundary curve between regions 2 and 3.
//!
//! A simple quadratic in temperature, single-valued and monotonic over
//! 623.15 K ≤ T ≤ 863.15 K (16.5292 MPa ≤ p ≤ 100 MPa), with a
//! closed-form inverse.

/// Coefficients of the B23 equation.
const N: [f64; 5] = [
    0.34805185628969e3,
    -0.11671859879975e1,
    0.10192970039326e-2,
    0.57254459862746e3,
    0.13918839778870e2,
];

/// Pressure (MPa) on the region-2/3 boundary at a temperature (K).
pub(crate) fn pressure(temperature: f64) -> f64 {
    N[0] + N[1] * temperature + N[2] * temperature * temperature
}

/// Temperature (K) on the region-2/3 boundary at a pressure (MPa).
pub(crate) fn temperature(pressure: f64) -> f64 {
    N[3] + ((pressure - N[4]) / N[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_release_check_pair() {
        // IF97 release, eq. 5/6 verification: T = 623.15 K, p = 16.5291643 MPa.
        assert_relative_eq!(pressure(623.15), 0.165291643e2, max_relative = 1e-7);
        assert_relative_eq!(temperature(0.165291643e2), 0.62315e3, max_relative = 1e-7);
    }

    #[test]
    fn curve_is_its_own_inverse() {
        for t in [623.15, 700.0, 800.0, 863.15] {
            assert_relative_eq!(temperature(pressure(t)), t, epsilon = 1e-6);
        }
    }
}
