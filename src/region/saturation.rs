//! The saturation curve (IF97 region 4) and two-phase mixture properties.
//!
//! Both directions of the curve are closed-form quadratic constructions
//! from the same ten coefficients, so they invert each other without
//! iteration. Mixture volume and entropy inside the two-phase dome follow
//! the lever rule between the saturated-liquid (region 1) and
//! saturated-vapor (region 2) values at the saturation temperature.

use crate::error::PropertyError;
use crate::region::{REGION_3_MIN_PRESSURE, one, two};

/// Coefficients of the dimensionless saturation equations.
const N: [f64; 10] = [
    0.11670521452767e4,
    -0.72421316703206e6,
    -0.17073846940092e2,
    0.12020824702470e5,
    -0.32325550322333e7,
    0.14915108613530e2,
    -0.48232657361591e4,
    0.40511340542057e6,
    -0.23855557567849e0,
    0.65017534844798e3,
];

/// Saturation pressure (MPa) at a temperature (K) on [273.15, 647.096].
pub(crate) fn pressure(temperature: f64) -> f64 {
    let theta = temperature + N[8] / (temperature - N[9]);
    let theta_sq = theta * theta;
    let a = theta_sq + N[0] * theta + N[1];
    let b = N[2] * theta_sq + N[3] * theta + N[4];
    let c = N[5] * theta_sq + N[6] * theta + N[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature (K) at a pressure (MPa) on (0, 22.064].
pub(crate) fn temperature(pressure: f64) -> f64 {
    let beta = pressure.powf(0.25);
    let beta_sq = beta * beta;
    let e = beta_sq + N[2] * beta + N[5];
    let f = N[0] * beta_sq + N[3] * beta + N[6];
    let g = N[1] * beta_sq + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

/// Mixture specific volume (m³/kg) inside the two-phase dome.
///
/// Valid for pressures up to the region-3 threshold, where the saturated
/// liquid and vapor states lie in regions 1 and 2. The interpolation
/// reproduces the saturated endpoints exactly when `enthalpy` equals the
/// liquid or vapor saturation enthalpy.
pub(crate) fn mixture_volume(pressure: f64, enthalpy: f64) -> Result<f64, PropertyError> {
    if pressure > REGION_3_MIN_PRESSURE {
        return Err(PropertyError::PressureOutOfRange { pressure });
    }
    let t_sat = temperature(pressure);
    let h_liquid = one::enthalpy(pressure, t_sat);
    let h_vapor = two::enthalpy(pressure, t_sat);
    let v_liquid = one::specific_volume(pressure, t_sat);
    let v_vapor = two::specific_volume(pressure, t_sat);
    let quality = (enthalpy - h_liquid) / (h_vapor - h_liquid);
    Ok(quality * (v_vapor - v_liquid) + v_liquid)
}

/// Mixture specific entropy (kJ/kg/K) inside the two-phase dome.
///
/// Same construction and validity as [`mixture_volume`].
pub(crate) fn mixture_entropy(pressure: f64, enthalpy: f64) -> Result<f64, PropertyError> {
    if pressure > REGION_3_MIN_PRESSURE {
        return Err(PropertyError::PressureOutOfRange { pressure });
    }
    let t_sat = temperature(pressure);
    let h_liquid = one::enthalpy(pressure, t_sat);
    let h_vapor = two::enthalpy(pressure, t_sat);
    let s_liquid = one::entropy(pressure, t_sat);
    let s_vapor = two::entropy(pressure, t_sat);
    let quality = (enthalpy - h_liquid) / (h_vapor - h_liquid);
    Ok(quality * (s_vapor - s_liquid) + s_liquid)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_release_saturation_pressures() {
        // IF97 release, table 35.
        assert_relative_eq!(pressure(300.0), 0.353658941e-2, max_relative = 1e-7);
        assert_relative_eq!(pressure(500.0), 0.263889776e1, max_relative = 1e-7);
        assert_relative_eq!(pressure(600.0), 0.123443146e2, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_saturation_temperatures() {
        // IF97 release, table 36.
        assert_relative_eq!(temperature(0.1), 0.372755919e3, max_relative = 1e-7);
        assert_relative_eq!(temperature(1.0), 0.453035632e3, max_relative = 1e-7);
        assert_relative_eq!(temperature(10.0), 0.584149488e3, max_relative = 1e-7);
    }

    #[test]
    fn curve_is_its_own_inverse() {
        for t in [280.0, 330.0, 400.0, 500.0, 600.0, 640.0, 647.0] {
            assert_relative_eq!(temperature(pressure(t)), t, epsilon = 1e-6);
        }
    }

    #[test]
    fn pressure_is_strictly_increasing() {
        let mut previous = pressure(273.15);
        let mut t = 273.65;
        while t < 647.096 {
            let current = pressure(t);
            assert!(current > previous, "p_sat not increasing at {t} K");
            previous = current;
            t += 0.5;
        }
    }

    #[test]
    fn lever_rule_reproduces_saturated_endpoints() {
        let p = 5.0;
        let t_sat = temperature(p);
        let h_liquid = one::enthalpy(p, t_sat);
        let h_vapor = two::enthalpy(p, t_sat);

        assert_relative_eq!(
            mixture_volume(p, h_liquid).unwrap(),
            one::specific_volume(p, t_sat),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixture_volume(p, h_vapor).unwrap(),
            two::specific_volume(p, t_sat),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixture_entropy(p, h_liquid).unwrap(),
            one::entropy(p, t_sat),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            mixture_entropy(p, h_vapor).unwrap(),
            two::entropy(p, t_sat),
            max_relative = 1e-12
        );
    }

    #[test]
    fn lever_rule_midpoint_is_property_mean() {
        let p = 5.0;
        let t_sat = temperature(p);
        let h_mid = (one::enthalpy(p, t_sat) + two::enthalpy(p, t_sat)) / 2.0;
        let v_mean = (one::specific_volume(p, t_sat) + two::specific_volume(p, t_sat)) / 2.0;
        assert_relative_eq!(mixture_volume(p, h_mid).unwrap(), v_mean, max_relative = 1e-12);
    }

    #[test]
    fn mixture_properties_reject_high_pressure() {
        assert!(matches!(
            mixture_volume(20.0, 2000.0),
            Err(PropertyError::PressureOutOfRange { .. })
        ));
    }
}
