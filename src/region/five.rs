//! Region 5: high-temperature steam above 1073.15 K.
//!
//! Structurally the same ideal-plus-residual Gibbs split as region 2, but
//! with only six terms in each part and a plain (unshifted) reduced
//! temperature in the residual.

use crate::error::PropertyError;
use crate::region::{GAS_CONSTANT, MAX_TEMPERATURE, REGION_2_MAX_TEMPERATURE};
use crate::solve;

/// Reducing temperature, K.
const T_STAR: f64 = 1000.0;

/// Ideal-gas reduced temperature exponents.
const J0: [i32; 6] = [0, 1, -3, -2, -1, 2];

/// Ideal-gas coefficients.
const N0: [f64; 6] = [
    -0.13179983674201e2,
    0.68540841634434e1,
    -0.24805148933466e-1,
    0.36901534980333e0,
    -0.31161318213925e1,
    -0.32961626538917e0,
];

/// Residual reduced pressure exponents.
const I: [i32; 6] = [1, 1, 1, 2, 2, 3];

/// Residual reduced temperature exponents.
const J: [i32; 6] = [1, 2, 3, 3, 9, 7];

/// Residual coefficients.
const N: [f64; 6] = [
    0.15736404855259e-2,
    0.90153761673944e-3,
    -0.50270077677648e-2,
    0.22440037409485e-5,
    -0.41163275453471e-5,
    0.37919454822955e-7,
];

fn ideal(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N0.len() {
        sum += N0[k] * tau.powi(J0[k]);
    }
    pi.ln() + sum
}

fn ideal_tau(tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N0.len() {
        sum += N0[k] * f64::from(J0[k]) * tau.powi(J0[k] - 1);
    }
    sum
}

fn ideal_tau_tau(tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N0.len() {
        sum += N0[k] * f64::from(J0[k] * (J0[k] - 1)) * tau.powi(J0[k] - 2);
    }
    sum
}

fn residual(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * pi.powi(I[k]) * tau.powi(J[k]);
    }
    sum
}

fn residual_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * f64::from(I[k]) * pi.powi(I[k] - 1) * tau.powi(J[k]);
    }
    sum
}

fn residual_pi_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * f64::from(I[k] * (I[k] - 1)) * pi.powi(I[k] - 2) * tau.powi(J[k]);
    }
    sum
}

fn residual_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * pi.powi(I[k]) * f64::from(J[k]) * tau.powi(J[k] - 1);
    }
    sum
}

fn residual_tau_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * pi.powi(I[k]) * f64::from(J[k] * (J[k] - 1)) * tau.powi(J[k] - 2);
    }
    sum
}

fn residual_pi_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * f64::from(I[k]) * pi.powi(I[k] - 1) * f64::from(J[k]) * tau.powi(J[k] - 1);
    }
    sum
}

/// Specific volume (m³/kg) at pressure (MPa) and temperature (K).
pub(crate) fn specific_volume(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    (1.0 / pi + residual_pi(pi, tau)) * pi * GAS_CONSTANT * temperature / (pressure * 1e3)
}

/// Specific enthalpy (kJ/kg) at pressure (MPa) and temperature (K).
pub(crate) fn enthalpy(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    tau * (ideal_tau(tau) + residual_tau(pi, tau)) * GAS_CONSTANT * temperature
}

/// Specific entropy (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn entropy(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    GAS_CONSTANT
        * (tau * (ideal_tau(tau) + residual_tau(pi, tau)) - (ideal(pi, tau) + residual(pi, tau)))
}

/// Isobaric heat capacity (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn isobaric_heat_capacity(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    -tau * tau * (ideal_tau_tau(tau) + residual_tau_tau(pi, tau)) * GAS_CONSTANT
}

/// Isochoric heat capacity (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn isochoric_heat_capacity(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    let part1 = tau * tau * (ideal_tau_tau(tau) + residual_tau_tau(pi, tau));
    let zip = 1.0 + pi * residual_pi(pi, tau) - tau * pi * residual_pi_tau(pi, tau);
    let part2 = zip * zip / (1.0 - pi * pi * residual_pi_pi(pi, tau));
    (-part1 - part2) * GAS_CONSTANT
}

/// Speed of sound (m/s) at pressure (MPa) and temperature (K).
pub(crate) fn speed_of_sound(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    let top = 1.0 + 2.0 * pi * residual_pi(pi, tau) + (pi * residual_pi(pi, tau)).powi(2);
    let mut bottom = (1.0 + pi * residual_pi(pi, tau) - tau * pi * residual_pi_tau(pi, tau))
        .powi(2)
        / (tau * tau * (ideal_tau_tau(tau) + residual_tau_tau(pi, tau)));
    bottom += 1.0 - pi * pi * residual_pi_pi(pi, tau);
    (top / bottom * GAS_CONSTANT * temperature * 1e3).sqrt()
}

/// Temperature (K) from pressure (MPa) and enthalpy (kJ/kg), bracketed by
/// the full region span padded by ±1 K.
pub(crate) fn temperature_ph(pressure: f64, enthalpy_target: f64) -> Result<f64, PropertyError> {
    solve::solve_second(
        |p, t| Ok(enthalpy(p, t)),
        pressure,
        REGION_2_MAX_TEMPERATURE - 1.0,
        MAX_TEMPERATURE + 1.0,
        enthalpy_target,
        solve::TOLERANCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // IF97 release, table 42: (0.5 MPa, 1500 K), (30 MPa, 1500 K),
    // (30 MPa, 2000 K).

    #[test]
    fn matches_release_specific_volume() {
        assert_relative_eq!(specific_volume(0.5, 1500.0), 0.138455090e1, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(30.0, 1500.0), 0.230761299e-1, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(30.0, 2000.0), 0.311385219e-1, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_enthalpy() {
        assert_relative_eq!(enthalpy(0.5, 1500.0), 0.521976855e4, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(30.0, 1500.0), 0.516723514e4, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(30.0, 2000.0), 0.657122604e4, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_entropy() {
        assert_relative_eq!(entropy(0.5, 1500.0), 0.965408875e1, max_relative = 1e-7);
        assert_relative_eq!(entropy(30.0, 1500.0), 0.772970133e1, max_relative = 1e-7);
        assert_relative_eq!(entropy(30.0, 2000.0), 0.853640523e1, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_heat_capacity_and_sound_speed() {
        assert_relative_eq!(
            isobaric_heat_capacity(0.5, 1500.0),
            0.261609445e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            isobaric_heat_capacity(30.0, 1500.0),
            0.272724317e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            isobaric_heat_capacity(30.0, 2000.0),
            0.288569882e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(speed_of_sound(0.5, 1500.0), 0.917068690e3, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(30.0, 1500.0), 0.928548002e3, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(30.0, 2000.0), 0.106736948e4, max_relative = 1e-7);
    }

    #[test]
    fn isochoric_capacity_is_below_isobaric() {
        for (p, t) in [(0.5, 1500.0), (30.0, 1500.0), (30.0, 2000.0)] {
            let cv = isochoric_heat_capacity(p, t);
            assert!(cv > 0.0);
            assert!(cv < isobaric_heat_capacity(p, t));
        }
    }

    #[test]
    fn inverts_enthalpy_to_temperature() {
        for (p, t) in [(0.5, 1500.0), (30.0, 1500.0), (30.0, 2000.0), (1.0, 1200.0)] {
            let h = enthalpy(p, t);
            assert_relative_eq!(temperature_ph(p, h).unwrap(), t, epsilon = 1e-8);
        }
    }
}
