//! Region 2: superheated vapor.
//!
//! The dimensionless Gibbs free energy splits into an ideal-gas part
//! (a series in reduced temperature plus `ln π`) and a residual part
//! (a 43-term series in reduced pressure and shifted reduced temperature).

use crate::error::PropertyError;
use crate::region::{
    GAS_CONSTANT, REGION_2_MAX_TEMPERATURE, REGION_3_MIN_PRESSURE, b23, saturation,
};
use crate::solve;

/// Reducing temperature, K.
const T_STAR: f64 = 540.0;

/// Ideal-gas reduced temperature exponents.
const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];

/// Ideal-gas coefficients.
const N0: [f64; 9] = [
    -0.96927686500217e1,
    0.10086655968018e2,
    -0.56087911283020e-2,
    0.71452738081455e-1,
    -0.40710498223928e0,
    0.14240819171444e1,
    -0.43839511319450e1,
    -0.28408632460772e0,
    0.21268463753307e-1,
];

/// Residual reduced pressure exponents.
const I: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10,
    10, 16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];

/// Residual reduced temperature exponents.
const J: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];

/// Residual coefficients.
const N: [f64; 43] = [
    -0.17731742473213e-2,
    -0.17834862292358e-1,
    -0.45996013696365e-1,
    -0.57581259083432e-1,
    -0.50325278727930e-1,
    -0.33032641670203e-4,
    -0.18948987516315e-3,
    -0.39392777243355e-2,
    -0.43797295650573e-1,
    -0.26674547914087e-4,
    0.20481737692309e-7,
    0.43870667284435e-6,
    -0.32277677238570e-4,
    -0.15033924542148e-2,
    -0.40668253562649e-1,
    -0.78847309559367e-9,
    0.12790717852285e-7,
    0.48225372718507e-6,
    0.22922076337661e-5,
    -0.16714766451061e-10,
    -0.21171472321355e-2,
    -0.23895741934104e2,
    -0.59059564324270e-17,
    -0.12621808899101e-5,
    -0.38946842435739e-1,
    0.11256211360459e-10,
    -0.82311340897998e1,
    0.19809712802088e-7,
    0.10406965210174e-18,
    -0.10234747095929e-12,
    -0.10018179379511e-8,
    -0.80882908646985e-10,
    0.10693031879409e0,
    -0.33662250574171e0,
    0.89185845355421e-24,
    0.30629316876232e-12,
    -0.42002467698208e-5,
    -0.59056029685639e-25,
    0.37826947613457e-5,
    -0.12768608934681e-14,
    0.73087610595061e-28,
    0.55414715350778e-16,
    -0.94369707241210e-6,
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
        sum += N[k] * pi.powi(I[k]) * (tau - 0.5).powi(J[k]);
    }
    sum
}

fn residual_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * f64::from(I[k]) * pi.powi(I[k] - 1) * (tau - 0.5).powi(J[k]);
    }
    sum
}

fn residual_pi_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * f64::from(I[k] * (I[k] - 1)) * pi.powi(I[k] - 2) * (tau - 0.5).powi(J[k]);
    }
    sum
}

fn residual_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * pi.powi(I[k]) * f64::from(J[k]) * (tau - 0.5).powi(J[k] - 1);
    }
    sum
}

fn residual_tau_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * pi.powi(I[k]) * f64::from(J[k] * (J[k] - 1)) * (tau - 0.5).powi(J[k] - 2);
    }
    sum
}

fn residual_pi_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k]
            * f64::from(I[k])
            * pi.powi(I[k] - 1)
            * f64::from(J[k])
            * (tau - 0.5).powi(J[k] - 1);
    }
    sum
}

/// Specific volume (m³/kg) at pressure (MPa) and temperature (K).
pub(crate) fn specific_volume(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure;
    let tau = T_STAR / temperature;
    // The ideal-gas π-derivative is 1/π exactly.
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

/// Temperature (K) from pressure (MPa) and enthalpy (kJ/kg).
///
/// The lower end of the bracket is the saturation temperature or, above
/// the region-3 pressure threshold, the region-2/3 boundary; both padded
/// by 1 K. The upper end is the 1073.15 K region ceiling plus 1 K.
pub(crate) fn temperature_ph(pressure: f64, enthalpy_target: f64) -> Result<f64, PropertyError> {
    let t_low = if pressure < REGION_3_MIN_PRESSURE {
        saturation::temperature(pressure) - 1.0
    } else {
        b23::temperature(pressure) - 1.0
    };
    let t_high = REGION_2_MAX_TEMPERATURE + 1.0;
    solve::solve_second(
        |p, t| Ok(enthalpy(p, t)),
        pressure,
        t_low,
        t_high,
        enthalpy_target,
        solve::TOLERANCE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    // IF97 release, table 15: (0.0035 MPa, 300 K), (0.0035 MPa, 700 K),
    // (30 MPa, 700 K).

    #[test]
    fn matches_release_specific_volume() {
        assert_relative_eq!(specific_volume(0.0035, 300.0), 0.394913866e2, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(0.0035, 700.0), 0.923015898e2, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(30.0, 700.0), 0.542946619e-2, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_enthalpy() {
        assert_relative_eq!(enthalpy(0.0035, 300.0), 0.254991145e4, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(0.0035, 700.0), 0.333568375e4, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(30.0, 700.0), 0.263149474e4, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_entropy() {
        assert_relative_eq!(entropy(0.0035, 300.0), 0.852238967e1, max_relative = 1e-7);
        assert_relative_eq!(entropy(0.0035, 700.0), 0.101749996e2, max_relative = 1e-7);
        assert_relative_eq!(entropy(30.0, 700.0), 0.517540298e1, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_heat_capacity_and_sound_speed() {
        assert_relative_eq!(
            isobaric_heat_capacity(0.0035, 300.0),
            0.191300162e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(
            isobaric_heat_capacity(30.0, 700.0),
            0.103505092e2,
            max_relative = 1e-7
        );
        assert_relative_eq!(speed_of_sound(0.0035, 300.0), 0.427920172e3, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(0.0035, 700.0), 0.644289068e3, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(30.0, 700.0), 0.480386523e3, max_relative = 1e-7);
    }

    #[test]
    fn isochoric_capacity_is_below_isobaric() {
        for (p, t) in [(0.0035, 300.0), (0.0035, 700.0), (30.0, 700.0)] {
            let cv = isochoric_heat_capacity(p, t);
            assert!(cv > 0.0);
            assert!(cv < isobaric_heat_capacity(p, t));
        }
    }

    #[test]
    fn inverts_enthalpy_to_temperature() {
        for (p, t) in [(0.0035, 300.0), (0.0035, 700.0), (30.0, 700.0), (3.0, 600.0)] {
            let h = enthalpy(p, t);
            assert_relative_eq!(temperature_ph(p, h).unwrap(), t, epsilon = 1e-8);
        }
    }
}
