//! Region 1: compressed liquid.
//!
//! A single 34-term dimensionless Gibbs free energy series in reduced
//! pressure and reduced temperature. All physical properties derive from
//! the series and its first and second partial derivatives.

use crate::error::PropertyError;
use crate::region::{GAS_CONSTANT, REGION_3_MIN_PRESSURE, saturation};
use crate::solve;

/// Reducing temperature, K.
const T_STAR: f64 = 1386.0;

/// Reducing pressure, MPa.
const P_STAR: f64 = 16.53;

/// Reduced pressure exponents of the Gibbs series.
const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21, 23,
    29, 30, 31, 32,
];

/// Reduced temperature exponents of the Gibbs series.
const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8, -11,
    -6, -29, -31, -38, -39, -40, -41,
];

/// Coefficients of the Gibbs series.
const N: [f64; 34] = [
    0.14632971213167e0,
    -0.84548187169114e0,
    -0.37563603672040e1,
    0.33855169168385e1,
    -0.95791963387872e0,
    0.15772038513228e0,
    -0.16616417199501e-1,
    0.81214629983568e-3,
    0.28319080123804e-3,
    -0.60706301565874e-3,
    -0.18990068218419e-1,
    -0.32529748770505e-1,
    -0.21841717175414e-1,
    -0.52838357969930e-4,
    -0.47184321073267e-3,
    -0.30001780793026e-3,
    0.47661393906987e-4,
    -0.44141845330846e-5,
    -0.72694996297594e-15,
    -0.31679644845054e-4,
    -0.28270797985312e-5,
    -0.85205128120103e-9,
    -0.22425281908000e-5,
    -0.65171222895601e-6,
    -0.14341729937924e-12,
    -0.40516996860117e-6,
    -0.12734301741641e-8,
    -0.17424871230634e-9,
    -0.68762131295531e-18,
    0.14478307828521e-19,
    0.26335781662795e-22,
    -0.11947622640071e-22,
    0.18228094581404e-23,
    -0.93537087292458e-25,
];

/// Dimensionless Gibbs free energy.
fn gibbs(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * (7.1 - pi).powi(I[k]) * (tau - 1.222).powi(J[k]);
    }
    sum
}

/// First partial with respect to reduced pressure.
fn gibbs_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum -= N[k] * f64::from(I[k]) * (7.1 - pi).powi(I[k] - 1) * (tau - 1.222).powi(J[k]);
    }
    sum
}

/// Second partial with respect to reduced pressure.
fn gibbs_pi_pi(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k]
            * f64::from(I[k] * (I[k] - 1))
            * (7.1 - pi).powi(I[k] - 2)
            * (tau - 1.222).powi(J[k]);
    }
    sum
}

/// First partial with respect to reduced temperature.
fn gibbs_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k] * (7.1 - pi).powi(I[k]) * f64::from(J[k]) * (tau - 1.222).powi(J[k] - 1);
    }
    sum
}

/// Second partial with respect to reduced temperature.
fn gibbs_tau_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum += N[k]
            * (7.1 - pi).powi(I[k])
            * f64::from(J[k] * (J[k] - 1))
            * (tau - 1.222).powi(J[k] - 2);
    }
    sum
}

/// Mixed partial with respect to reduced pressure and temperature.
fn gibbs_pi_tau(pi: f64, tau: f64) -> f64 {
    let mut sum = 0.0;
    for k in 0..N.len() {
        sum -= N[k]
            * f64::from(I[k])
            * (7.1 - pi).powi(I[k] - 1)
            * f64::from(J[k])
            * (tau - 1.222).powi(J[k] - 1);
    }
    sum
}

/// Specific volume (m³/kg) at pressure (MPa) and temperature (K).
pub(crate) fn specific_volume(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    // p is in MPa while R is in kJ/(kg·K); the 1e3 reconciles the units.
    pi * gibbs_pi(pi, tau) * GAS_CONSTANT * temperature / (pressure * 1e3)
}

/// Specific enthalpy (kJ/kg) at pressure (MPa) and temperature (K).
pub(crate) fn enthalpy(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    tau * gibbs_tau(pi, tau) * GAS_CONSTANT * temperature
}

/// Specific entropy (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn entropy(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    (tau * gibbs_tau(pi, tau) - gibbs(pi, tau)) * GAS_CONSTANT
}

/// Isobaric heat capacity (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn isobaric_heat_capacity(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    -tau * tau * gibbs_tau_tau(pi, tau) * GAS_CONSTANT
}

/// Isochoric heat capacity (kJ/kg/K) at pressure (MPa) and temperature (K).
pub(crate) fn isochoric_heat_capacity(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    let part1 = -tau * tau * gibbs_tau_tau(pi, tau);
    let part2 = (gibbs_pi(pi, tau) - tau * gibbs_pi_tau(pi, tau)).powi(2) / gibbs_pi_pi(pi, tau);
    (part1 + part2) * GAS_CONSTANT
}

/// Speed of sound (m/s) at pressure (MPa) and temperature (K).
pub(crate) fn speed_of_sound(pressure: f64, temperature: f64) -> f64 {
    let pi = pressure / P_STAR;
    let tau = T_STAR / temperature;
    let result = gibbs_pi(pi, tau).powi(2)
        / ((gibbs_pi(pi, tau) - tau * gibbs_pi_tau(pi, tau)).powi(2)
            / (tau * tau * gibbs_tau_tau(pi, tau))
            - gibbs_pi_pi(pi, tau))
        * GAS_CONSTANT
        * temperature;
    // The derivation is in Pa while p is in MPa; the 1e3 reconciles the units.
    (result * 1e3).sqrt()
}

/// Temperature (K) from pressure (MPa) and enthalpy (kJ/kg).
///
/// Inverts [`enthalpy`] over a bracket spanning the full region-1
/// temperature range at this pressure, padded by ±1 K so enthalpies
/// computed exactly at a boundary stay bracketed.
pub(crate) fn temperature_ph(pressure: f64, enthalpy_target: f64) -> Result<f64, PropertyError> {
    let t_low = 273.15 - 1.0;
    let t_high = if pressure < REGION_3_MIN_PRESSURE {
        saturation::temperature(pressure) + 1.0
    } else {
        623.15 + 1.0
    };
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

    // IF97 release, table 5: (3 MPa, 300 K), (80 MPa, 300 K), (3 MPa, 500 K).

    #[test]
    fn matches_release_specific_volume() {
        assert_relative_eq!(specific_volume(3.0, 300.0), 0.100215168e-2, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(80.0, 300.0), 0.971180894e-3, max_relative = 1e-7);
        assert_relative_eq!(specific_volume(3.0, 500.0), 0.120241800e-2, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_enthalpy() {
        assert_relative_eq!(enthalpy(3.0, 300.0), 0.115331273e3, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(80.0, 300.0), 0.184142828e3, max_relative = 1e-7);
        assert_relative_eq!(enthalpy(3.0, 500.0), 0.975542239e3, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_entropy() {
        assert_relative_eq!(entropy(3.0, 300.0), 0.392294792e0, max_relative = 1e-7);
        assert_relative_eq!(entropy(80.0, 300.0), 0.368563852e0, max_relative = 1e-7);
        assert_relative_eq!(entropy(3.0, 500.0), 0.258041912e1, max_relative = 1e-7);
    }

    #[test]
    fn matches_release_heat_capacity_and_sound_speed() {
        assert_relative_eq!(
            isobaric_heat_capacity(3.0, 300.0),
            0.417301218e1,
            max_relative = 1e-7
        );
        assert_relative_eq!(speed_of_sound(3.0, 300.0), 0.150773921e4, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(80.0, 300.0), 0.163469054e4, max_relative = 1e-7);
        assert_relative_eq!(speed_of_sound(3.0, 500.0), 0.124071337e4, max_relative = 1e-7);
    }

    #[test]
    fn isochoric_capacity_is_below_isobaric() {
        for (p, t) in [(3.0, 300.0), (80.0, 300.0), (3.0, 500.0)] {
            let cv = isochoric_heat_capacity(p, t);
            assert!(cv > 0.0);
            assert!(cv < isobaric_heat_capacity(p, t));
        }
    }

    #[test]
    fn inverts_enthalpy_to_temperature() {
        for (p, t) in [(3.0, 300.0), (80.0, 300.0), (3.0, 500.0), (30.0, 500.0)] {
            let h = enthalpy(p, t);
            assert_relative_eq!(temperature_ph(p, h).unwrap(), t, epsilon = 1e-8);
        }
    }
}
