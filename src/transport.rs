//! Transport properties: dynamic viscosity and thermal conductivity.
//!
//! Both correlations are functions of temperature and density, so each
//! evaluation first resolves density through the equilibrium equation of
//! state for whichever region holds the statepoint. The reducing
//! constants here predate the current critical-point values and differ
//! from them slightly; they are part of the correlations.

use crate::error::PropertyError;
use crate::region::{Region, five, one, three, two};

/// Density (kg/m³) at pressure (MPa) and temperature (K), dispatched by
/// region.
fn density(pressure: f64, temperature: f64) -> Result<f64, PropertyError> {
    match Region::from_pt(pressure, temperature)? {
        Region::One => Ok(1.0 / one::specific_volume(pressure, temperature)),
        Region::Two => Ok(1.0 / two::specific_volume(pressure, temperature)),
        Region::Three => three::density(pressure, temperature),
        Region::Five => Ok(1.0 / five::specific_volume(pressure, temperature)),
        Region::Four => Err(PropertyError::RegionIndeterminate),
    }
}

/// Reducing temperature for the viscosity correlation, K.
const VIS_T_STAR: f64 = 647.226;

/// Reducing density for the viscosity correlation, kg/m³.
const VIS_D_STAR: f64 = 317.763;

/// Reducing viscosity, Pa·s.
const VIS_STAR: f64 = 55.071e-6;

/// Coefficients of the dilute-gas viscosity series.
const VIS_H0: [f64; 4] = [1.000000, 0.978197, 0.579829, -0.202354];

/// Inverse-temperature exponents of the dense-fluid viscosity series.
const VIS_I: [i32; 19] = [0, 1, 4, 5, 0, 1, 2, 3, 0, 1, 2, 0, 1, 2, 3, 0, 3, 1, 3];

/// Density exponents of the dense-fluid viscosity series.
const VIS_J: [i32; 19] = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 6];

/// Coefficients of the dense-fluid viscosity series.
const VIS_H: [f64; 19] = [
    0.5132047,
    0.3205656,
    -0.7782567,
    0.1885447,
    0.2151778,
    0.7317883,
    1.241044,
    1.476783,
    -0.2818107,
    -1.070786,
    -1.263184,
    0.1778064,
    0.4605040,
    0.2340379,
    -0.4924179,
    -0.04176610,
    0.1600435,
    -0.01578386,
    -0.003629481,
];

/// Dynamic viscosity (Pa·s) at pressure (MPa) and temperature (K).
///
/// # Errors
///
/// Returns an out-of-range error outside the property envelope or above
/// 1173.15 K, where the shear viscosity correlation loses validity even
/// though region 5 continues.
pub(crate) fn viscosity(pressure: f64, temperature: f64) -> Result<f64, PropertyError> {
    if temperature > 1173.15 {
        return Err(PropertyError::TemperatureOutOfRange { temperature });
    }
    let d = density(pressure, temperature)?;
    let t_bar = temperature / VIS_T_STAR;
    let d_bar = d / VIS_D_STAR;

    let mut part1 = 0.0;
    for (i, h) in VIS_H0.iter().enumerate() {
        part1 += h / t_bar.powi(i as i32);
    }
    part1 = t_bar.sqrt() / part1;

    let tt = 1.0 / t_bar - 1.0;
    let dd = d_bar - 1.0;
    let mut part2 = 0.0;
    for k in 0..VIS_H.len() {
        part2 += VIS_H[k] * tt.powi(VIS_I[k]) * dd.powi(VIS_J[k]);
    }
    let part2 = (part2 * d_bar).exp();

    Ok(part1 * part2 * VIS_STAR)
}

/// Reducing temperature for the conductivity correlation, K.
const K_T_REF: f64 = 647.26;

/// Reducing density for the conductivity correlation, kg/m³.
const K_D_REF: f64 = 317.7;

/// Coefficients of the dilute-gas conductivity series.
const K_A: [f64; 4] = [0.0102811, 0.0299621, 0.0156146, -0.00422464];

const K_B0: f64 = -0.397070;
const K_B1: f64 = 0.400302;
const K_B2: f64 = 1.060000;
const K_BB1: f64 = -0.171587;
const K_BB2: f64 = 2.392190;

const K_D1: f64 = 0.0701309;
const K_D2: f64 = 0.0118520;
const K_D3: f64 = 0.00169937;
const K_D4: f64 = -1.0200;

const K_C1: f64 = 0.642857;
const K_C2: f64 = -4.11717;
const K_C3: f64 = -6.17937;
const K_C4: f64 = 0.00308976;
const K_C5: f64 = 0.0822994;
const K_C6: f64 = 10.0932;

/// Thermal conductivity (W/m/K) at pressure (MPa) and temperature (K).
///
/// # Errors
///
/// Returns an out-of-range error for pressures outside (0, 100] MPa or
/// temperatures outside [273.15, 1075.15] K.
pub(crate) fn thermal_conductivity(
    pressure: f64,
    temperature: f64,
) -> Result<f64, PropertyError> {
    if !(273.15..=1075.15).contains(&temperature) {
        return Err(PropertyError::TemperatureOutOfRange { temperature });
    }
    if pressure > 100.0 || pressure <= 0.0 {
        return Err(PropertyError::PressureOutOfRange { pressure });
    }
    let d = density(pressure, temperature)?;
    let t_bar = temperature / K_T_REF;
    let rho_bar = d / K_D_REF;

    // Dilute-gas term: a series in √T̄·T̄ᵏ.
    let mut t_pow = t_bar.sqrt();
    let mut lambda0 = 0.0;
    for a in K_A {
        lambda0 += a * t_pow;
        t_pow *= t_bar;
    }

    let lambda1 = K_B0 + K_B1 * rho_bar + K_B2 * (K_BB1 * (rho_bar + K_BB2).powi(2)).exp();

    let dt_bar = (t_bar - 1.0).abs() + K_C4;
    let q = 2.0 + K_C5 / dt_bar.powf(0.6);
    let s = if t_bar > 1.0 {
        1.0 / dt_bar
    } else {
        K_C6 / dt_bar.powf(0.6)
    };
    let lambda2 = (K_D1 / t_bar.powi(10) + K_D2)
        * rho_bar.powf(1.8)
        * (K_C1 * (1.0 - rho_bar.powf(2.8))).exp()
        + K_D3 * s * rho_bar.powf(q) * ((q / (1.0 + q)) * (1.0 - rho_bar.powf(1.0 + q))).exp()
        + K_D4 * (K_C2 * t_bar.powf(1.5) + K_C3 / rho_bar.powi(5)).exp();

    Ok(lambda0 + lambda1 + lambda2)
}
