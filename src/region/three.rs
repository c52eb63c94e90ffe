//! Region 3: dense fluid near and above the critical point.
//!
//! Unlike the Gibbs regions, the equation of state here is a Helmholtz
//! free energy in reduced density and reduced temperature, so pressure is
//! a derived quantity and every (p, T) evaluation starts with a density
//! root search. Below the critical temperature that search must stay on
//! one side of the saturation dome, which is what the bracketing tables
//! are for.

use crate::error::PropertyError;
use crate::region::{
    CRITICAL_DENSITY, CRITICAL_PRESSURE, CRITICAL_TEMPERATURE, GAS_CONSTANT,
    REGION_1_MAX_TEMPERATURE, b23, saturation,
};
use crate::solve;

/// Reducing density, kg/m³.
const RHO_STAR: f64 = 322.0;

/// Reducing temperature, K.
const T_STAR: f64 = 647.096;

/// Maximum liquid density on the region-1 boundary, kg/m³.
const DENSITY_HIGH: f64 = 765.0;

/// Minimum vapor density on the region-2 boundary, kg/m³.
const DENSITY_LOW: f64 = 100.0;

/// Reduced density exponents of the Helmholtz series.
const I: [i32; 40] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6,
    6, 6, 7, 8, 9, 9, 10, 10, 11,
];

/// Reduced temperature exponents of the Helmholtz series.
const J: [i32; 40] = [
    0, 0, 1, 2, 7, 10, 12, 23, 2, 6, 15, 17, 0, 2, 6, 7, 22, 26, 0, 2, 4, 16, 26, 0, 2, 4, 26, 1,
    3, 26, 0, 2, 26, 2, 26, 2, 26, 0, 1, 26,
];

/// Coefficients of the Helmholtz series. The first entry multiplies the
/// logarithmic term, not a power term.
const N: [f64; 40] = [
    0.10658070028513e1,
    -0.15732845290239e2,
    0.20944396974307e2,
    -0.76867707878716e1,
    0.26185947787954e1,
    -0.28080781148620e1,
    0.12053369696517e1,
    -0.84566812812502e-2,
    -0.12654315477714e1,
    -0.11524407806681e1,
    0.88521043984318e0,
    -0.64207765181607e0,
    0.38493460186671e0,
    -0.85214708824206e0,
    0.48972281541877e1,
    -0.30502617256965e1,
    0.39420536879154e-1,
    0.12558408424308e0,
    -0.27999329698710e0,
    0.13899799569460e1,
    -0.20189915023570e1,
    -0.82147637173963e-2,
    -0.47596035734923e0,
    0.43984074473500e-1,
    -0.44476435428739e0,
    0.90572070719733e0,
    0.70522450087967e0,
    0.10770512626332e0,
    -0.32913623258954e0,
    -0.50871062041158e0,
    -0.22175400873096e-1,
    0.94260751665092e-1,
    0.16436278447961e0,
    -0.13503372241348e-1,
    -0.14834345352472e-1,
    0.57922953628084e-3,
    0.32308904703711e-2,
    0.80964802996215e-4,
    -0.16557679795037e-3,
    -0.44923899061815e-4,
];

/// Saturation temperatures (K) keying the density-limit tables below.
/// The spacing tightens toward the critical temperature, where the dome
/// narrows fastest.
const SAT_TEMPS: [f64; 33] = [
    623.15, 625.15, 627.15, 629.15, 631.15, 633.15, 634.15, 635.15, 636.15, 637.15, 638.15,
    639.15, 640.15, 641.15, 642.15, 643.15, 644.15, 645.15, 646.15, 646.4, 646.65, 646.75,
    646.85, 646.95, 647.0, 647.05, 647.06, 647.07, 647.08, 647.09, 647.093, 647.095, 647.096,
];

/// Upper density bracket for the vapor side of the dome, kg/m³.
const VAPOR_DENSITY_UPPER_LIMIT: [f64; 33] = [
    161.318, 166.327, 171.649, 177.336, 183.453, 190.088, 193.637, 197.367, 201.303, 205.478,
    209.932, 214.719, 219.914, 225.621, 231.996, 239.289, 247.945, 258.897, 274.814, 280.543,
    287.863, 291.548, 295.972, 301.663, 305.393, 310.431, 311.755, 313.286, 315.16, 317.812,
    319.04, 320.292, 323.0,
];

/// Lower density bracket for the liquid side of the dome, kg/m³.
const LIQUID_DENSITY_LOWER_LIMIT: [f64; 33] = [
    503.431, 496.687, 489.604, 482.129, 474.193, 465.702, 461.209, 456.526, 451.624, 446.473,
    441.029, 435.238, 429.027, 422.291, 414.876, 406.537, 396.845, 384.914, 368.263, 362.468,
    355.205, 351.601, 347.308, 341.823, 338.234, 333.37, 332.086, 330.597, 328.766, 326.16,
    324.946, 323.703, 321.0,
];

/// Dimensionless Helmholtz free energy.
fn helmholtz(delta: f64, tau: f64) -> f64 {
    let mut result = N[0] * delta.ln();
    for k in 1..N.len() {
        result += N[k] * delta.powi(I[k]) * tau.powi(J[k]);
    }
    result
}

/// First partial with respect to reduced density.
fn helmholtz_delta(delta: f64, tau: f64) -> f64 {
    let mut result = N[0] / delta;
    for k in 1..N.len() {
        result += N[k] * f64::from(I[k]) * delta.powi(I[k] - 1) * tau.powi(J[k]);
    }
    result
}

/// Second partial with respect to reduced density.
fn helmholtz_delta_delta(delta: f64, tau: f64) -> f64 {
    let mut result = -N[0] / (delta * delta);
    for k in 1..N.len() {
        result += N[k] * f64::from(I[k] * (I[k] - 1)) * delta.powi(I[k] - 2) * tau.powi(J[k]);
    }
    result
}

/// First partial with respect to reduced temperature.
fn helmholtz_tau(delta: f64, tau: f64) -> f64 {
    let mut result = 0.0;
    for k in 1..N.len() {
        result += N[k] * delta.powi(I[k]) * f64::from(J[k]) * tau.powi(J[k] - 1);
    }
    result
}

/// Second partial with respect to reduced temperature.
fn helmholtz_tau_tau(delta: f64, tau: f64) -> f64 {
    let mut result = 0.0;
    for k in 1..N.len() {
        result += N[k] * delta.powi(I[k]) * f64::from(J[k] * (J[k] - 1)) * tau.powi(J[k] - 2);
    }
    result
}

/// Mixed partial with respect to reduced density and temperature.
fn helmholtz_delta_tau(delta: f64, tau: f64) -> f64 {
    let mut result = 0.0;
    for k in 1..N.len() {
        result += N[k]
            * f64::from(I[k])
            * delta.powi(I[k] - 1)
            * f64::from(J[k])
            * tau.powi(J[k] - 1);
    }
    result
}

/// Pressure (MPa) at density (kg/m³) and temperature (K).
pub(crate) fn pressure(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    // R·T·ρ is in kPa; divide down to MPa.
    delta * helmholtz_delta(delta, tau) * density * GAS_CONSTANT * temperature / 1e3
}

/// Specific enthalpy (kJ/kg) at density (kg/m³) and temperature (K).
pub(crate) fn enthalpy(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    (tau * helmholtz_tau(delta, tau) + delta * helmholtz_delta(delta, tau))
        * GAS_CONSTANT
        * temperature
}

/// Specific entropy (kJ/kg/K) at density (kg/m³) and temperature (K).
pub(crate) fn entropy(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    (tau * helmholtz_tau(delta, tau) - helmholtz(delta, tau)) * GAS_CONSTANT
}

/// Isobaric heat capacity (kJ/kg/K) at density (kg/m³) and temperature (K).
pub(crate) fn isobaric_heat_capacity(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    let part = (delta * helmholtz_delta(delta, tau)
        - delta * tau * helmholtz_delta_tau(delta, tau))
    .powi(2)
        / (2.0 * delta * helmholtz_delta(delta, tau)
            + delta * delta * helmholtz_delta_delta(delta, tau));
    (-tau * tau * helmholtz_tau_tau(delta, tau) + part) * GAS_CONSTANT
}

/// Isochoric heat capacity (kJ/kg/K) at density (kg/m³) and temperature (K).
pub(crate) fn isochoric_heat_capacity(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    -tau * tau * helmholtz_tau_tau(delta, tau) * GAS_CONSTANT
}

/// Speed of sound (m/s) at density (kg/m³) and temperature (K).
pub(crate) fn speed_of_sound(density: f64, temperature: f64) -> f64 {
    let delta = density / RHO_STAR;
    let tau = T_STAR / temperature;
    let mut part = (delta * helmholtz_delta(delta, tau)
        - delta * tau * helmholtz_delta_tau(delta, tau))
    .powi(2)
        / (tau * tau * helmholtz_tau_tau(delta, tau));
    part = (2.0 * delta * helmholtz_delta(delta, tau)
        + delta * delta * helmholtz_delta_delta(delta, tau)
        - part)
        * GAS_CONSTANT
        * temperature;
    (part * 1e3).sqrt()
}

/// Density (kg/m³) at pressure (MPa) and temperature (K).
///
/// The equation of state runs in (ρ, T), so this inverts [`pressure`]
/// over density. Below the critical temperature the isotherm crosses the
/// two-phase dome; the density-limit tables keep the bracket on the
/// correct side, with the tie at the saturation pressure going to the
/// liquid branch.
pub(crate) fn density(pressure_target: f64, temperature: f64) -> Result<f64, PropertyError> {
    if temperature > CRITICAL_TEMPERATURE {
        return solve::solve_first(
            |d, t| Ok(pressure(d, t)),
            temperature,
            DENSITY_LOW,
            DENSITY_HIGH,
            pressure_target,
            solve::TOLERANCE,
        );
    }
    if temperature == CRITICAL_TEMPERATURE && pressure_target == CRITICAL_PRESSURE {
        return Ok(CRITICAL_DENSITY);
    }
    let saturation_pressure = saturation::pressure(temperature);
    let (low, high) = if pressure_target >= saturation_pressure {
        (
            solve::interpolate(&SAT_TEMPS, &LIQUID_DENSITY_LOWER_LIMIT, temperature),
            DENSITY_HIGH,
        )
    } else {
        (
            DENSITY_LOW,
            solve::interpolate(&SAT_TEMPS, &VAPOR_DENSITY_UPPER_LIMIT, temperature),
        )
    };
    solve::solve_first(
        |d, t| Ok(pressure(d, t)),
        temperature,
        low,
        high,
        pressure_target,
        solve::TOLERANCE,
    )
}

/// Saturated liquid density (kg/m³) on the dome above 623.15 K.
pub(crate) fn saturated_liquid_density(
    pressure_target: f64,
    temperature: f64,
) -> Result<f64, PropertyError> {
    if temperature == CRITICAL_TEMPERATURE || pressure_target == CRITICAL_PRESSURE {
        return Ok(CRITICAL_DENSITY);
    }
    let low = solve::interpolate(&SAT_TEMPS, &LIQUID_DENSITY_LOWER_LIMIT, temperature);
    solve::solve_first(
        |d, t| Ok(pressure(d, t)),
        temperature,
        low,
        DENSITY_HIGH,
        pressure_target,
        solve::TOLERANCE,
    )
}

/// Saturated vapor density (kg/m³) on the dome above 623.15 K.
pub(crate) fn saturated_vapor_density(
    pressure_target: f64,
    temperature: f64,
) -> Result<f64, PropertyError> {
    if temperature == CRITICAL_TEMPERATURE || pressure_target == CRITICAL_PRESSURE {
        return Ok(CRITICAL_DENSITY);
    }
    let high = solve::interpolate(&SAT_TEMPS, &VAPOR_DENSITY_UPPER_LIMIT, temperature);
    solve::solve_first(
        |d, t| Ok(pressure(d, t)),
        temperature,
        DENSITY_LOW,
        high,
        pressure_target,
        solve::TOLERANCE,
    )
}

/// Specific enthalpy (kJ/kg) at pressure (MPa) and temperature (K).
///
/// Discontinuous across the dome below the critical pressure.
pub(crate) fn enthalpy_pt(pressure_target: f64, temperature: f64) -> Result<f64, PropertyError> {
    let d = density(pressure_target, temperature)?;
    Ok(enthalpy(d, temperature))
}

/// Temperature (K) from pressure (MPa) and enthalpy (kJ/kg).
///
/// Above the critical pressure the enthalpy is continuous in temperature
/// and a single bracket from 623.15 K to the region-2/3 boundary works.
/// Below it the isobar crosses the dome, where enthalpy jumps; a target
/// between the saturated liquid and vapor enthalpies resolves to the
/// saturation temperature, otherwise the search stays on one branch.
pub(crate) fn temperature_ph(pressure_target: f64, enthalpy_target: f64) -> Result<f64, PropertyError> {
    if pressure_target >= CRITICAL_PRESSURE {
        return solve::solve_second(
            enthalpy_pt,
            pressure_target,
            REGION_1_MAX_TEMPERATURE - 1.0,
            b23::temperature(pressure_target) + 1.0,
            enthalpy_target,
            solve::TOLERANCE,
        );
    }
    let t_sat = saturation::temperature(pressure_target);
    let d_liquid = saturated_liquid_density(pressure_target, t_sat)?;
    let h_liquid = enthalpy(d_liquid, t_sat);
    let d_vapor = saturated_vapor_density(pressure_target, t_sat)?;
    let h_vapor = enthalpy(d_vapor, t_sat);
    if enthalpy_target >= h_liquid && enthalpy_target <= h_vapor {
        return Ok(t_sat);
    }
    let (low, high) = if enthalpy_target < h_liquid {
        (REGION_1_MAX_TEMPERATURE - 1.0, t_sat + 1.0)
    } else {
        (t_sat - 1.0, b23::temperature(pressure_target) + 1.0)
    };
    solve::solve_second(
        enthalpy_pt,
        pressure_target,
        low,
        high,
        enthalpy_target,
        solve::TOLERANCE,
    )
}

/// Specific entropy (kJ/kg/K) from pressure (MPa) and enthalpy (kJ/kg).
pub(crate) fn entropy_ph(pressure_target: f64, enthalpy_target: f64) -> Result<f64, PropertyError> {
    let t = temperature_ph(pressure_target, enthalpy_target)?;
    let d = density(pressure_target, t)?;
    Ok(entropy(d, t))
}

/// Specific volume (m³/kg) from pressure (MPa) and enthalpy (kJ/kg).
pub(crate) fn specific_volume_ph(
    pressure_target: f64,
    enthalpy_target: f64,
) -> Result<f64, PropertyError> {
    let t = temperature_ph(pressure_target, enthalpy_target)?;
    let d = density(pressure_target, t)?;
    Ok(1.0 / d)
}
