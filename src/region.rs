//! Classification of statepoints into the IF97 correlation regions.
//!
//! The IAPWS-IF97 formulation splits the water/steam surface into five
//! regions, each with its own equation of state. Everything else in the
//! crate keys off the [`Region`] tag produced here, so the tie-break rules
//! on the region boundaries are part of the contract: points exactly on
//! the saturation curve classify as region 1, and points exactly on the
//! region-2/3 boundary classify as region 2.

pub(crate) mod b23;
pub(crate) mod five;
pub(crate) mod one;
pub(crate) mod saturation;
pub(crate) mod three;
pub(crate) mod two;

use crate::error::PropertyError;

/// Specific gas constant of water, kJ/(kg·K).
pub(crate) const GAS_CONSTANT: f64 = 0.461526;

/// Critical point temperature, K.
pub(crate) const CRITICAL_TEMPERATURE: f64 = 647.096;

/// Critical point pressure, MPa.
pub(crate) const CRITICAL_PRESSURE: f64 = 22.064;

/// Critical point density, kg/m³.
pub(crate) const CRITICAL_DENSITY: f64 = 322.0;

/// Lower temperature bound of the modeled envelope, K.
pub(crate) const MIN_TEMPERATURE: f64 = 273.15;

/// Upper temperature bound of the modeled envelope, K.
pub(crate) const MAX_TEMPERATURE: f64 = 2273.15;

/// Upper pressure bound of the modeled envelope, MPa.
pub(crate) const MAX_PRESSURE: f64 = 100.0;

/// Pressure limit above 1073.15 K, MPa.
pub(crate) const MAX_PRESSURE_REGION_5: f64 = 50.0;

/// Saturation pressure at 623.15 K, MPa; the pressure above which a (p, h)
/// statepoint may fall in region 3.
pub(crate) const REGION_3_MIN_PRESSURE: f64 = 16.5292;

/// Upper temperature bound of regions 1 and 3, K.
pub(crate) const REGION_1_MAX_TEMPERATURE: f64 = 623.15;

/// Upper temperature bound of regions 2 and 3, K (region 2 extends further
/// at pressures below the region-2/3 boundary curve).
pub(crate) const REGION_2_MAX_TEMPERATURE: f64 = 1073.15;

/// Upper temperature at which the region-2/3 boundary curve applies, K.
const B23_MAX_TEMPERATURE: f64 = 863.15;

/// One of the five IF97 correlation regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated vapor at low to moderate pressure.
    Two,
    /// Dense fluid near and above the critical density.
    Three,
    /// Two-phase liquid/vapor mixture on the saturation curve.
    Four,
    /// High-temperature steam above 1073.15 K.
    Five,
}

impl Region {
    /// Classifies a (pressure, temperature) statepoint.
    ///
    /// Pressure in MPa, temperature in K. A (p, T) point is never
    /// two-phase, so [`Region::Four`] is not a possible result.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the point is outside the envelope
    /// (0 < p ≤ 100 MPa, 273.15 ≤ T ≤ 2273.15 K, and p ≤ 50 MPa once
    /// T exceeds 1073.15 K).
    pub fn from_pt(pressure: f64, temperature: f64) -> Result<Self, PropertyError> {
        if pressure > MAX_PRESSURE || pressure <= 0.0 {
            return Err(PropertyError::PressureOutOfRange { pressure });
        }
        if temperature > MAX_TEMPERATURE || temperature < MIN_TEMPERATURE {
            return Err(PropertyError::TemperatureOutOfRange { temperature });
        }
        if temperature > REGION_2_MAX_TEMPERATURE && pressure > MAX_PRESSURE_REGION_5 {
            return Err(PropertyError::PressureTemperatureOutOfEnvelope {
                pressure,
                temperature,
            });
        }

        if temperature <= REGION_1_MAX_TEMPERATURE {
            // The saturation curve separates liquid from vapor; the tie
            // goes to the liquid side.
            if pressure >= saturation::pressure(temperature) {
                Ok(Region::One)
            } else {
                Ok(Region::Two)
            }
        } else if temperature <= B23_MAX_TEMPERATURE {
            // The B23 curve separates vapor from the dense fluid; the tie
            // goes to the vapor side.
            if pressure <= b23::pressure(temperature) {
                Ok(Region::Two)
            } else {
                Ok(Region::Three)
            }
        } else if temperature <= REGION_2_MAX_TEMPERATURE {
            Ok(Region::Two)
        } else {
            Ok(Region::Five)
        }
    }

    /// Classifies a (pressure, enthalpy) statepoint.
    ///
    /// Pressure in MPa, enthalpy in kJ/kg. Enthalpy is bracketed by
    /// forward evaluations at the boundary temperatures; the `+ 1.0`
    /// paddings on the region-2 and region-5 ceilings absorb floating
    /// round-off for enthalpies computed exactly at a boundary, matching
    /// the ±1 K paddings used by the temperature inversions.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error if the pressure is outside
    /// (0, 100] MPa or the enthalpy is outside the envelope at this
    /// pressure.
    pub fn from_ph(pressure: f64, enthalpy: f64) -> Result<Self, PropertyError> {
        if pressure > MAX_PRESSURE || pressure <= 0.0 {
            return Err(PropertyError::PressureOutOfRange { pressure });
        }

        let out_of_range = Err(PropertyError::EnthalpyOutOfRange { pressure, enthalpy });

        if pressure <= REGION_3_MIN_PRESSURE {
            // Below the region-3 pressure threshold the isobar crosses, in
            // order of increasing enthalpy: region 1, the two-phase dome,
            // region 2, and region 5.
            if enthalpy > five::enthalpy(pressure, MAX_TEMPERATURE) + 1.0 {
                return out_of_range;
            }
            if enthalpy > two::enthalpy(pressure, REGION_2_MAX_TEMPERATURE) {
                return Ok(Region::Five);
            }
            let t_sat = saturation::temperature(pressure);
            if enthalpy >= two::enthalpy(pressure, t_sat) {
                return Ok(Region::Two);
            }
            if enthalpy > one::enthalpy(pressure, t_sat) {
                return Ok(Region::Four);
            }
            if enthalpy < one::enthalpy(pressure, MIN_TEMPERATURE) {
                return out_of_range;
            }
            Ok(Region::One)
        } else {
            if enthalpy <= one::enthalpy(pressure, REGION_1_MAX_TEMPERATURE) {
                return Ok(Region::One);
            }
            if enthalpy <= two::enthalpy(pressure, b23::temperature(pressure)) {
                return Ok(Region::Three);
            }
            if enthalpy <= two::enthalpy(pressure, REGION_2_MAX_TEMPERATURE) + 1.0 {
                return Ok(Region::Two);
            }
            if pressure > MAX_PRESSURE_REGION_5 {
                return out_of_range;
            }
            if enthalpy > five::enthalpy(pressure, MAX_TEMPERATURE) + 1.0 {
                return out_of_range;
            }
            Ok(Region::Five)
        }
    }
}
