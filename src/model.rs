//! The public property engine.
//!
//! [`If97`] is the crate's API surface: dimensioned quantities in,
//! dimensioned quantities out. Internally everything runs in the
//! formulation's working units (MPa, K, kJ/kg) as bare `f64`, with the
//! conversion happening once at each boundary crossing.

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, SpecificHeatCapacity, SpecificVolume,
        ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{
    error::PropertyError,
    region::{
        CRITICAL_PRESSURE, CRITICAL_TEMPERATURE, MIN_TEMPERATURE, REGION_1_MAX_TEMPERATURE,
        Region, five, one, saturation, three, two,
    },
    transport,
    units::{SpecificEnthalpy, SpecificEntropy},
};

/// Water/steam equilibrium and transport properties over the full
/// five-region formulation envelope.
///
/// The engine holds no state; it exists as a value so property methods
/// read as methods rather than free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97;

impl If97 {
    /// Specific volume from pressure and temperature.
    pub fn specific_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificVolume, PropertyError> {
        let v = volume_pt(pressure.get::<megapascal>(), temperature.get::<kelvin>())?;
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }

    /// Density from pressure and temperature.
    pub fn density(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        let v = volume_pt(pressure.get::<megapascal>(), temperature.get::<kelvin>())?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(1.0 / v))
    }

    /// Specific enthalpy from pressure and temperature.
    pub fn enthalpy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = enthalpy_pt(pressure.get::<megapascal>(), temperature.get::<kelvin>())?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }

    /// Specific entropy from pressure and temperature.
    pub fn entropy(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = entropy_pt(pressure.get::<megapascal>(), temperature.get::<kelvin>())?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }

    /// Isobaric heat capacity from pressure and temperature.
    pub fn isobaric_heat_capacity(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let p = pressure.get::<megapascal>();
        let t = temperature.get::<kelvin>();
        let cp = match Region::from_pt(p, t)? {
            Region::One => one::isobaric_heat_capacity(p, t),
            Region::Two => two::isobaric_heat_capacity(p, t),
            Region::Three => three::isobaric_heat_capacity(three::density(p, t)?, t),
            Region::Five => five::isobaric_heat_capacity(p, t),
            Region::Four => return Err(PropertyError::RegionIndeterminate),
        };
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cp))
    }

    /// Isochoric heat capacity from pressure and temperature.
    pub fn isochoric_heat_capacity(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        let p = pressure.get::<megapascal>();
        let t = temperature.get::<kelvin>();
        let cv = match Region::from_pt(p, t)? {
            Region::One => one::isochoric_heat_capacity(p, t),
            Region::Two => two::isochoric_heat_capacity(p, t),
            Region::Three => three::isochoric_heat_capacity(three::density(p, t)?, t),
            Region::Five => five::isochoric_heat_capacity(p, t),
            Region::Four => return Err(PropertyError::RegionIndeterminate),
        };
        Ok(SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(cv))
    }

    /// Speed of sound from pressure and temperature.
    pub fn speed_of_sound(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Velocity, PropertyError> {
        let p = pressure.get::<megapascal>();
        let t = temperature.get::<kelvin>();
        let w = match Region::from_pt(p, t)? {
            Region::One => one::speed_of_sound(p, t),
            Region::Two => two::speed_of_sound(p, t),
            Region::Three => three::speed_of_sound(three::density(p, t)?, t),
            Region::Five => five::speed_of_sound(p, t),
            Region::Four => return Err(PropertyError::RegionIndeterminate),
        };
        Ok(Velocity::new::<meter_per_second>(w))
    }

    /// Dynamic viscosity from pressure and temperature.
    ///
    /// Valid over the property envelope up to 1173.15 K.
    pub fn dynamic_viscosity(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<DynamicViscosity, PropertyError> {
        let mu = transport::viscosity(pressure.get::<megapascal>(), temperature.get::<kelvin>())?;
        Ok(DynamicViscosity::new::<pascal_second>(mu))
    }

    /// Thermal conductivity from pressure and temperature.
    ///
    /// Valid over the property envelope up to 1075.15 K.
    pub fn thermal_conductivity(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<ThermalConductivity, PropertyError> {
        let k = transport::thermal_conductivity(
            pressure.get::<megapascal>(),
            temperature.get::<kelvin>(),
        )?;
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }

    /// Temperature from pressure and specific enthalpy.
    ///
    /// Inside the two-phase dome every enthalpy maps to the saturation
    /// temperature at that pressure.
    pub fn temperature_ph(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = pressure.get::<megapascal>();
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let t = match Region::from_ph(p, h)? {
            Region::One => one::temperature_ph(p, h)?,
            Region::Two => two::temperature_ph(p, h)?,
            Region::Three => three::temperature_ph(p, h)?,
            Region::Four => saturation::temperature(p),
            Region::Five => five::temperature_ph(p, h)?,
        };
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Specific volume from pressure and specific enthalpy.
    pub fn specific_volume_ph(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<SpecificVolume, PropertyError> {
        let p = pressure.get::<megapascal>();
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let v = match Region::from_ph(p, h)? {
            Region::One => one::specific_volume(p, one::temperature_ph(p, h)?),
            Region::Two => two::specific_volume(p, two::temperature_ph(p, h)?),
            Region::Three => three::specific_volume_ph(p, h)?,
            Region::Four => saturation::mixture_volume(p, h)?,
            Region::Five => five::specific_volume(p, five::temperature_ph(p, h)?),
        };
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }

    /// Specific entropy from pressure and specific enthalpy.
    pub fn entropy_ph(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
    ) -> Result<SpecificEntropy, PropertyError> {
        let p = pressure.get::<megapascal>();
        let h = enthalpy.get::<kilojoule_per_kilogram>();
        let s = match Region::from_ph(p, h)? {
            Region::One => one::entropy(p, one::temperature_ph(p, h)?),
            Region::Two => two::entropy(p, two::temperature_ph(p, h)?),
            Region::Three => three::entropy_ph(p, h)?,
            Region::Four => saturation::mixture_entropy(p, h)?,
            Region::Five => five::entropy(p, five::temperature_ph(p, h)?),
        };
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }

    /// Saturation pressure at a temperature on the vapor/liquid curve.
    pub fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let t = temperature.get::<kelvin>();
        if !(MIN_TEMPERATURE..=CRITICAL_TEMPERATURE).contains(&t) {
            return Err(PropertyError::TemperatureOutOfRange { temperature: t });
        }
        Ok(Pressure::new::<megapascal>(saturation::pressure(t)))
    }

    /// Saturation temperature at a pressure on the vapor/liquid curve.
    pub fn saturation_temperature(
        &self,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let p = pressure.get::<megapascal>();
        if p <= 0.0 || p > CRITICAL_PRESSURE {
            return Err(PropertyError::PressureOutOfRange { pressure: p });
        }
        Ok(ThermodynamicTemperature::new::<kelvin>(
            saturation::temperature(p),
        ))
    }

    /// Saturated liquid specific enthalpy at a temperature.
    pub fn saturated_liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let (liquid, _) = saturated_line(temperature.get::<kelvin>(), one::enthalpy, three::enthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(liquid))
    }

    /// Saturated vapor specific enthalpy at a temperature.
    pub fn saturated_vapor_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let (_, vapor) = saturated_line(temperature.get::<kelvin>(), two::enthalpy, three::enthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(vapor))
    }

    /// Saturated liquid specific entropy at a temperature.
    pub fn saturated_liquid_entropy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let (liquid, _) = saturated_line(temperature.get::<kelvin>(), one::entropy, three::entropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(liquid))
    }

    /// Saturated vapor specific entropy at a temperature.
    pub fn saturated_vapor_entropy(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificEntropy, PropertyError> {
        let (_, vapor) = saturated_line(temperature.get::<kelvin>(), two::entropy, three::entropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(vapor))
    }

    /// Saturated liquid specific volume at a temperature.
    pub fn saturated_liquid_volume(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificVolume, PropertyError> {
        let t = temperature.get::<kelvin>();
        check_saturation_temperature(t)?;
        let p = saturation::pressure(t);
        let v = if t <= REGION_1_MAX_TEMPERATURE {
            one::specific_volume(p, t)
        } else {
            1.0 / three::saturated_liquid_density(p, t)?
        };
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }

    /// Saturated vapor specific volume at a temperature.
    pub fn saturated_vapor_volume(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<SpecificVolume, PropertyError> {
        let t = temperature.get::<kelvin>();
        check_saturation_temperature(t)?;
        let p = saturation::pressure(t);
        let v = if t <= REGION_1_MAX_TEMPERATURE {
            two::specific_volume(p, t)
        } else {
            1.0 / three::saturated_vapor_density(p, t)?
        };
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }
}

fn volume_pt(p: f64, t: f64) -> Result<f64, PropertyError> {
    match Region::from_pt(p, t)? {
        Region::One => Ok(one::specific_volume(p, t)),
        Region::Two => Ok(two::specific_volume(p, t)),
        Region::Three => Ok(1.0 / three::density(p, t)?),
        Region::Five => Ok(five::specific_volume(p, t)),
        Region::Four => Err(PropertyError::RegionIndeterminate),
    }
}

fn enthalpy_pt(p: f64, t: f64) -> Result<f64, PropertyError> {
    match Region::from_pt(p, t)? {
        Region::One => Ok(one::enthalpy(p, t)),
        Region::Two => Ok(two::enthalpy(p, t)),
        Region::Three => three::enthalpy_pt(p, t),
        Region::Five => Ok(five::enthalpy(p, t)),
        Region::Four => Err(PropertyError::RegionIndeterminate),
    }
}

fn entropy_pt(p: f64, t: f64) -> Result<f64, PropertyError> {
    match Region::from_pt(p, t)? {
        Region::One => Ok(one::entropy(p, t)),
        Region::Two => Ok(two::entropy(p, t)),
        Region::Three => Ok(three::entropy(three::density(p, t)?, t)),
        Region::Five => Ok(five::entropy(p, t)),
        Region::Four => Err(PropertyError::RegionIndeterminate),
    }
}

fn check_saturation_temperature(t: f64) -> Result<(), PropertyError> {
    if (MIN_TEMPERATURE..=CRITICAL_TEMPERATURE).contains(&t) {
        Ok(())
    } else {
        Err(PropertyError::TemperatureOutOfRange { temperature: t })
    }
}

/// Evaluates a property on the saturation line.
///
/// Below 623.15 K the saturated state lies on a Gibbs region and
/// `gibbs_property(p, t)` applies; above, it lies in the dense-fluid
/// region and `helmholtz_property(ρ, t)` applies with the liquid-branch
/// density. Returns the value in both positions so the liquid and vapor
/// wrappers can destructure the side they need.
fn saturated_line(
    t: f64,
    gibbs_property: fn(f64, f64) -> f64,
    helmholtz_property: fn(f64, f64) -> f64,
) -> Result<(f64, f64), PropertyError> {
    check_saturation_temperature(t)?;
    let p = saturation::pressure(t);
    if t <= REGION_1_MAX_TEMPERATURE {
        let value = gibbs_property(p, t);
        Ok((value, value))
    } else {
        let liquid = helmholtz_property(three::saturated_liquid_density(p, t)?, t);
        let vapor = helmholtz_property(three::saturated_vapor_density(p, t)?, t);
        Ok((liquid, vapor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn mpa(p: f64) -> Pressure {
        Pressure::new::<megapascal>(p)
    }

    fn k(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    #[test]
    fn evaluates_properties_across_regions() {
        let water = If97;
        // One verification point per single-phase region.
        let cases = [
            // (p MPa, T K, v m³/kg, h kJ/kg)
            (3.0, 300.0, 0.100215168e-2, 115.331273),
            (0.0035, 700.0, 0.923015898e2, 3335.68375),
            (0.255837018e2, 650.0, 1.0 / 500.0, 1863.43019),
            (30.0, 1500.0, 0.230761299e-1, 5167.23514),
        ];
        for (p, t, v, h) in cases {
            let volume = water.specific_volume(mpa(p), k(t)).unwrap();
            assert_relative_eq!(
                volume.get::<cubic_meter_per_kilogram>(),
                v,
                max_relative = 1e-6
            );
            let enthalpy = water.enthalpy(mpa(p), k(t)).unwrap();
            assert_relative_eq!(
                enthalpy.get::<kilojoule_per_kilogram>(),
                h,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn density_is_reciprocal_volume() {
        let water = If97;
        let v = water.specific_volume(mpa(3.0), k(500.0)).unwrap();
        let d = water.density(mpa(3.0), k(500.0)).unwrap();
        assert_relative_eq!(
            d.get::<kilogram_per_cubic_meter>(),
            1.0 / v.get::<cubic_meter_per_kilogram>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn enthalpy_inversion_round_trips_across_regions() {
        let water = If97;
        for (p, t) in [
            (3.0, 400.0),
            (0.0035, 700.0),
            (30.0, 650.0),
            (0.783095639e2, 750.0),
            (0.5, 1500.0),
        ] {
            let h = water.enthalpy(mpa(p), k(t)).unwrap();
            let recovered = water.temperature_ph(mpa(p), h).unwrap();
            assert_relative_eq!(recovered.get::<kelvin>(), t, epsilon = 1e-5);
        }
    }

    #[test]
    fn two_phase_enthalpy_resolves_to_saturation_temperature() {
        let water = If97;
        let p = mpa(1.0);
        let t_sat = water.saturation_temperature(p).unwrap();
        let h_liquid = water.saturated_liquid_enthalpy(t_sat).unwrap();
        let h_vapor = water.saturated_vapor_enthalpy(t_sat).unwrap();
        let h_mid = (h_liquid + h_vapor) / 2.0;

        let t = water.temperature_ph(p, h_mid).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), t_sat.get::<kelvin>(), epsilon = 1e-9);

        // The mixture volume interpolates between the saturated endpoints.
        let v_mid = water.specific_volume_ph(p, h_mid).unwrap();
        let v_liquid = water.saturated_liquid_volume(t_sat).unwrap();
        let v_vapor = water.saturated_vapor_volume(t_sat).unwrap();
        let expected = (v_liquid + v_vapor) / 2.0;
        assert_relative_eq!(
            v_mid.get::<cubic_meter_per_kilogram>(),
            expected.get::<cubic_meter_per_kilogram>(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn entropy_ph_matches_forward_entropy() {
        let water = If97;
        for (p, t) in [(3.0, 450.0), (0.1, 600.0), (1.0, 1200.0)] {
            let h = water.enthalpy(mpa(p), k(t)).unwrap();
            let s_forward = water.entropy(mpa(p), k(t)).unwrap();
            let s_inverse = water.entropy_ph(mpa(p), h).unwrap();
            assert_relative_eq!(
                s_inverse.get::<kilojoule_per_kilogram_kelvin>(),
                s_forward.get::<kilojoule_per_kilogram_kelvin>(),
                max_relative = 1e-7
            );
        }
    }

    #[test]
    fn saturation_curve_round_trips() {
        let water = If97;
        let p = water.saturation_pressure(k(500.0)).unwrap();
        assert_relative_eq!(p.get::<megapascal>(), 0.263889776e1, max_relative = 1e-7);
        let t = water.saturation_temperature(p).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 500.0, epsilon = 1e-6);
    }

    #[test]
    fn saturated_line_is_continuous_across_623_kelvin() {
        let water = If97;
        // The saturated-line dispatch switches equations of state at
        // 623.15 K; the property values must not jump there.
        let below = water.saturated_liquid_enthalpy(k(623.15)).unwrap();
        let above = water.saturated_liquid_enthalpy(k(623.16)).unwrap();
        assert_relative_eq!(
            below.get::<kilojoule_per_kilogram>(),
            above.get::<kilojoule_per_kilogram>(),
            max_relative = 1e-3
        );

        let below = water.saturated_vapor_entropy(k(623.15)).unwrap();
        let above = water.saturated_vapor_entropy(k(623.16)).unwrap();
        assert_relative_eq!(
            below.get::<kilojoule_per_kilogram_kelvin>(),
            above.get::<kilojoule_per_kilogram_kelvin>(),
            max_relative = 1e-3
        );
    }

    #[test]
    fn saturated_branches_meet_at_the_critical_point() {
        let water = If97;
        let t = k(647.096);
        let liquid = water.saturated_liquid_volume(t).unwrap();
        let vapor = water.saturated_vapor_volume(t).unwrap();
        assert_relative_eq!(
            liquid.get::<cubic_meter_per_kilogram>(),
            1.0 / 322.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            vapor.get::<cubic_meter_per_kilogram>(),
            1.0 / 322.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn transport_properties_have_plausible_magnitudes() {
        let water = If97;
        let mu = water.dynamic_viscosity(mpa(0.1), k(298.15)).unwrap();
        assert_relative_eq!(mu.get::<pascal_second>() * 1e6, 890.1, max_relative = 1e-3);

        let cond = water.thermal_conductivity(mpa(0.1), k(298.15)).unwrap();
        assert_relative_eq!(
            cond.get::<watt_per_meter_kelvin>() * 1e3,
            607.5,
            max_relative = 1e-3
        );
    }

    #[test]
    fn rejects_out_of_envelope_requests() {
        let water = If97;
        assert!(matches!(
            water.enthalpy(mpa(101.0), k(400.0)),
            Err(PropertyError::PressureOutOfRange { .. })
        ));
        assert!(matches!(
            water.saturation_pressure(k(700.0)),
            Err(PropertyError::TemperatureOutOfRange { .. })
        ));
        assert!(matches!(
            water.saturation_temperature(mpa(25.0)),
            Err(PropertyError::PressureOutOfRange { .. })
        ));
        assert!(matches!(
            water.saturated_liquid_enthalpy(k(650.0)),
            Err(PropertyError::TemperatureOutOfRange { .. })
        ));
    }
}
