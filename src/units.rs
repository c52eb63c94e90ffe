//! Extensions to [`uom`].
//!
//! [`uom`] has no dedicated quantities for specific enthalpy or specific
//! entropy, so this module defines them as `Quantity` type aliases over the
//! appropriate ISQ dimensions. Construct and read them with the matching
//! unit modules:
//!
//! - [`SpecificEnthalpy`]: `uom::si::available_energy` units
//!   (`joule_per_kilogram`, `kilojoule_per_kilogram`, ...)
//! - [`SpecificEntropy`]: `uom::si::specific_heat_capacity` units
//!   (`joule_per_kilogram_kelvin`, `kilojoule_per_kilogram_kelvin`, ...)

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, J/kg·K in SI.
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;
