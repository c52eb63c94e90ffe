//! # Watprop
//!
//! Water and steam thermodynamic and transport properties from the
//! IAPWS-IF97 industrial formulation.
//!
//! The surface is split into five correlation regions (compressed liquid,
//! superheated vapor, the dense fluid around the critical point, the
//! two-phase dome, and high-temperature steam), each with its own
//! equation of state. [`If97`] classifies each request, evaluates the
//! matching region, and converts between dimensioned quantities at the
//! API boundary and the formulation's working units inside.
//!
//! ```
//! use uom::si::available_energy::kilojoule_per_kilogram;
//! use uom::si::f64::{Pressure, ThermodynamicTemperature};
//! use uom::si::{pressure::megapascal, thermodynamic_temperature::kelvin};
//! use watprop::If97;
//!
//! # fn main() -> Result<(), watprop::PropertyError> {
//! let water = If97;
//! let h = water.enthalpy(
//!     Pressure::new::<megapascal>(3.0),
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//! )?;
//! assert!((h.get::<kilojoule_per_kilogram>() - 115.331273).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```

mod error;
mod model;
mod region;
mod solve;
mod transport;

pub mod units;

pub use error::PropertyError;
pub use model::If97;
pub use region::Region;
