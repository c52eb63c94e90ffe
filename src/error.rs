use thiserror::Error;

/// Errors that may occur when evaluating water/steam properties.
///
/// Every error is fatal to the single call that produced it. The engine
/// holds no state, so a failed call cannot affect later ones; the caller
/// should re-validate its inputs and try again.
///
/// Fields carry the offending inputs in the engine's working units
/// (pressure in MPa, temperature in K, enthalpy in kJ/kg).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropertyError {
    /// The pressure is outside the modeled envelope (0 < p ≤ 100 MPa).
    #[error("pressure {pressure} MPa is outside the modeled range")]
    PressureOutOfRange { pressure: f64 },

    /// The temperature is outside the modeled envelope.
    #[error("temperature {temperature} K is outside the modeled range")]
    TemperatureOutOfRange { temperature: f64 },

    /// The pressure/temperature combination is outside the envelope.
    ///
    /// Each input may be admissible on its own; above 1073.15 K the
    /// formulation only extends to 50 MPa.
    #[error("{pressure} MPa / {temperature} K is outside the modeled envelope")]
    PressureTemperatureOutOfEnvelope { pressure: f64, temperature: f64 },

    /// The enthalpy is outside the modeled range at the given pressure.
    #[error("enthalpy {enthalpy} kJ/kg is outside the modeled range at {pressure} MPa")]
    EnthalpyOutOfRange { pressure: f64, enthalpy: f64 },

    /// No correlation region contains the requested state.
    ///
    /// Classification is exhaustive over the envelope, so this should be
    /// unreachable; it is reported rather than silently defaulted.
    #[error("no correlation region contains the requested state")]
    RegionIndeterminate,

    /// A root-finding precondition failed: the function does not take
    /// opposite signs relative to the target at the bracket endpoints.
    #[error("bracket [{low}, {high}] does not straddle the search target")]
    NotBracketed { low: f64, high: f64 },

    /// The root search exhausted its iteration budget before the bracket
    /// shrank below tolerance.
    #[error("root search failed to reach the requested tolerance")]
    ToleranceUnreachable,
}
