//! Thermal and mean speeds.
//!
//! Three conventions are in use for "the thermal speed" and they are not
//! interchangeable; every caller names one through [`SpeedConvention`].

use dusty_types::config::SpeedConvention;
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_non_negative, require_positive, DustyResult};
use std::f64::consts::PI;

/// Mean speed of a Maxwellian [m/s], `sqrt(8 T / (pi m))`.
pub fn mean_speed(constants: &PhysicalConstants, temperature_ev: f64, mass: f64) -> DustyResult<f64> {
    require_positive("temperature_ev", temperature_ev)?;
    require_positive("mass", mass)?;
    Ok((8.0 * temperature_ev * constants.ev_to_joule / (PI * mass)).sqrt())
}

/// Thermal speed [m/s] under the given convention.
pub fn thermal_speed(
    constants: &PhysicalConstants,
    temperature_ev: f64,
    mass: f64,
    convention: SpeedConvention,
) -> DustyResult<f64> {
    require_positive("temperature_ev", temperature_ev)?;
    require_positive("mass", mass)?;
    let energy = temperature_ev * constants.ev_to_joule;
    let speed = match convention {
        SpeedConvention::Mean => return mean_speed(constants, temperature_ev, mass),
        SpeedConvention::MostProbable => (2.0 * energy / mass).sqrt(),
        SpeedConvention::RmsNeutral => (energy / mass).sqrt() * (8.0 / PI).sqrt(),
    };
    Ok(speed)
}

/// Ion speed relative to a grain at rest, `sqrt(u^2 + v_th^2)` [m/s].
pub fn relative_speed(drift_speed: f64, thermal_speed: f64) -> DustyResult<f64> {
    require_non_negative("drift_speed", drift_speed)?;
    require_non_negative("thermal_speed", thermal_speed)?;
    Ok(drift_speed.hypot(thermal_speed))
}
