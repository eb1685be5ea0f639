//! Neutral background gas: number density and mean free path.

use dusty_types::config::OperatingPoint;
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_positive, DustyResult};
use std::f64::consts::PI;

/// Pressure [Pa] from mTorr.
pub fn pressure_from_mtorr(constants: &PhysicalConstants, mtorr: f64) -> DustyResult<f64> {
    require_positive("pressure_mtorr", mtorr)?;
    Ok(mtorr * constants.pascal_per_mtorr)
}

/// Ideal-gas number density `p / (T e_V)` [m^-3].
pub fn number_density(
    constants: &PhysicalConstants,
    pressure: f64,
    temperature_ev: f64,
) -> DustyResult<f64> {
    require_positive("pressure", pressure)?;
    require_positive("temperature_ev", temperature_ev)?;
    Ok(pressure / (temperature_ev * constants.ev_to_joule))
}

/// Hard-sphere cross-section `pi r^2` [m^2].
pub fn cross_section_area(collision_radius: f64) -> DustyResult<f64> {
    require_positive("collision_radius", collision_radius)?;
    Ok(PI * collision_radius * collision_radius)
}

/// Mean free path `1 / (sigma n)` [m].
pub fn mean_free_path(
    constants: &PhysicalConstants,
    pressure: f64,
    temperature_ev: f64,
    collision_radius: f64,
) -> DustyResult<f64> {
    let area = cross_section_area(collision_radius)?;
    let density = number_density(constants, pressure, temperature_ev)?;
    Ok(1.0 / (area * density))
}

/// Neutral mean free path at the operating point's pressure and gas.
pub fn neutral_mean_free_path(
    constants: &PhysicalConstants,
    point: &OperatingPoint,
) -> DustyResult<f64> {
    mean_free_path(
        constants,
        point.neutral_pressure_pa,
        point.neutral_temperature_ev,
        constants.neutral(point.neutral_gas).radius_m,
    )
}
