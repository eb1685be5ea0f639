// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Grain Geometry and Charge
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Spherical grain geometry and the grain charge model.
//!
//! The charge is either a calibrated constant or follows from the surface
//! potential through the capacitance of a sphere screened over `lambda_D`:
//! `q = 4 pi eps0 U R (1 + R / lambda_D)`.

use dusty_types::config::{ChargeMode, OperatingPoint};
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_nonzero, require_positive, DustyResult};
use std::f64::consts::PI;

use crate::debye::electron_debye_length;

/// Sphere volume [m^3].
pub fn grain_volume(radius: f64) -> DustyResult<f64> {
    require_positive("grain_radius", radius)?;
    Ok(4.0 * PI * radius.powi(3) / 3.0)
}

/// Grain mass [kg] from radius [m] and mass density [kg/m^3].
pub fn grain_mass(radius: f64, density: f64) -> DustyResult<f64> {
    require_positive("grain_density", density)?;
    Ok(density * grain_volume(radius)?)
}

/// Geometric cross-section [m^2].
pub fn grain_area(radius: f64) -> DustyResult<f64> {
    require_positive("grain_radius", radius)?;
    Ok(PI * radius * radius)
}

/// Gravitational force on the grain [N].
pub fn grain_weight(constants: &PhysicalConstants, mass: f64) -> DustyResult<f64> {
    require_positive("grain_mass", mass)?;
    Ok(mass * constants.gravity)
}

/// Screened-sphere capacitance `4 pi eps0 R (1 + R / lambda_D)` [F].
fn capacitance(constants: &PhysicalConstants, radius: f64, debye_length: f64) -> DustyResult<f64> {
    require_positive("grain_radius", radius)?;
    require_positive("debye_length", debye_length)?;
    Ok(4.0 * PI * constants.vacuum_permittivity * radius * (1.0 + radius / debye_length))
}

/// Grain charge [C] from surface potential [V].
pub fn charge_from_potential(
    constants: &PhysicalConstants,
    potential: f64,
    radius: f64,
    debye_length: f64,
) -> DustyResult<f64> {
    require_nonzero("grain_potential", potential)?;
    Ok(potential * capacitance(constants, radius, debye_length)?)
}

/// Surface potential [V] that carries `charge` on the grain. Inverse of
/// [`charge_from_potential`] at fixed radius and Debye length.
pub fn potential_from_charge(
    constants: &PhysicalConstants,
    charge: f64,
    radius: f64,
    debye_length: f64,
) -> DustyResult<f64> {
    require_nonzero("grain_charge", charge)?;
    Ok(charge / capacitance(constants, radius, debye_length)?)
}

/// Charge in units of the elementary charge.
pub fn charge_number(constants: &PhysicalConstants, charge: f64) -> f64 {
    charge / constants.elementary_charge
}

/// Grain surface potential [V] of an operating point.
///
/// A fixed charge uses its configured potential when one is given;
/// otherwise this is the potential the capacitance model would need to
/// hold that charge.
pub fn grain_potential(constants: &PhysicalConstants, point: &OperatingPoint) -> DustyResult<f64> {
    match point.charge_mode {
        ChargeMode::Potential { potential_v } => Ok(potential_v),
        ChargeMode::FloatingMultiplier { multiplier } => {
            require_positive("electron_temperature_ev", point.electron_temperature_ev)?;
            Ok(multiplier * point.electron_temperature_ev)
        }
        ChargeMode::Fixed {
            potential_v: Some(potential_v),
            ..
        } => Ok(potential_v),
        ChargeMode::Fixed {
            charge_c,
            potential_v: None,
        } => {
            let dl = electron_debye_length(constants, point)?;
            potential_from_charge(constants, charge_c, point.grain_radius, dl)
        }
    }
}

/// Grain charge [C] of an operating point, per its [`ChargeMode`].
pub fn grain_charge(constants: &PhysicalConstants, point: &OperatingPoint) -> DustyResult<f64> {
    match point.charge_mode {
        ChargeMode::Fixed { charge_c, .. } => require_nonzero("grain_charge", charge_c),
        ChargeMode::Potential { .. } | ChargeMode::FloatingMultiplier { .. } => {
            let potential = grain_potential(constants, point)?;
            let dl = electron_debye_length(constants, point)?;
            charge_from_potential(constants, potential, point.grain_radius, dl)
        }
    }
}
