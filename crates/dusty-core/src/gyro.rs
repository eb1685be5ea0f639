// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Gyro-Motion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Larmor radius, cyclotron and plasma frequencies.
//!
//! At `B = 0` the orbit is unbounded. Gyro quantities reject it with a
//! domain error instead of returning `inf`.

use dusty_types::config::{OperatingPoint, Species, SpeedConvention};
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{
    require_non_negative, require_nonzero, require_positive, DustyError, DustyResult,
};

use crate::grain::{grain_charge, grain_mass};
use crate::speed::thermal_speed;

fn require_field(b_field: f64) -> DustyResult<f64> {
    if !b_field.is_finite() || b_field <= 0.0 {
        return Err(DustyError::DomainError(format!(
            "gyro quantities need a magnetic field > 0, got {b_field} T"
        )));
    }
    Ok(b_field)
}

/// Larmor radius `m v / (|q| B)` [m].
pub fn larmor_radius(mass: f64, speed: f64, charge: f64, b_field: f64) -> DustyResult<f64> {
    require_positive("mass", mass)?;
    require_non_negative("speed", speed)?;
    require_nonzero("charge", charge)?;
    require_field(b_field)?;
    Ok(mass * speed / (charge.abs() * b_field))
}

/// Cyclotron angular frequency `|q| B / m` [rad/s].
pub fn cyclotron_frequency(charge: f64, b_field: f64, mass: f64) -> DustyResult<f64> {
    require_nonzero("charge", charge)?;
    require_field(b_field)?;
    require_positive("mass", mass)?;
    Ok(charge.abs() * b_field / mass)
}

/// Plasma angular frequency `sqrt(n q^2 / (m eps0))` [rad/s].
pub fn plasma_frequency(
    constants: &PhysicalConstants,
    density: f64,
    mass: f64,
    charge: f64,
) -> DustyResult<f64> {
    require_positive("density", density)?;
    require_positive("mass", mass)?;
    require_nonzero("charge", charge)?;
    Ok((density * charge * charge / (mass * constants.vacuum_permittivity)).sqrt())
}

/// Mass [kg], temperature [eV] and charge [C] of a gyrating species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProperties {
    pub mass: f64,
    pub temperature_ev: f64,
    pub charge: f64,
}

impl SpeciesProperties {
    pub fn of(
        constants: &PhysicalConstants,
        point: &OperatingPoint,
        species: Species,
    ) -> DustyResult<Self> {
        let props = match species {
            Species::Electron => SpeciesProperties {
                mass: constants.electron_mass,
                temperature_ev: point.electron_temperature_ev,
                charge: constants.elementary_charge,
            },
            Species::Ion => SpeciesProperties {
                mass: constants.neutral(point.neutral_gas).mass_kg,
                temperature_ev: point.ion_temperature_ev,
                charge: constants.elementary_charge,
            },
            Species::Grain => SpeciesProperties {
                mass: grain_mass(point.grain_radius, point.grain_density)?,
                temperature_ev: point.grain_temperature_ev,
                charge: grain_charge(constants, point)?,
            },
        };
        Ok(props)
    }

    pub fn speed(
        &self,
        constants: &PhysicalConstants,
        convention: SpeedConvention,
    ) -> DustyResult<f64> {
        thermal_speed(constants, self.temperature_ev, self.mass, convention)
    }
}

/// Larmor radius [m] of `species` at the operating point's field.
pub fn species_larmor_radius(
    constants: &PhysicalConstants,
    point: &OperatingPoint,
    species: Species,
    convention: SpeedConvention,
) -> DustyResult<f64> {
    let props = SpeciesProperties::of(constants, point, species)?;
    let speed = props.speed(constants, convention)?;
    larmor_radius(props.mass, speed, props.charge, point.magnetic_field)
}
