// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants for laboratory dusty-plasma work.
//!
//! The literals below are the four-significant-figure values the lab
//! calibrations were made with, not CODATA. Computations never read them
//! directly; they go through a [`PhysicalConstants`] value passed by reference.

use serde::{Deserialize, Serialize};

use crate::error::{DustyError, DustyResult};

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.6022e-19;

/// Energy of one electron-volt (J)
pub const EV_TO_JOULE: f64 = 1.6022e-19;

/// Vacuum permittivity (F/m)
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;

/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.381e-23;

/// Pressure of one Torr (Pa)
pub const PASCAL_PER_TORR: f64 = 133.322;

/// Electron mass (kg)
pub const M_ELECTRON: f64 = 9.109e-31;

/// Standard gravity (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Argon atom mass (kg)
pub const M_ARGON: f64 = 6.633e-26;

/// Argon collision radius (m)
pub const R_ARGON: f64 = 188.0e-12;

/// Helium atom mass (kg)
pub const M_HELIUM: f64 = 6.6464e-27;

/// Helium collision radius (m)
pub const R_HELIUM: f64 = 140.0e-12;

/// Neutral background gas filling the discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NeutralGas {
    #[default]
    Argon,
    Helium,
}

/// Mass and hard-sphere collision radius of one neutral species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralSpecies {
    pub name: &'static str,
    pub mass_kg: f64,
    pub radius_m: f64,
}

impl NeutralSpecies {
    pub const fn argon() -> Self {
        NeutralSpecies {
            name: "Argon",
            mass_kg: M_ARGON,
            radius_m: R_ARGON,
        }
    }

    pub const fn helium() -> Self {
        NeutralSpecies {
            name: "Helium",
            mass_kg: M_HELIUM,
            radius_m: R_HELIUM,
        }
    }
}

/// Immutable set of physical constants shared by every computation.
///
/// Build once with [`PhysicalConstants::default`] (or [`PhysicalConstants::new`]
/// for a custom calibration) and pass it by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    /// Elementary charge [C]
    pub elementary_charge: f64,
    /// Vacuum permittivity [F/m]
    pub vacuum_permittivity: f64,
    /// Boltzmann constant [J/K]
    pub boltzmann: f64,
    /// eV → J factor [J/eV]
    pub ev_to_joule: f64,
    /// mTorr → Pa factor [Pa/mTorr]
    pub pascal_per_mtorr: f64,
    /// Electron mass [kg]
    pub electron_mass: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    pub argon: NeutralSpecies,
    pub helium: NeutralSpecies,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        PhysicalConstants {
            elementary_charge: ELEMENTARY_CHARGE,
            vacuum_permittivity: VACUUM_PERMITTIVITY,
            boltzmann: K_BOLTZMANN,
            ev_to_joule: EV_TO_JOULE,
            pascal_per_mtorr: PASCAL_PER_TORR / 1000.0,
            electron_mass: M_ELECTRON,
            gravity: GRAVITY,
            argon: NeutralSpecies::argon(),
            helium: NeutralSpecies::helium(),
        }
    }
}

impl PhysicalConstants {
    /// Custom calibration. Every value must be finite and > 0.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        elementary_charge: f64,
        vacuum_permittivity: f64,
        boltzmann: f64,
        ev_to_joule: f64,
        pascal_per_mtorr: f64,
        electron_mass: f64,
        gravity: f64,
        argon: NeutralSpecies,
        helium: NeutralSpecies,
    ) -> DustyResult<Self> {
        let constants = PhysicalConstants {
            elementary_charge,
            vacuum_permittivity,
            boltzmann,
            ev_to_joule,
            pascal_per_mtorr,
            electron_mass,
            gravity,
            argon,
            helium,
        };
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> DustyResult<()> {
        let checks = [
            ("elementary_charge", self.elementary_charge),
            ("vacuum_permittivity", self.vacuum_permittivity),
            ("boltzmann", self.boltzmann),
            ("ev_to_joule", self.ev_to_joule),
            ("pascal_per_mtorr", self.pascal_per_mtorr),
            ("electron_mass", self.electron_mass),
            ("gravity", self.gravity),
            ("argon.mass_kg", self.argon.mass_kg),
            ("argon.radius_m", self.argon.radius_m),
            ("helium.mass_kg", self.helium.mass_kg),
            ("helium.radius_m", self.helium.radius_m),
        ];
        for (label, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(DustyError::ConfigError(format!(
                    "constant {label} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Species record for the selected neutral gas.
    pub fn neutral(&self, gas: NeutralGas) -> &NeutralSpecies {
        match gas {
            NeutralGas::Argon => &self.argon,
            NeutralGas::Helium => &self.helium,
        }
    }
}
