// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Debye Screening
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Debye screening length.

use dusty_types::config::OperatingPoint;
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_nonzero, require_positive, DustyResult};

/// Debye length [m].
///
/// `lambda_D = sqrt(eps0 * T * e_V / (n * q^2))` with `T` in eV.
pub fn debye_length(
    constants: &PhysicalConstants,
    temperature_ev: f64,
    density: f64,
    charge: f64,
) -> DustyResult<f64> {
    require_positive("debye temperature_ev", temperature_ev)?;
    require_positive("debye density", density)?;
    require_nonzero("debye charge", charge)?;
    Ok(
        (constants.vacuum_permittivity * temperature_ev * constants.ev_to_joule
            / (density * charge * charge))
            .sqrt(),
    )
}

/// Electron Debye length of an operating point [m].
pub fn electron_debye_length(
    constants: &PhysicalConstants,
    point: &OperatingPoint,
) -> DustyResult<f64> {
    debye_length(
        constants,
        point.electron_temperature_ev,
        point.electron_density,
        constants.elementary_charge,
    )
}
