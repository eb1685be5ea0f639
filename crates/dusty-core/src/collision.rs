//! Grain–neutral momentum-exchange cross-sections.
//!
//! Orbit-limited capture (`sigma_coll = pi b_c^2`) plus the Coulomb
//! contribution integrated out to the Debye length:
//! `sigma_E = 2 pi b_90^2 ln((lambda_D^2 + b_90^2) / (b_c^2 + b_90^2))`.

use dusty_types::config::OperatingPoint;
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_positive, DustyError, DustyResult};
use dusty_types::state::{CollisionCrossSections, InvertedScreening, LowEnergyCapture};
use std::f64::consts::PI;

use crate::debye::electron_debye_length;
use crate::grain::{grain_charge, grain_potential};
use crate::speed::relative_speed;

/// Inputs of one cross-section evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInputs {
    pub grain_radius: f64,
    pub grain_potential: f64,
    pub grain_charge: f64,
    pub debye_length: f64,
    pub neutral_mass: f64,
    pub drift_speed: f64,
    pub thermal_speed: f64,
}

impl CollisionInputs {
    /// Gather inputs from an operating point, deriving charge and screening.
    pub fn from_point(constants: &PhysicalConstants, point: &OperatingPoint) -> DustyResult<Self> {
        Ok(CollisionInputs {
            grain_radius: point.grain_radius,
            grain_potential: grain_potential(constants, point)?,
            grain_charge: grain_charge(constants, point)?,
            debye_length: electron_debye_length(constants, point)?,
            neutral_mass: constants.neutral(point.neutral_gas).mass_kg,
            drift_speed: point.ion_drift_speed,
            thermal_speed: point.ion_thermal_speed,
        })
    }

    pub fn with_drift_speed(self, drift_speed: f64) -> Self {
        CollisionInputs {
            drift_speed,
            ..self
        }
    }
}

/// Impact parameter for orbit-limited capture [m].
///
/// The bracket `1 - 2 e U e_V / (m v^2)` is clamped at zero; a negative
/// bracket is reported as [`LowEnergyCapture`].
pub fn impact_parameter(
    constants: &PhysicalConstants,
    grain_radius: f64,
    grain_potential: f64,
    neutral_mass: f64,
    speed: f64,
) -> DustyResult<(f64, Option<LowEnergyCapture>)> {
    require_positive("grain_radius", grain_radius)?;
    require_positive("neutral_mass", neutral_mass)?;
    require_positive("relative_speed", speed)?;
    if !grain_potential.is_finite() {
        return Err(DustyError::DomainError(format!(
            "grain_potential must be finite, got {grain_potential}"
        )));
    }
    let kinetic = neutral_mass * speed * speed;
    let bracket =
        1.0 - 2.0 * constants.elementary_charge * grain_potential * constants.ev_to_joule / kinetic;
    if bracket < 0.0 {
        return Ok((0.0, Some(LowEnergyCapture { bracket })));
    }
    Ok((grain_radius * bracket.sqrt(), None))
}

/// 90-degree deflection impact parameter `q e / (4 pi eps0 m v^2)` [m].
pub fn b_pi_over_2(
    constants: &PhysicalConstants,
    grain_charge: f64,
    neutral_mass: f64,
    speed: f64,
) -> DustyResult<f64> {
    require_positive("neutral_mass", neutral_mass)?;
    require_positive("relative_speed", speed)?;
    Ok((grain_charge * constants.elementary_charge).abs()
        / (4.0 * PI * constants.vacuum_permittivity * neutral_mass * speed * speed))
}

/// Coulomb cross-section [m^2] from the two impact parameters.
///
/// Negative when `lambda_D < b_c`: the screening cloud is thinner than the
/// capture radius and the logarithm changes sign. The value is returned as
/// is; [`cross_sections`] flags it as [`InvertedScreening`].
pub fn coulomb_cross_section(debye_length: f64, b_c: f64, b_90: f64) -> DustyResult<f64> {
    require_positive("debye_length", debye_length)?;
    let b90_sq = b_90 * b_90;
    let denominator = b_c * b_c + b90_sq;
    if denominator <= 0.0 {
        return Err(DustyError::DomainError(
            "Coulomb logarithm undefined: b_c and b_pi/2 are both zero".to_string(),
        ));
    }
    // ln(N / D) = ln(1 + (lambda_D^2 - b_c^2) / D); the b_90^2 terms cancel
    // exactly instead of being subtracted in floating point.
    let log_term = ((debye_length * debye_length - b_c * b_c) / denominator).ln_1p();
    Ok(2.0 * PI * b90_sq * log_term)
}

/// Full cross-section evaluation.
pub fn cross_sections(
    constants: &PhysicalConstants,
    inputs: &CollisionInputs,
) -> DustyResult<CollisionCrossSections> {
    let v_s = relative_speed(inputs.drift_speed, inputs.thermal_speed)?;
    let (b_c, low_energy_capture) = impact_parameter(
        constants,
        inputs.grain_radius,
        inputs.grain_potential,
        inputs.neutral_mass,
        v_s,
    )?;
    let b_90 = b_pi_over_2(constants, inputs.grain_charge, inputs.neutral_mass, v_s)?;
    let sigma_coulomb = coulomb_cross_section(inputs.debye_length, b_c, b_90)?;
    let inverted_screening = (inputs.debye_length < b_c).then_some(InvertedScreening {
        debye_length: inputs.debye_length,
        impact_parameter: b_c,
    });
    Ok(CollisionCrossSections {
        relative_speed: v_s,
        impact_parameter: b_c,
        b_pi_over_2: b_90,
        sigma_coll: PI * b_c * b_c,
        sigma_coulomb,
        low_energy_capture,
        inverted_screening,
    })
}
