// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants::{NeutralGas, PhysicalConstants};
use crate::error::{
    require_non_negative, require_nonzero, require_positive, DustyError, DustyResult,
};

/// Neutral gas temperature at room conditions [eV].
const ROOM_TEMPERATURE_EV: f64 = 0.025;

/// Calibrated grain charge of the default operating point [e].
const DEFAULT_CHARGE_NUMBER: f64 = 550.0;

/// Floating potential of the default grain, in units of `T_e`.
const DEFAULT_FLOATING_MULTIPLIER: f64 = 2.5;

/// How the grain charge is obtained. Chosen explicitly, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ChargeMode {
    /// Calibrated charge [C], bypassing the capacitance model.
    ///
    /// `potential_v` is the surface potential [V] seen by the impact
    /// parameter. When absent it is solved from the charge through the
    /// capacitance relation.
    Fixed {
        charge_c: f64,
        #[serde(default)]
        potential_v: Option<f64>,
    },
    /// Charge from a grain surface potential [V].
    Potential { potential_v: f64 },
    /// Charge from a floating potential `U_d = k * T_e`.
    FloatingMultiplier { multiplier: f64 },
}

impl ChargeMode {
    /// Fixed charge of `count` elementary charges.
    pub fn fixed_elementary(count: f64, constants: &PhysicalConstants) -> Self {
        ChargeMode::Fixed {
            charge_c: count * constants.elementary_charge,
            potential_v: None,
        }
    }

    /// Fixed charge of `count` elementary charges held at `potential_v` [V].
    pub fn fixed_elementary_at(count: f64, potential_v: f64, constants: &PhysicalConstants) -> Self {
        ChargeMode::Fixed {
            charge_c: count * constants.elementary_charge,
            potential_v: Some(potential_v),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, ChargeMode::Fixed { .. })
    }
}

/// Which "thermal speed" a caller means.
///
/// `Mean` and `RmsNeutral` agree numerically; they are kept apart because
/// they are evaluated along different paths and callers name them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeedConvention {
    /// `sqrt(8 T / (pi m))`
    #[default]
    Mean,
    /// `sqrt(2 T / m)`
    MostProbable,
    /// `sqrt(T / m) * sqrt(8 / pi)`
    RmsNeutral,
}

/// Charged species for gyro-motion quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Electron,
    /// Singly ionized neutral gas atom.
    Ion,
    Grain,
}

/// Operating-point field that a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAxis {
    MagneticField,
    NeutralPressure,
    ElectronTemperature,
    IonTemperature,
    IonDriftSpeed,
    GrainTemperature,
}

/// Scalar inputs of one plasma/grain configuration (SI unless noted).
///
/// Missing JSON fields fall back to the default operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingPoint {
    pub electron_temperature_ev: f64,
    /// [m^-3]
    pub electron_density: f64,
    /// [m^-3]
    pub ion_density: f64,
    pub ion_temperature_ev: f64,
    /// [m/s]
    pub ion_drift_speed: f64,
    /// [m/s]
    pub ion_thermal_speed: f64,
    /// [m]
    pub grain_radius: f64,
    /// [kg/m^3]
    pub grain_density: f64,
    pub grain_temperature_ev: f64,
    pub charge_mode: ChargeMode,
    /// [T]
    pub magnetic_field: f64,
    /// [V]
    pub plasma_potential: f64,
    pub neutral_gas: NeutralGas,
    /// [Pa]
    pub neutral_pressure_pa: f64,
    pub neutral_temperature_ev: f64,
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self::defaults_for(&PhysicalConstants::default())
    }
}

impl OperatingPoint {
    /// Reference operating point expressed in the given constants.
    ///
    /// The grain carries 550 elementary charges of `constants` and sits at
    /// `2.5 T_e`; ions are thermalized with the argon background.
    pub fn defaults_for(constants: &PhysicalConstants) -> Self {
        let electron_temperature_ev = 2.0;
        let ion_thermal_speed = (ROOM_TEMPERATURE_EV * constants.ev_to_joule
            / constants.argon.mass_kg)
            .sqrt()
            * (8.0 / PI).sqrt();
        OperatingPoint {
            electron_temperature_ev,
            electron_density: 5.0e15,
            ion_density: 5.0e15,
            ion_temperature_ev: ROOM_TEMPERATURE_EV,
            ion_drift_speed: 35.0,
            ion_thermal_speed,
            grain_radius: 4.0e-6,
            grain_density: 2.0e3,
            grain_temperature_ev: ROOM_TEMPERATURE_EV,
            charge_mode: ChargeMode::fixed_elementary_at(
                DEFAULT_CHARGE_NUMBER,
                DEFAULT_FLOATING_MULTIPLIER * electron_temperature_ev,
                constants,
            ),
            magnetic_field: 0.0,
            plasma_potential: 40.0,
            neutral_gas: NeutralGas::Argon,
            neutral_pressure_pa: 10.0 * constants.pascal_per_mtorr,
            neutral_temperature_ev: ROOM_TEMPERATURE_EV,
        }
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> DustyResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> DustyResult<Self> {
        let point: Self = serde_json::from_str(json)?;
        point.validate()?;
        Ok(point)
    }

    /// Check the documented physical ranges.
    pub fn validate(&self) -> DustyResult<()> {
        require_positive("electron_temperature_ev", self.electron_temperature_ev)?;
        require_positive("electron_density", self.electron_density)?;
        require_positive("ion_density", self.ion_density)?;
        require_positive("ion_temperature_ev", self.ion_temperature_ev)?;
        require_non_negative("ion_drift_speed", self.ion_drift_speed)?;
        require_non_negative("ion_thermal_speed", self.ion_thermal_speed)?;
        require_positive("grain_radius", self.grain_radius)?;
        require_positive("grain_density", self.grain_density)?;
        require_positive("grain_temperature_ev", self.grain_temperature_ev)?;
        require_non_negative("magnetic_field", self.magnetic_field)?;
        require_positive("neutral_pressure_pa", self.neutral_pressure_pa)?;
        require_positive("neutral_temperature_ev", self.neutral_temperature_ev)?;
        if !self.plasma_potential.is_finite() {
            return Err(DustyError::DomainError(format!(
                "plasma_potential must be finite, got {}",
                self.plasma_potential
            )));
        }
        match self.charge_mode {
            ChargeMode::Fixed {
                charge_c,
                potential_v,
            } => {
                require_nonzero("charge_mode.charge_c", charge_c)?;
                if let Some(u) = potential_v {
                    require_nonzero("charge_mode.potential_v", u)?;
                }
            }
            ChargeMode::Potential { potential_v } => {
                require_nonzero("charge_mode.potential_v", potential_v)?;
            }
            ChargeMode::FloatingMultiplier { multiplier } => {
                require_nonzero("charge_mode.multiplier", multiplier)?;
            }
        }
        Ok(())
    }

    pub fn with_magnetic_field(&self, tesla: f64) -> Self {
        OperatingPoint {
            magnetic_field: tesla,
            ..self.clone()
        }
    }

    pub fn with_pressure_pa(&self, pascal: f64) -> Self {
        OperatingPoint {
            neutral_pressure_pa: pascal,
            ..self.clone()
        }
    }

    pub fn with_charge_mode(&self, charge_mode: ChargeMode) -> Self {
        OperatingPoint {
            charge_mode,
            ..self.clone()
        }
    }

    pub fn with_neutral_gas(&self, neutral_gas: NeutralGas) -> Self {
        OperatingPoint {
            neutral_gas,
            ..self.clone()
        }
    }

    /// Copy of this point with one swept field replaced.
    pub fn with_axis_value(&self, axis: SweepAxis, value: f64) -> Self {
        let mut point = self.clone();
        match axis {
            SweepAxis::MagneticField => point.magnetic_field = value,
            SweepAxis::NeutralPressure => point.neutral_pressure_pa = value,
            SweepAxis::ElectronTemperature => point.electron_temperature_ev = value,
            SweepAxis::IonTemperature => point.ion_temperature_ev = value,
            SweepAxis::IonDriftSpeed => point.ion_drift_speed = value,
            SweepAxis::GrainTemperature => point.grain_temperature_ev = value,
        }
        point
    }

    pub fn axis_value(&self, axis: SweepAxis) -> f64 {
        match axis {
            SweepAxis::MagneticField => self.magnetic_field,
            SweepAxis::NeutralPressure => self.neutral_pressure_pa,
            SweepAxis::ElectronTemperature => self.electron_temperature_ev,
            SweepAxis::IonTemperature => self.ion_temperature_ev,
            SweepAxis::IonDriftSpeed => self.ion_drift_speed,
            SweepAxis::GrainTemperature => self.grain_temperature_ev,
        }
    }
}

/// Sample spacing of a sweep axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Spacing {
    /// `samples` evenly spaced values, both ends included.
    Linspace { samples: usize },
    /// `start, start + step, ...` strictly below `stop`.
    Arange { step: f64 },
}

/// One-parameter sweep description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub axis: SweepAxis,
    pub start: f64,
    pub stop: f64,
    pub spacing: Spacing,
}

impl SweepConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> DustyResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> DustyResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DustyResult<()> {
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(DustyError::ConfigError(format!(
                "sweep bounds must be finite, got start={}, stop={}",
                self.start, self.stop
            )));
        }
        if self.stop <= self.start {
            return Err(DustyError::ConfigError(format!(
                "sweep stop must exceed start, got start={}, stop={}",
                self.start, self.stop
            )));
        }
        match self.spacing {
            Spacing::Linspace { samples } if samples < 2 => Err(DustyError::ConfigError(
                format!("linspace sweep needs >= 2 samples, got {samples}"),
            )),
            Spacing::Arange { step } if !step.is_finite() || step <= 0.0 => Err(
                DustyError::ConfigError(format!("arange step must be finite and > 0, got {step}")),
            ),
            _ => Ok(()),
        }
    }
}
