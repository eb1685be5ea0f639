// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Parameter Sweeps
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-parameter sweeps over an operating point.
//!
//! A sweep builds N independent operating points that differ in exactly one
//! field and evaluates them in parallel. Per-sample failures are kept next
//! to the successes; whether to drop, mark or abort is the caller's call.

use dusty_types::config::{
    OperatingPoint, Spacing, Species, SpeedConvention, SweepAxis, SweepConfig,
};
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_positive, DustyError, DustyResult};
use dusty_types::state::DerivedSnapshot;
use ndarray::Array1;
use rayon::prelude::*;

use crate::debye::electron_debye_length;
use crate::derived::DerivedQuantities;
use crate::gyro::{larmor_radius, SpeciesProperties};
use crate::reduction::{electron_beta, reduction_factor};

/// Axis values for one swept field.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    axis: SweepAxis,
    values: Array1<f64>,
}

impl Sweep {
    /// `samples` evenly spaced values over `[start, stop]`.
    pub fn linspace(axis: SweepAxis, start: f64, stop: f64, samples: usize) -> DustyResult<Self> {
        SweepConfig {
            axis,
            start,
            stop,
            spacing: Spacing::Linspace { samples },
        }
        .validate()?;
        Ok(Sweep {
            axis,
            values: Array1::linspace(start, stop, samples),
        })
    }

    /// `start, start + step, ...` below `stop`.
    pub fn arange(axis: SweepAxis, start: f64, stop: f64, step: f64) -> DustyResult<Self> {
        SweepConfig {
            axis,
            start,
            stop,
            spacing: Spacing::Arange { step },
        }
        .validate()?;
        Ok(Sweep {
            axis,
            values: Array1::range(start, stop, step),
        })
    }

    pub fn from_config(config: &SweepConfig) -> DustyResult<Self> {
        match config.spacing {
            Spacing::Linspace { samples } => {
                Self::linspace(config.axis, config.start, config.stop, samples)
            }
            Spacing::Arange { step } => Self::arange(config.axis, config.start, config.stop, step),
        }
    }

    /// Explicit axis values.
    pub fn from_values(axis: SweepAxis, values: Array1<f64>) -> DustyResult<Self> {
        if values.is_empty() {
            return Err(DustyError::ConfigError(
                "sweep needs at least one value".to_string(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(DustyError::ConfigError(format!(
                "sweep values must be finite, got {bad}"
            )));
        }
        Ok(Sweep { axis, values })
    }

    pub fn axis(&self) -> SweepAxis {
        self.axis
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// One independent operating point per axis value.
    pub fn points(&self, base: &OperatingPoint) -> Vec<OperatingPoint> {
        self.values
            .iter()
            .map(|&v| base.with_axis_value(self.axis, v))
            .collect()
    }

    /// Snapshot of every sample, evaluated in parallel, in axis order.
    pub fn evaluate(
        &self,
        constants: &PhysicalConstants,
        base: &OperatingPoint,
        convention: SpeedConvention,
    ) -> SweepResult {
        log::debug!(
            "sweeping {:?} over {} samples [{}, {}]",
            self.axis,
            self.len(),
            self.values.iter().next().copied().unwrap_or(f64::NAN),
            self.values.iter().next_back().copied().unwrap_or(f64::NAN),
        );
        let points = self.points(base);
        let samples: Vec<DustyResult<DerivedSnapshot>> = points
            .par_iter()
            .map(|point| DerivedQuantities::new(constants, point).snapshot(convention))
            .collect();

        for (value, sample) in self.values.iter().zip(&samples) {
            match sample {
                Ok(snap) => {
                    if let Some(capture) = snap.cross_sections.low_energy_capture {
                        log::warn!(
                            "{:?}={value}: low-energy capture, bracket {:.3e} clamped to 0",
                            self.axis,
                            capture.bracket
                        );
                    }
                    if let Some(inverted) = snap.cross_sections.inverted_screening {
                        log::warn!(
                            "{:?}={value}: Debye length {:.3e} m inside capture radius {:.3e} m",
                            self.axis,
                            inverted.debye_length,
                            inverted.impact_parameter
                        );
                    }
                }
                Err(err) => log::warn!("{:?}={value}: {err}", self.axis),
            }
        }

        SweepResult {
            axis: self.axis,
            values: self.values.clone(),
            samples,
        }
    }
}

/// Per-sample outcome of a sweep.
#[derive(Debug)]
pub struct SweepResult {
    pub axis: SweepAxis,
    pub values: Array1<f64>,
    pub samples: Vec<DustyResult<DerivedSnapshot>>,
}

impl SweepResult {
    /// One quantity across the sweep; failed samples read as NaN.
    pub fn column<F>(&self, quantity: F) -> Array1<f64>
    where
        F: Fn(&DerivedSnapshot) -> f64,
    {
        self.samples
            .iter()
            .map(|s| s.as_ref().map(&quantity).unwrap_or(f64::NAN))
            .collect()
    }

    /// Optional quantity across the sweep (gyro-radii); `None` and failures
    /// read as NaN.
    pub fn optional_column<F>(&self, quantity: F) -> Array1<f64>
    where
        F: Fn(&DerivedSnapshot) -> Option<f64>,
    {
        self.samples
            .iter()
            .map(|s| s.as_ref().ok().and_then(&quantity).unwrap_or(f64::NAN))
            .collect()
    }

    pub fn failure_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_err()).count()
    }

    pub fn capture_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| matches!(s, Ok(snap) if snap.has_low_energy_capture()))
            .count()
    }

    /// All snapshots, or the first failure.
    pub fn into_snapshots(self) -> DustyResult<Vec<DerivedSnapshot>> {
        self.samples.into_iter().collect()
    }
}

/// `(beta^-1, delta)` columns of the electron-current reduction curve.
///
/// Every field value must be > 0: at `B = 0` the inverse beta is unbounded.
pub fn reduction_curve(
    constants: &PhysicalConstants,
    base: &OperatingPoint,
    fields: &Array1<f64>,
    convention: SpeedConvention,
) -> DustyResult<(Array1<f64>, Array1<f64>)> {
    let dl = electron_debye_length(constants, base)?;
    let mut beta_inv = Array1::zeros(fields.len());
    let mut delta = Array1::zeros(fields.len());
    for (i, &b) in fields.iter().enumerate() {
        require_positive("reduction curve magnetic_field", b)?;
        let beta = electron_beta(constants, &base.with_magnetic_field(b), convention)?;
        beta_inv[i] = 1.0 / beta;
        delta[i] = reduction_factor(base.grain_radius, dl, beta)?;
    }
    Ok((beta_inv, delta))
}

/// Gyro-radius versus field at one species temperature.
#[derive(Debug, Clone)]
pub struct GyroCurve {
    pub temperature_ev: f64,
    /// Thermal speed used for every sample [m/s].
    pub speed: f64,
    /// Larmor radius [m] per field value; `inf` where `B = 0`.
    pub radii: Array1<f64>,
}

/// Family of gyro-radius curves, one per temperature.
pub fn gyro_radius_family(
    constants: &PhysicalConstants,
    base: &OperatingPoint,
    species: Species,
    temperatures: &[f64],
    fields: &Array1<f64>,
    convention: SpeedConvention,
) -> DustyResult<Vec<GyroCurve>> {
    let axis = match species {
        Species::Electron => SweepAxis::ElectronTemperature,
        Species::Ion => SweepAxis::IonTemperature,
        Species::Grain => SweepAxis::GrainTemperature,
    };
    temperatures
        .iter()
        .map(|&t| {
            let point = base.with_axis_value(axis, t);
            let props = SpeciesProperties::of(constants, &point, species)?;
            let speed = props.speed(constants, convention)?;
            let radii = fields
                .iter()
                .map(|&b| {
                    if b == 0.0 {
                        Ok(f64::INFINITY)
                    } else {
                        larmor_radius(props.mass, speed, props.charge, b)
                    }
                })
                .collect::<DustyResult<Vec<f64>>>()?;
            Ok(GyroCurve {
                temperature_ev: t,
                speed,
                radii: Array1::from(radii),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusty_types::config::ChargeMode;

    #[test]
    fn test_linspace_field_sweep() {
        let c = PhysicalConstants::default();
        let sweep = Sweep::linspace(SweepAxis::MagneticField, 0.1, 4.0, 40).unwrap();
        assert_eq!(sweep.len(), 40);
        let result = sweep.evaluate(&c, &OperatingPoint::default(), SpeedConvention::Mean);
        assert_eq!(result.failure_count(), 0);
        let radii = result.optional_column(|s| s.electron_larmor_radius);
        for i in 1..radii.len() {
            assert!(radii[i] < radii[i - 1]);
        }
        let delta = result.column(|s| s.reduction_factor);
        assert!(delta.iter().all(|&d| d > 0.0 && d <= 1.0));
    }

    #[test]
    fn test_sweep_from_zero_marks_sample_undefined() {
        let c = PhysicalConstants::default();
        let sweep = Sweep::arange(SweepAxis::MagneticField, 0.0, 4.0, 0.1).unwrap();
        assert_eq!(sweep.len(), 40);
        let result = sweep.evaluate(&c, &OperatingPoint::default(), SpeedConvention::Mean);
        assert_eq!(result.failure_count(), 0);
        let radii = result.optional_column(|s| s.ion_larmor_radius);
        assert!(radii[0].is_nan());
        assert!(radii.iter().skip(1).all(|r| r.is_finite() && *r > 0.0));
    }

    #[test]
    fn test_points_are_independent() {
        let base = OperatingPoint::default();
        let sweep = Sweep::linspace(SweepAxis::NeutralPressure, 1.0, 30.0, 5).unwrap();
        let points = sweep.points(&base);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].neutral_pressure_pa, 1.0);
        assert_eq!(points[4].neutral_pressure_pa, 30.0);
        assert_eq!(base, OperatingPoint::default());
    }

    #[test]
    fn test_pressure_sweep_mean_free_path() {
        let c = PhysicalConstants::default();
        let sweep = Sweep::linspace(SweepAxis::NeutralPressure, 1.0, 10.0, 10).unwrap();
        let result = sweep.evaluate(&c, &OperatingPoint::default(), SpeedConvention::Mean);
        let mfp = result.column(|s| s.mean_free_path);
        for (p, l) in result.values.iter().zip(mfp.iter()) {
            let expected = mfp[0] * result.values[0] / p;
            assert!((l - expected).abs() <= 1e-12 * expected);
        }
    }

    #[test]
    fn test_failures_are_kept_per_sample() {
        let c = PhysicalConstants::default();
        let values = Array1::from(vec![2.0, -1.0, 4.0]);
        let sweep = Sweep::from_values(SweepAxis::ElectronTemperature, values).unwrap();
        let result = sweep.evaluate(&c, &OperatingPoint::default(), SpeedConvention::Mean);
        assert_eq!(result.failure_count(), 1);
        assert!(result.samples[1].is_err());
        let dl = result.column(|s| s.debye_length);
        assert!(dl[1].is_nan());
        assert!((dl[2] / dl[0] - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(result.into_snapshots().is_err());
    }

    #[test]
    fn test_capture_counted() {
        let c = PhysicalConstants::default();
        let base = OperatingPoint {
            ion_thermal_speed: 0.0,
            ..OperatingPoint::default()
        };
        let values = Array1::from(vec![1.0e-8, 35.0]);
        let sweep = Sweep::from_values(SweepAxis::IonDriftSpeed, values).unwrap();
        let result = sweep.evaluate(&c, &base, SpeedConvention::Mean);
        assert_eq!(result.failure_count(), 0);
        assert_eq!(result.capture_count(), 1);
    }

    #[test]
    fn test_reduction_curve() {
        let c = PhysicalConstants::default();
        let base = OperatingPoint {
            grain_radius: 4.5e-6,
            electron_density: 1.0e15,
            ..OperatingPoint::default()
        };
        let fields = Array1::range(0.05, 4.0, 0.05);
        let (beta_inv, delta) = reduction_curve(&c, &base, &fields, SpeedConvention::Mean).unwrap();
        assert_eq!(beta_inv.len(), fields.len());
        for i in 1..fields.len() {
            assert!(beta_inv[i] < beta_inv[i - 1]);
            assert!(delta[i] < delta[i - 1]);
        }
        let with_zero = Array1::from(vec![0.0, 1.0]);
        assert!(reduction_curve(&c, &base, &with_zero, SpeedConvention::Mean).is_err());
    }

    #[test]
    fn test_gyro_family_ordering() {
        let c = PhysicalConstants::default();
        let base = OperatingPoint {
            grain_radius: 0.25e-6,
            grain_density: 2.2e3,
            electron_density: 1.0e15,
            charge_mode: ChargeMode::FloatingMultiplier { multiplier: 1.5 },
            ..OperatingPoint::default()
        };
        let fields = Array1::range(0.0, 4.0, 0.1);
        let temps = [0.025, 0.1, 1.0, 5.0];
        let family =
            gyro_radius_family(&c, &base, Species::Grain, &temps, &fields, SpeedConvention::Mean)
                .unwrap();
        assert_eq!(family.len(), 4);
        for curve in &family {
            assert!(curve.radii[0].is_infinite());
            assert!(curve.radii.iter().skip(1).all(|r| r.is_finite()));
        }
        // Hotter grains gyrate on wider orbits.
        for pair in family.windows(2) {
            assert!(pair[1].radii[10] > pair[0].radii[10]);
        }
    }

    #[test]
    fn test_from_config() {
        let config = SweepConfig {
            axis: SweepAxis::MagneticField,
            start: 0.05,
            stop: 4.0,
            spacing: Spacing::Arange { step: 0.05 },
        };
        let sweep = Sweep::from_config(&config).unwrap();
        assert_eq!(sweep.axis(), SweepAxis::MagneticField);
        assert_eq!(sweep.values()[0], 0.05);
        assert!(Sweep::linspace(SweepAxis::MagneticField, 1.0, 0.0, 10).is_err());
        assert!(Sweep::from_values(SweepAxis::MagneticField, Array1::zeros(0)).is_err());
    }
}
