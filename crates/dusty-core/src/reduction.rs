//! Electron saturation current reduction in a magnetic field.
//!
//! Bohm's factor for a probe of radius `r_p` collecting electrons whose
//! Larmor radius shrinks below the probe size:
//! `delta = 1 / (1 + pi r_p sqrt(1 + lambda_D^2 beta^2 / r_p^2) / (8 lambda_D))`,
//! with `beta = r_p / r_L,e`.

use dusty_types::config::{OperatingPoint, Species, SpeedConvention};
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_non_negative, require_positive, DustyResult};
use std::f64::consts::PI;

use crate::debye::electron_debye_length;
use crate::gyro::SpeciesProperties;

/// Reduction factor in (0, 1] for probe radius `r_p` [m], Debye length `dl`
/// [m] and normalized field `beta`.
pub fn reduction_factor(probe_radius: f64, debye_length: f64, beta: f64) -> DustyResult<f64> {
    require_positive("probe_radius", probe_radius)?;
    require_positive("debye_length", debye_length)?;
    require_non_negative("beta", beta)?;
    let ratio = debye_length * beta / probe_radius;
    let root = (1.0 + ratio * ratio).sqrt();
    Ok(1.0 / (1.0 + PI * probe_radius * root / (8.0 * debye_length)))
}

/// `beta = r_p / r_L,e` at the operating point.
///
/// Evaluated as `r_p |q| B / (m v)` so that `B = 0` yields `beta = 0`.
pub fn electron_beta(
    constants: &PhysicalConstants,
    point: &OperatingPoint,
    convention: SpeedConvention,
) -> DustyResult<f64> {
    require_positive("grain_radius", point.grain_radius)?;
    require_non_negative("magnetic_field", point.magnetic_field)?;
    let electron = SpeciesProperties::of(constants, point, Species::Electron)?;
    let speed = electron.speed(constants, convention)?;
    Ok(point.grain_radius * electron.charge.abs() * point.magnetic_field / (electron.mass * speed))
}

/// Reduction factor of the grain as an electron collector.
pub fn grain_reduction_factor(
    constants: &PhysicalConstants,
    point: &OperatingPoint,
    convention: SpeedConvention,
) -> DustyResult<f64> {
    let dl = electron_debye_length(constants, point)?;
    let beta = electron_beta(constants, point, convention)?;
    reduction_factor(point.grain_radius, dl, beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gyro::species_larmor_radius;

    #[test]
    fn test_small_probe_limit_is_unity() {
        let delta = reduction_factor(1.0e-12, 1.0e-3, 0.0).unwrap();
        assert!((delta - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_field_beta_is_zero() {
        let c = PhysicalConstants::default();
        let beta = electron_beta(&c, &OperatingPoint::default(), SpeedConvention::Mean).unwrap();
        assert_eq!(beta, 0.0);
        let delta =
            grain_reduction_factor(&c, &OperatingPoint::default(), SpeedConvention::Mean).unwrap();
        assert!(delta > 0.0 && delta <= 1.0);
    }

    #[test]
    fn test_decreases_with_field() {
        let c = PhysicalConstants::default();
        let base = OperatingPoint {
            grain_radius: 4.5e-6,
            electron_density: 1.0e15,
            ..OperatingPoint::default()
        };
        let mut previous = 1.0;
        for k in 1..=80 {
            let point = base.with_magnetic_field(0.05 * k as f64);
            let delta = grain_reduction_factor(&c, &point, SpeedConvention::Mean).unwrap();
            assert!(delta < previous, "not decreasing at B={}", point.magnetic_field);
            assert!(delta > 0.0);
            previous = delta;
        }
    }

    #[test]
    fn test_beta_matches_larmor_ratio() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default().with_magnetic_field(2.0);
        let beta = electron_beta(&c, &point, SpeedConvention::Mean).unwrap();
        let r_l =
            species_larmor_radius(&c, &point, Species::Electron, SpeedConvention::Mean).unwrap();
        assert!((beta - point.grain_radius / r_l).abs() <= 1e-12 * beta);
    }

    #[test]
    fn test_rejects_negative_beta() {
        assert!(reduction_factor(1e-6, 1e-4, -1.0).is_err());
        assert!(reduction_factor(0.0, 1e-4, 1.0).is_err());
    }
}
