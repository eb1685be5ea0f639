// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — Derived Quantities
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! On-demand view of every derived quantity of one operating point.
//!
//! [`DerivedQuantities`] borrows the constants and the operating point and
//! recomputes each quantity when asked. Nothing is cached, so a view can
//! never go stale; build a new operating point to change an input.

use dusty_types::config::{OperatingPoint, Species, SpeedConvention};
use dusty_types::constants::PhysicalConstants;
use dusty_types::error::{require_non_negative, DustyResult};
use dusty_types::state::{CollisionCrossSections, DerivedSnapshot};

use crate::collision::{cross_sections, CollisionInputs};
use crate::debye::electron_debye_length;
use crate::grain;
use crate::gyro::{self, SpeciesProperties};
use crate::neutral;
use crate::reduction;

#[derive(Debug, Clone, Copy)]
pub struct DerivedQuantities<'a> {
    constants: &'a PhysicalConstants,
    point: &'a OperatingPoint,
}

impl<'a> DerivedQuantities<'a> {
    pub fn new(constants: &'a PhysicalConstants, point: &'a OperatingPoint) -> Self {
        DerivedQuantities { constants, point }
    }

    pub fn point(&self) -> &'a OperatingPoint {
        self.point
    }

    /// Electron Debye length [m].
    pub fn debye_length(&self) -> DustyResult<f64> {
        electron_debye_length(self.constants, self.point)
    }

    /// [m^3]
    pub fn grain_volume(&self) -> DustyResult<f64> {
        grain::grain_volume(self.point.grain_radius)
    }

    /// [kg]
    pub fn grain_mass(&self) -> DustyResult<f64> {
        grain::grain_mass(self.point.grain_radius, self.point.grain_density)
    }

    /// [m^2]
    pub fn grain_area(&self) -> DustyResult<f64> {
        grain::grain_area(self.point.grain_radius)
    }

    /// [N]
    pub fn grain_weight(&self) -> DustyResult<f64> {
        grain::grain_weight(self.constants, self.grain_mass()?)
    }

    /// Grain charge [C].
    pub fn grain_charge(&self) -> DustyResult<f64> {
        grain::grain_charge(self.constants, self.point)
    }

    /// Grain charge in elementary charges.
    pub fn grain_charge_number(&self) -> DustyResult<f64> {
        Ok(grain::charge_number(self.constants, self.grain_charge()?))
    }

    /// Grain surface potential [V].
    pub fn grain_potential(&self) -> DustyResult<f64> {
        grain::grain_potential(self.constants, self.point)
    }

    pub fn cross_sections(&self) -> DustyResult<CollisionCrossSections> {
        let inputs = CollisionInputs::from_point(self.constants, self.point)?;
        cross_sections(self.constants, &inputs)
    }

    /// Cross-sections with the ion drift speed [m/s] replaced.
    pub fn cross_sections_at(&self, drift_speed: f64) -> DustyResult<CollisionCrossSections> {
        require_non_negative("ion_drift_speed", drift_speed)?;
        let inputs =
            CollisionInputs::from_point(self.constants, self.point)?.with_drift_speed(drift_speed);
        cross_sections(self.constants, &inputs)
    }

    /// Orbit-limited cross-section [m^2].
    pub fn collision_cross_section(&self) -> DustyResult<f64> {
        Ok(self.cross_sections()?.sigma_coll)
    }

    /// Coulomb cross-section [m^2].
    pub fn coulomb_cross_section(&self) -> DustyResult<f64> {
        Ok(self.cross_sections()?.sigma_coulomb)
    }

    /// Orbit-limited cross-section [m^2] at ion drift speed `drift_speed` [m/s].
    pub fn collision_cross_section_at(&self, drift_speed: f64) -> DustyResult<f64> {
        Ok(self.cross_sections_at(drift_speed)?.sigma_coll)
    }

    /// Coulomb cross-section [m^2] at ion drift speed `drift_speed` [m/s].
    pub fn coulomb_cross_section_at(&self, drift_speed: f64) -> DustyResult<f64> {
        Ok(self.cross_sections_at(drift_speed)?.sigma_coulomb)
    }

    /// Larmor radius [m]. Domain error at `B = 0`.
    pub fn larmor_radius(&self, species: Species, convention: SpeedConvention) -> DustyResult<f64> {
        gyro::species_larmor_radius(self.constants, self.point, species, convention)
    }

    /// Cyclotron angular frequency [rad/s]. Domain error at `B = 0`.
    pub fn cyclotron_frequency(&self, species: Species) -> DustyResult<f64> {
        let props = SpeciesProperties::of(self.constants, self.point, species)?;
        gyro::cyclotron_frequency(props.charge, self.point.magnetic_field, props.mass)
    }

    /// Electron plasma angular frequency [rad/s].
    pub fn electron_plasma_frequency(&self) -> DustyResult<f64> {
        gyro::plasma_frequency(
            self.constants,
            self.point.electron_density,
            self.constants.electron_mass,
            self.constants.elementary_charge,
        )
    }

    /// Ion plasma angular frequency [rad/s].
    pub fn ion_plasma_frequency(&self) -> DustyResult<f64> {
        gyro::plasma_frequency(
            self.constants,
            self.point.ion_density,
            self.constants.neutral(self.point.neutral_gas).mass_kg,
            self.constants.elementary_charge,
        )
    }

    /// `r_p / r_L,e`; zero at `B = 0`.
    pub fn electron_beta(&self, convention: SpeedConvention) -> DustyResult<f64> {
        reduction::electron_beta(self.constants, self.point, convention)
    }

    /// Electron-current reduction factor, dimensionless in (0, 1].
    pub fn reduction_factor(&self, convention: SpeedConvention) -> DustyResult<f64> {
        reduction::grain_reduction_factor(self.constants, self.point, convention)
    }

    /// Neutral number density [m^-3].
    pub fn neutral_density(&self) -> DustyResult<f64> {
        neutral::number_density(
            self.constants,
            self.point.neutral_pressure_pa,
            self.point.neutral_temperature_ev,
        )
    }

    /// Neutral mean free path [m].
    pub fn mean_free_path(&self) -> DustyResult<f64> {
        neutral::neutral_mean_free_path(self.constants, self.point)
    }

    /// Neutral mean free path [m] at `pressure_pa` instead of the point's pressure.
    pub fn mean_free_path_at(&self, pressure_pa: f64) -> DustyResult<f64> {
        neutral::mean_free_path(
            self.constants,
            pressure_pa,
            self.point.neutral_temperature_ev,
            self.constants.neutral(self.point.neutral_gas).radius_m,
        )
    }

    fn larmor_if_magnetized(
        &self,
        species: Species,
        convention: SpeedConvention,
    ) -> DustyResult<Option<f64>> {
        if self.point.magnetic_field == 0.0 {
            return Ok(None);
        }
        self.larmor_radius(species, convention).map(Some)
    }

    /// Evaluate everything at once. Gyro-radii are `None` at `B = 0`.
    pub fn snapshot(&self, convention: SpeedConvention) -> DustyResult<DerivedSnapshot> {
        self.point.validate()?;
        Ok(DerivedSnapshot {
            debye_length: self.debye_length()?,
            grain_volume: self.grain_volume()?,
            grain_mass: self.grain_mass()?,
            grain_area: self.grain_area()?,
            grain_charge: self.grain_charge()?,
            grain_charge_number: self.grain_charge_number()?,
            grain_potential: self.grain_potential()?,
            cross_sections: self.cross_sections()?,
            neutral_density: self.neutral_density()?,
            mean_free_path: self.mean_free_path()?,
            electron_larmor_radius: self.larmor_if_magnetized(Species::Electron, convention)?,
            ion_larmor_radius: self.larmor_if_magnetized(Species::Ion, convention)?,
            grain_larmor_radius: self.larmor_if_magnetized(Species::Grain, convention)?,
            electron_beta: self.electron_beta(convention)?,
            reduction_factor: self.reduction_factor(convention)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusty_types::config::ChargeMode;
    use dusty_types::error::DustyError;

    #[test]
    fn test_default_snapshot() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default();
        let snap = DerivedQuantities::new(&c, &point)
            .snapshot(SpeedConvention::Mean)
            .unwrap();
        assert!((snap.grain_charge_number - 550.0).abs() < 1e-9);
        assert!((snap.grain_mass - 5.36e-13).abs() / 5.36e-13 < 0.01);
        assert!(snap.electron_larmor_radius.is_none());
        assert!(snap.grain_larmor_radius.is_none());
        assert_eq!(snap.electron_beta, 0.0);
        assert!(snap.reduction_factor > 0.0 && snap.reduction_factor <= 1.0);
        assert!(!snap.has_low_energy_capture());
    }

    #[test]
    fn test_magnetized_snapshot_has_radii() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default().with_magnetic_field(1.0);
        let derived = DerivedQuantities::new(&c, &point);
        let snap = derived.snapshot(SpeedConvention::Mean).unwrap();
        let r_e = snap.electron_larmor_radius.unwrap();
        let r_i = snap.ion_larmor_radius.unwrap();
        assert!(r_i > r_e);
        assert!(snap.grain_larmor_radius.unwrap() > 0.0);
        assert_eq!(
            r_e,
            derived
                .larmor_radius(Species::Electron, SpeedConvention::Mean)
                .unwrap()
        );
    }

    #[test]
    fn test_zero_field_larmor_is_error() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default();
        let result = DerivedQuantities::new(&c, &point)
            .larmor_radius(Species::Electron, SpeedConvention::Mean);
        assert!(matches!(result, Err(DustyError::DomainError(_))));
    }

    #[test]
    fn test_views_track_their_point() {
        // Two points, two views: no shared or cached state.
        let c = PhysicalConstants::default();
        let dense = OperatingPoint {
            electron_density: 4.0 * OperatingPoint::default().electron_density,
            ..OperatingPoint::default()
        };
        let base = OperatingPoint::default();
        let dl_base = DerivedQuantities::new(&c, &base).debye_length().unwrap();
        let dl_dense = DerivedQuantities::new(&c, &dense).debye_length().unwrap();
        assert!((dl_base / dl_dense - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_potential_mode_charge_depends_on_screening() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default()
            .with_charge_mode(ChargeMode::FloatingMultiplier { multiplier: 2.5 });
        let derived = DerivedQuantities::new(&c, &point);
        let q = derived.grain_charge().unwrap();
        let expected = grain::charge_from_potential(
            &c,
            5.0,
            point.grain_radius,
            derived.debye_length().unwrap(),
        )
        .unwrap();
        assert_eq!(q, expected);
        assert!((derived.grain_potential().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_frequencies() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default().with_magnetic_field(1.0);
        let derived = DerivedQuantities::new(&c, &point);
        let wce = derived.cyclotron_frequency(Species::Electron).unwrap();
        let wci = derived.cyclotron_frequency(Species::Ion).unwrap();
        assert!(wce > wci);
        assert!(derived.electron_plasma_frequency().unwrap() > derived.ion_plasma_frequency().unwrap());
        assert!(derived.grain_weight().unwrap() > 0.0);
    }

    #[test]
    fn test_parameterized_accessors_match_rebuilt_point() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint::default();
        let derived = DerivedQuantities::new(&c, &point);

        let faster = OperatingPoint {
            ion_drift_speed: 200.0,
            ..point.clone()
        };
        let rebuilt = DerivedQuantities::new(&c, &faster).cross_sections().unwrap();
        assert_eq!(derived.collision_cross_section_at(200.0).unwrap(), rebuilt.sigma_coll);
        assert_eq!(derived.coulomb_cross_section_at(200.0).unwrap(), rebuilt.sigma_coulomb);
        assert_eq!(
            derived.coulomb_cross_section_at(point.ion_drift_speed).unwrap(),
            derived.coulomb_cross_section().unwrap()
        );
        assert!(derived.cross_sections_at(-1.0).is_err());

        let p = 13.3322;
        let at_p = DerivedQuantities::new(&c, &point.with_pressure_pa(p))
            .mean_free_path()
            .unwrap();
        assert_eq!(derived.mean_free_path_at(p).unwrap(), at_p);
        assert!(derived.mean_free_path_at(0.0).is_err());
    }

    #[test]
    fn test_invalid_point_snapshot_fails() {
        let c = PhysicalConstants::default();
        let point = OperatingPoint {
            grain_radius: -1.0,
            ..OperatingPoint::default()
        };
        assert!(DerivedQuantities::new(&c, &point)
            .snapshot(SpeedConvention::Mean)
            .is_err());
    }
}
