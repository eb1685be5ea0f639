// ─────────────────────────────────────────────────────────────────────
// SCPN Dusty Plasma — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::Serialize;

/// The hard-sphere bracket `1 - 2 e U / (m v^2)` went negative and was
/// clamped to zero. Not an error; attached to the result so callers can
/// annotate it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LowEnergyCapture {
    /// Raw bracket value before clamping (< 0).
    pub bracket: f64,
}

/// The Debye length fell inside the capture radius (`lambda_D < b_c`), so
/// the Coulomb logarithm and `sigma_coulomb` are negative. Kept as computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvertedScreening {
    pub debye_length: f64,
    pub impact_parameter: f64,
}

/// Grain–neutral collision cross-sections at one relative speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollisionCrossSections {
    pub relative_speed: f64,     // v_s [m/s]
    pub impact_parameter: f64,   // b_c [m]
    pub b_pi_over_2: f64,        // 90-degree deflection parameter [m]
    pub sigma_coll: f64,         // orbit-limited cross-section [m^2]
    pub sigma_coulomb: f64,      // Coulomb cross-section [m^2]
    pub low_energy_capture: Option<LowEnergyCapture>,
    pub inverted_screening: Option<InvertedScreening>,
}

impl CollisionCrossSections {
    /// Orbit-limited plus Coulomb cross-section [m^2].
    pub fn total(&self) -> f64 {
        self.sigma_coll + self.sigma_coulomb
    }
}

/// Every derived quantity at one operating point, as plain numbers.
///
/// Gyro-radii are `None` when the magnetic field is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSnapshot {
    pub debye_length: f64,            // [m]
    pub grain_volume: f64,            // [m^3]
    pub grain_mass: f64,              // [kg]
    pub grain_area: f64,              // [m^2]
    pub grain_charge: f64,            // [C]
    pub grain_charge_number: f64,     // [e]
    pub grain_potential: f64,         // [V]
    pub cross_sections: CollisionCrossSections,
    pub neutral_density: f64,         // [m^-3]
    pub mean_free_path: f64,          // [m]
    pub electron_larmor_radius: Option<f64>, // [m]
    pub ion_larmor_radius: Option<f64>,      // [m]
    pub grain_larmor_radius: Option<f64>,    // [m]
    pub electron_beta: f64,           // r_p / r_L,e
    pub reduction_factor: f64,        // (0, 1]
}

impl DerivedSnapshot {
    pub fn has_low_energy_capture(&self) -> bool {
        self.cross_sections.low_energy_capture.is_some()
    }

    pub fn has_inverted_screening(&self) -> bool {
        self.cross_sections.inverted_screening.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(capture: Option<LowEnergyCapture>) -> CollisionCrossSections {
        CollisionCrossSections {
            relative_speed: 400.0,
            impact_parameter: 0.0,
            b_pi_over_2: 1e-9,
            sigma_coll: 0.0,
            sigma_coulomb: 1e-16,
            low_energy_capture: capture,
            inverted_screening: None,
        }
    }

    #[test]
    fn test_capture_flag() {
        let mut snapshot = DerivedSnapshot {
            debye_length: 1e-4,
            grain_volume: 1e-16,
            grain_mass: 1e-13,
            grain_area: 1e-11,
            grain_charge: 1e-16,
            grain_charge_number: 550.0,
            grain_potential: 5.0,
            cross_sections: sections(None),
            neutral_density: 1e20,
            mean_free_path: 1e-3,
            electron_larmor_radius: None,
            ion_larmor_radius: None,
            grain_larmor_radius: None,
            electron_beta: 0.0,
            reduction_factor: 1.0,
        };
        assert!(!snapshot.has_low_energy_capture());
        snapshot.cross_sections = sections(Some(LowEnergyCapture { bracket: -0.5 }));
        assert!(snapshot.has_low_energy_capture());
        assert_eq!(snapshot.cross_sections.total(), 1e-16);
        assert!(!snapshot.has_inverted_screening());
        snapshot.cross_sections.inverted_screening = Some(InvertedScreening {
            debye_length: 3.3e-6,
            impact_parameter: 4.0e-6,
        });
        assert!(snapshot.has_inverted_screening());
    }
}
