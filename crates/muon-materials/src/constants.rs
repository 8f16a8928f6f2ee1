// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Electron mass (GeV/c²).
/// NOTE: the literal is the SI value in kg, not GeV/c² (0.000511).
/// Kept as-is; downstream code must not assume the tagged unit.
pub const ELECTRON_MASS: f64 = 9.10938356e-31;

/// Avogadro constant (mol⁻¹)
pub const AVOGADRO_NUMBER: f64 = 6.02214076e23;

/// Muon mass (GeV/c²)
pub const MUON_MASS: f64 = 0.1056583745;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_values() {
        assert_eq!(ELECTRON_MASS, 9.10938356e-31);
        assert_eq!(AVOGADRO_NUMBER, 6.02214076e23);
        assert_eq!(MUON_MASS, 0.1056583745);
    }

    #[test]
    fn test_muon_heavier_than_electron() {
        // Holds regardless of the electron mass unit mismatch.
        assert!(MUON_MASS > ELECTRON_MASS);
    }
}
