// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Material
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};

/// Radiation-interaction parameters of an element or bulk absorber.
///
/// Fields are fixed at construction; there is no mutating API.
/// JSON keys are `A`, `I`, `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtomicElement {
    /// Atomic mass
    #[serde(rename = "A")]
    a: f64,
    /// Mean excitation energy (MeV)
    #[serde(rename = "I")]
    i: f64,
    /// Atomic number (effective Z for compounds, may be fractional)
    #[serde(rename = "Z")]
    z: f64,
}

impl AtomicElement {
    /// Store the three parameters verbatim. No checks.
    pub const fn new(a: f64, i: f64, z: f64) -> Self {
        AtomicElement { a, i, z }
    }

    /// Like [`AtomicElement::new`], but rejects non-finite or non-positive values.
    pub fn try_new(a: f64, i: f64, z: f64) -> MaterialResult<Self> {
        let element = Self::new(a, i, z);
        element.validate()?;
        Ok(element)
    }

    /// Check that every parameter is finite and strictly positive.
    pub fn validate(&self) -> MaterialResult<()> {
        for (label, value) in [("A", self.a), ("I", self.i), ("Z", self.z)] {
            if !value.is_finite() {
                return Err(MaterialError::PhysicsViolation(format!(
                    "{label} must be finite, got {value}"
                )));
            }
            if value <= 0.0 {
                return Err(MaterialError::PhysicsViolation(format!(
                    "{label} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Atomic mass.
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Mean excitation energy (MeV).
    pub const fn i(&self) -> f64 {
        self.i
    }

    /// Atomic number.
    pub const fn z(&self) -> f64 {
        self.z
    }
}

/// Standard rock reference absorber.
/// NOTE: I = 0.1364e-6 is not 136.4 eV in MeV (that would be 1.364e-4).
/// The literal is preserved as published upstream.
pub const STANDARD_ROCK: AtomicElement = AtomicElement::new(22.0, 0.1364e-6, 11.0);
