// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};
use crate::material::{AtomicElement, STANDARD_ROCK};

/// Name under which [`STANDARD_ROCK`] appears in the default table.
pub const STANDARD_ROCK_NAME: &str = "standard_rock";

/// Named absorber materials.
/// Maps 1:1 to data/materials.json schema:
/// `{ "materials": { "<name>": { "A": .., "I": .., "Z": .. } } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialTable {
    materials: BTreeMap<String, AtomicElement>,
}

impl MaterialTable {
    /// Load from JSON file. Every entry is validated.
    pub fn from_file(path: impl AsRef<Path>) -> MaterialResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            count = table.len(),
            "loaded material table"
        );
        Ok(table)
    }

    /// Parse from an in-memory JSON document.
    pub fn from_json_str(contents: &str) -> MaterialResult<Self> {
        let table: Self = serde_json::from_str(contents)?;
        for (name, element) in &table.materials {
            if let Err(err) = element.validate() {
                tracing::warn!(material = %name, error = %err, "rejecting material");
                return Err(MaterialError::InvalidMaterial {
                    name: name.clone(),
                    reason: err.to_string(),
                });
            }
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> MaterialResult<&AtomicElement> {
        self.materials
            .get(name)
            .ok_or_else(|| MaterialError::UnknownMaterial(name.to_string()))
    }

    /// Add or replace an entry. Returns the previous value, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        element: AtomicElement,
    ) -> Option<AtomicElement> {
        self.materials.insert(name.into(), element)
    }

    /// Material names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        let mut materials = BTreeMap::new();
        materials.insert(STANDARD_ROCK_NAME.to_string(), STANDARD_ROCK);
        MaterialTable { materials }
    }
}
