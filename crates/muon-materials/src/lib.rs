// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Muon Materials
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants and absorber parameters for muon energy-loss work.
//!
//! The reference absorber is [`material::STANDARD_ROCK`]; further
//! materials can be loaded from JSON through [`config::MaterialTable`].

pub mod config;
pub mod constants;
pub mod error;
pub mod material;

pub use config::MaterialTable;
pub use error::{MaterialError, MaterialResult};
pub use material::{AtomicElement, STANDARD_ROCK};
