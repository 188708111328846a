// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixpass: Core types, configuration and country profiles shared across all crates.

pub mod config;
pub mod error;
pub mod profiles;
pub mod types;

pub use config::{DocumentConfig, MAX_OUTPUT_SIDE, ProcessingLimits};
pub use error::{ErrorClass, PixpassError, Result};
pub use profiles::{CountryProfile, FieldLayout, profile, profiles, require_profile};
pub use types::*;
