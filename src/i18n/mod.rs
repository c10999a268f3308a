// SPDX-License-Identifier: MPL-2.0
//! Localization support built on Fluent.
//!
//! Handles locale detection (CLI flag, config, then OS), loading of embedded
//! `.ftl` resources, and string lookup with a visible fallback marker.

pub mod fluent;
