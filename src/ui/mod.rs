// SPDX-License-Identifier: MPL-2.0
//! User interface code, following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`showcase`] - The single showcase page (hero, features, morph chart,
//!   demo, footer) and its animation state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod showcase;
pub mod styles;
pub mod theming;
