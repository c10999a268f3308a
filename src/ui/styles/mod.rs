// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles shared across the showcase sections.

pub mod button;
pub mod container;
