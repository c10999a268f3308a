// SPDX-License-Identifier: MPL-2.0
//! `iced_stage` is a product showcase page built with the Iced GUI framework.
//!
//! Its centerpiece is an animated demo contrasting sequential and parallel
//! transaction processing, driven by a generation-counted sequencer. The crate
//! also demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_stage/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod sequencer;
pub mod ui;
