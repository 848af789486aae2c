// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison viewer built with the
//! Iced GUI framework.
//!
//! Two images are stacked in the same frame and a draggable vertical divider
//! reveals the before image on its left and the after image on its right.
//! Settings persist to TOML and the interface is localized with Fluent.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod cli;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
