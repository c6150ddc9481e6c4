//! # generate-icons
//!
//! Turns one square source image into the bitmaps an iOS
//! `AppIcon.appiconset` needs, and writes the matching `Contents.json`.
//!
//! ```text
//! icon.png ──▶ open + RGBA ──▶ 9 × (resize → PNG) ──▶ Contents.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`icons`] | The fixed icon table and filename rule |
//! | [`imaging`] | Backend trait and the `image`-crate implementation |
//! | [`generate`] | Pre-flight checks, per-icon resize/save, success tally |
//! | [`manifest`] | `Contents.json` model and writer |
//! | [`config`] | Optional TOML config (output directory, resampling filter) |
//! | [`output`] | Console formatting |
//!
//! # Failure Model
//!
//! A missing or undecodable source stops the run before the output
//! directory is created. After that, each icon is independent: a failed
//! write is reported and counted, the rest still run, and `Contents.json`
//! is written only when all nine icons made it.

pub mod config;
pub mod generate;
pub mod icons;
pub mod imaging;
pub mod manifest;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
