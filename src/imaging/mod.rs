//! Image processing — pure Rust via the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Open** | `ImageReader` + `into_rgba8` |
//! | **Resize → PNG** | `imageops::resize` + `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use params::{IconParams, ResampleFilter};
pub use rust_backend::RustBackend;
