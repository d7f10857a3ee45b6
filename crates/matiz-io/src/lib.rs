#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// High-level image reading and writing functions.
///
/// Provides convenient functions for reading and writing images in various
/// formats. See [`functional::read_image_any_rgb8`] for automatic format
/// detection.
pub mod functional;

/// JPEG image encoding and decoding.
///
/// Pure Rust JPEG codec for reading and writing JPEG images.
pub mod jpeg;

/// PNG image encoding and decoding.
///
/// Read and write PNG images with 8-bit grayscale and RGB color types.
pub mod png;
