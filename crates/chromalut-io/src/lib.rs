#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`](error::IoError) variants for file access, cube parsing and
/// Hald image decoding.
pub mod error;

/// Cube text format reading and writing.
///
/// See [`cube::load_cube_file`] and [`cube::write_cube_file`].
pub mod cube;

/// Hald image decoding.
///
/// Read lookup tables stored as images. See [`hald::load_hald_image`].
pub mod hald;
