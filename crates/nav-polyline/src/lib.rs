//! `nav-polyline` — turn a node path into an encoded polyline.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`build`]  | `path_points`, `build_polyline`                       |
//! | [`codec`]  | `encode`, `decode` and their `_with_precision` forms  |
//! | [`error`]  | `PolylineError`, `PolylineResult<T>`                  |
//!
//! The format is the widely used encoded polyline: coordinates scaled to a
//! fixed number of decimal places, delta-encoded against the previous point,
//! zigzag-mapped to unsigned, and emitted as 5-bit groups offset into the
//! printable range `'?'..='~'`.

pub mod build;
pub mod codec;
pub mod error;

#[cfg(test)]
mod tests;

pub use build::{build_polyline, path_points};
pub use codec::{DEFAULT_PRECISION, decode, decode_with_precision, encode, encode_with_precision};
pub use error::{PolylineError, PolylineResult};
