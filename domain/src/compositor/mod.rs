//! Image compositing geometry.
//!
//! Painting is an infrastructure concern; this module only decides which
//! part of the source to keep and where it lands in the target rectangle.

pub mod geometry;
