//! Core vector types for the hull kernel.

pub mod vec3;
