//! Concrete record types and helper macros

pub mod album;
pub mod macros;

pub use album::Album;
