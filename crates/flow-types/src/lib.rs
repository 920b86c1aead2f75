//! Foundation types for flow-layout.
//!
//! This crate contains the framework-agnostic types shared by the layout
//! crate: edge insets, placed rectangles, sizes, and error types.

pub mod error;
pub mod geometry;

pub use error::{FlowError, Result};
pub use geometry::{Edges, PlacedRect, Size};
