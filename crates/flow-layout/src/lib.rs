//! flow-layout: a container that flows children left-to-right and wraps
//! them into rows.
//!
//! [`FlowLayout::compute`] is the pure engine over measured [`ChildBox`]es.
//! [`FlowLayout::measure`] and [`FlowLayout::place`] drive a host's own
//! children through the [`FlowChild`] trait. Spacing and padding come from
//! [`LayoutConfig`], which can be parsed from TOML or JSON attributes.

pub mod config;
pub mod constraint;
pub mod engine;
pub mod host;
pub mod params;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Dimension, LayoutConfig};
pub use constraint::{Constraint, ResolvedSize};
pub use engine::{ChildBox, FlowLayout, LayoutResult, Placement};
pub use host::FlowChild;
pub use params::{ChildDimension, ChildParams};
