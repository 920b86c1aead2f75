//! Shared test utilities for flow-layout tests.
//!
//! Provides a [`MockChild`] that records every measure and place call.

use flow_types::geometry::{PlacedRect, Size};

use crate::constraint::Constraint;
use crate::host::FlowChild;
use crate::params::ChildParams;

/// A child with a fixed content size that records how it was driven.
#[derive(Debug, Clone)]
pub struct MockChild {
    pub params: ChildParams,
    pub visible: bool,
    /// Content size reported for wrap-content axes.
    pub content: Size,
    pub measure_calls: Vec<(Constraint, Constraint)>,
    pub placed: Option<PlacedRect>,
}

impl MockChild {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            params: ChildParams::default(),
            visible: true,
            content: Size::new(width, height),
            measure_calls: Vec::new(),
            placed: None,
        }
    }

    pub fn with_params(mut self, params: ChildParams) -> Self {
        self.params = params;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

impl FlowChild for MockChild {
    fn params(&self) -> &ChildParams {
        &self.params
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        self.measure_calls.push((width, height));
        Size::new(width.resolve(self.content.width), height.resolve(self.content.height))
    }

    fn place(&mut self, rect: PlacedRect) {
        self.placed = Some(rect);
    }
}
