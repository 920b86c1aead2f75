//! Two-pass driver between a host UI tree and the flow engine.
//!
//! The host exposes its children through [`FlowChild`]. A layout pass is
//! [`FlowLayout::measure`] followed by [`FlowLayout::place`]; the
//! [`LayoutResult`] returned by the first is the only state carried into the
//! second.

use flow_types::geometry::{PlacedRect, Size};

use crate::constraint::Constraint;
use crate::engine::{ChildBox, FlowLayout, LayoutResult};
use crate::params::ChildParams;

/// A child element as seen by a flow container.
pub trait FlowChild {
    /// Requested size and margins.
    fn params(&self) -> &ChildParams;

    /// Hidden children are neither measured nor placed.
    fn is_visible(&self) -> bool;

    /// Measure the child under the given constraints and return its size,
    /// margins excluded.
    fn measure(&mut self, width: Constraint, height: Constraint) -> Size;

    /// Position the child. `rect` is in the container's coordinate space.
    fn place(&mut self, rect: PlacedRect);
}

impl FlowLayout {
    /// Measure every visible child, then lay them out under the container's
    /// own constraints.
    ///
    /// Each child is offered the container's constraint minus the
    /// container's padding and the child's margins.
    pub fn measure<C: FlowChild>(
        &self,
        children: &mut [C],
        width: Constraint,
        height: Constraint,
    ) -> LayoutResult {
        let padding = self.config().padding;
        let boxes: Vec<ChildBox> = children
            .iter_mut()
            .map(|child| {
                let params = *child.params();
                if !child.is_visible() {
                    return ChildBox::from_size(Size::ZERO)
                        .with_margins(params.margins)
                        .hidden();
                }
                let margins = params.margins.clamped();
                let child_w = Constraint::for_child(
                    width,
                    padding.horizontal().saturating_add(margins.horizontal()),
                    params.width,
                );
                let child_h = Constraint::for_child(
                    height,
                    padding.vertical().saturating_add(margins.vertical()),
                    params.height,
                );
                // A misbehaving child may report a negative size.
                ChildBox::from_size(child.measure(child_w, child_h).clamped()).with_margins(margins)
            })
            .collect();
        self.layout(&boxes, width, height)
    }

    /// Hand each visible child its box from `result`.
    ///
    /// Placements whose index no longer names a child (the child list
    /// shrank since `result` was measured) are skipped.
    pub fn place<C: FlowChild>(&self, result: &LayoutResult, children: &mut [C]) {
        for placement in &result.placements {
            match children.get_mut(placement.index) {
                Some(child) => child.place(placement.rect()),
                None => log::warn!(
                    "flow: placement for child {} but only {} children remain",
                    placement.index,
                    children.len()
                ),
            }
        }
    }
}
