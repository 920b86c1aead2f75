//! Flow layout: place children left-to-right, wrapping into rows.
//!
//! The engine is a pure function of its inputs. Each pass walks the visible
//! children once, keeps the running row state in locals, and returns a fresh
//! [`LayoutResult`]; nothing from one pass is visible to the next.

use flow_types::geometry::{Edges, PlacedRect, Size};

use crate::config::LayoutConfig;
use crate::constraint::Constraint;

/// A measured child ready to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildBox {
    /// Measured width, excluding margins.
    pub width: i32,
    /// Measured height, excluding margins.
    pub height: i32,
    pub margins: Edges,
    /// Hidden children take no space and get no placement.
    pub visible: bool,
}

impl ChildBox {
    /// A visible child of the given size with no margins.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            margins: Edges::ZERO,
            visible: true,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(size.width, size.height)
    }

    pub fn with_margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn hidden(self) -> Self {
        self.with_visible(false)
    }

    /// Width including horizontal margins, saturating at `i32::MAX`.
    pub fn box_width(&self) -> i32 {
        self.margins.horizontal().saturating_add(self.width)
    }

    /// Height including vertical margins, saturating at `i32::MAX`.
    pub fn box_height(&self) -> i32 {
        self.margins.vertical().saturating_add(self.height)
    }

    fn sanitized(&self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
            margins: self.margins.clamped(),
            visible: self.visible,
        }
    }
}

/// Where one visible child goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Position of the child in the input sequence, hidden children included.
    pub index: usize,
    /// Zero-based row the child landed in.
    pub row: usize,
    pub left: i32,
    pub top: i32,
    /// Measured size, carried through so the host can lay the child out
    /// without measuring it again.
    pub width: i32,
    pub height: i32,
}

impl Placement {
    /// The box handed to the host: `(left, top, left + width, top + height)`.
    pub fn rect(&self) -> PlacedRect {
        PlacedRect::from_origin(self.left, self.top, Size::new(self.width, self.height))
    }
}

/// Output of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LayoutResult {
    /// Container width, padding included.
    pub width: i32,
    /// Container height, padding included.
    pub height: i32,
    /// Set when an at-most width constraint cut the container short.
    pub width_too_small: bool,
    /// Set when an at-most height constraint cut the container short.
    pub height_too_small: bool,
    /// One entry per visible child, in input order.
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Look up a placement by the child's index in the input sequence.
    ///
    /// Returns `None` for hidden children and out-of-range indices.
    pub fn placement_for(&self, index: usize) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|i| &self.placements[i])
    }

    /// Number of rows used; zero when nothing was placed.
    pub fn row_count(&self) -> usize {
        self.placements.last().map_or(0, |p| p.row + 1)
    }
}

/// A flow container's layout policy.
///
/// The stored config never has negative spacing or padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlowLayout {
    config: LayoutConfig,
}

impl FlowLayout {
    /// Negative spacing or padding in `config` is clamped to zero here, once.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Place `children` within `available_width` (`None` = unbounded) and
    /// report the size the container would like to be.
    ///
    /// The returned size is not resolved against any constraint; see
    /// [`FlowLayout::layout`] for that. Coordinates and sizes saturate at
    /// `i32::MAX` instead of overflowing.
    pub fn compute(&self, children: &[ChildBox], available_width: Option<i32>) -> LayoutResult {
        let config = self.config;
        let padding = config.padding;
        let available = available_width.map(|w| w.max(0));

        let mut placements: Vec<Placement> = Vec::with_capacity(children.len());
        let mut width = 0;
        let mut row = 0;
        let mut row_top = padding.top;
        let mut row_width = 0;
        let mut row_height = 0;
        let mut cursor = 0;

        for (index, child) in children.iter().enumerate() {
            if !child.visible {
                continue;
            }
            let child = child.sanitized();
            let box_w = child.box_width();
            let box_h = child.box_height();

            if placements.is_empty() {
                cursor = padding.left.saturating_add(child.margins.left);
                row_top = padding.top;
                row_width = padding.horizontal().saturating_add(box_w);
                row_height = box_h;
            } else if available.is_none_or(|avail| {
                // Widened so a saturated row never compares as fitting.
                i64::from(row_width) + i64::from(config.column_spacing) + i64::from(box_w)
                    <= i64::from(avail)
            }) {
                cursor = cursor
                    .saturating_add(config.column_spacing)
                    .saturating_add(child.margins.left);
                row_width = row_width
                    .saturating_add(config.column_spacing)
                    .saturating_add(box_w);
                row_height = row_height.max(box_h);
            } else {
                cursor = padding.left.saturating_add(child.margins.left);
                row_top = row_top
                    .saturating_add(row_height)
                    .saturating_add(config.row_spacing);
                row_width = padding.horizontal().saturating_add(box_w);
                row_height = box_h;
                row += 1;
                log::trace!("flow: child {index} wraps to row {row} at y={row_top}");
            }

            placements.push(Placement {
                index,
                row,
                left: cursor,
                top: row_top.saturating_add(child.margins.top),
                width: child.width,
                height: child.height,
            });
            width = width.max(row_width);
            cursor = cursor
                .saturating_add(child.width)
                .saturating_add(child.margins.right);
        }

        let (width, height) = if placements.is_empty() {
            (padding.horizontal(), padding.vertical())
        } else {
            let height = row_top
                .saturating_add(row_height)
                .saturating_add(padding.bottom);
            (width, height)
        };

        let result = LayoutResult {
            width,
            height,
            width_too_small: false,
            height_too_small: false,
            placements,
        };
        log::debug!(
            "flow: placed {}/{} children in {} rows, available={available:?}, size={width}x{height}",
            result.placements.len(),
            children.len(),
            result.row_count(),
        );
        result
    }

    /// Place `children` under the given constraints and resolve the
    /// container's size against them, one axis at a time.
    ///
    /// The width constraint's bound (if any) is the available row width.
    pub fn layout(
        &self,
        children: &[ChildBox],
        width: Constraint,
        height: Constraint,
    ) -> LayoutResult {
        let mut result = self.compute(children, width.bound());
        let resolved_w = width.resolve_size_and_state(result.width);
        let resolved_h = height.resolve_size_and_state(result.height);
        result.width = resolved_w.size;
        result.width_too_small = resolved_w.too_small;
        result.height = resolved_h.size;
        result.height_too_small = resolved_h.too_small;
        result
    }
}
