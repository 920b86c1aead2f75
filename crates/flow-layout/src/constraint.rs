//! Parent-imposed sizing constraints and how desired sizes resolve against them.

use crate::params::ChildDimension;

/// A sizing constraint for one axis, as handed down by the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The parent dictates the size.
    Exact(i32),
    /// Any size up to the given bound.
    AtMost(i32),
    /// No bound: the child may be as large as it wants.
    Unbounded,
}

/// A resolved size together with whether the constraint cut it short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSize {
    pub size: i32,
    /// Set when an [`Constraint::AtMost`] bound was smaller than the desired size.
    pub too_small: bool,
}

impl Constraint {
    /// The bound carried by this constraint, or `None` when unbounded.
    pub fn bound(self) -> Option<i32> {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Some(size.max(0)),
            Self::Unbounded => None,
        }
    }

    /// Resolve a desired size against this constraint.
    pub fn resolve(self, desired: i32) -> i32 {
        self.resolve_size_and_state(desired).size
    }

    /// Resolve a desired size, also reporting whether it had to shrink.
    pub fn resolve_size_and_state(self, desired: i32) -> ResolvedSize {
        let desired = desired.max(0);
        match self {
            Self::Exact(size) => ResolvedSize {
                size: size.max(0),
                too_small: false,
            },
            Self::AtMost(size) => {
                let size = size.max(0);
                ResolvedSize {
                    size: desired.min(size),
                    too_small: desired > size,
                }
            },
            Self::Unbounded => ResolvedSize {
                size: desired,
                too_small: false,
            },
        }
    }

    /// Derive the constraint for a child along one axis.
    ///
    /// `used` is the space the parent has already spent on this axis
    /// (its own padding plus the child's margins). A fixed child dimension
    /// always wins; otherwise the child inherits whatever room is left.
    pub fn for_child(parent: Constraint, used: i32, dimension: ChildDimension) -> Constraint {
        if let ChildDimension::Exact(px) = dimension {
            return Constraint::Exact(px.max(0));
        }
        let avail = match parent.bound() {
            Some(size) => (size - used.max(0)).max(0),
            None => return Constraint::Unbounded,
        };
        match (parent, dimension) {
            (Constraint::Exact(_), ChildDimension::MatchParent) => Constraint::Exact(avail),
            _ => Constraint::AtMost(avail),
        }
    }
}
