// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor cascading context, threaded explicitly.
//!
//! When a row participates in a cascading menu, the enclosing composition
//! passes an [`AncestorContext`] down to it as a plain parameter — there is
//! no ambient context lookup. A row with no enclosing cascade simply
//! receives `None`.
//!
//! The anchor and fixation values are passthrough data: the row copies them
//! into the popup plan unmodified and attaches no meaning to them.

/// Horizontal anchor alignment for a cascading popup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorX {
    /// Align to the left edge of the toggle row.
    Left,
    /// Center over the toggle row.
    Center,
    /// Align to the right edge of the toggle row.
    Right,
}

/// Vertical anchor alignment for a cascading popup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnchorY {
    /// Align above the toggle row.
    Top,
    /// Center over the toggle row.
    Center,
    /// Overlap the toggle row.
    Overlap,
    /// Align below the toggle row.
    Bottom,
}

/// Popup anchor: a horizontal and vertical alignment pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Horizontal alignment.
    pub x: AnchorX,
    /// Vertical alignment.
    pub y: AnchorY,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            x: AnchorX::Right,
            y: AnchorY::Top,
        }
    }
}

/// What a cascading popup is positionally fixed to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FixedTo {
    /// Fixed to the window viewport.
    #[default]
    Window,
    /// Fixed to a host-defined node.
    Node(u64),
}

/// Read-only cascading context supplied by an enclosing composition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AncestorContext {
    /// Opaque id the enclosing cascade assigned to this row's popup.
    pub cascading_id: u64,
    /// Whether the enclosing cascade is active. Only an active cascade
    /// switches the row into popup mode; an inactive one leaves it inline.
    pub cascading_menu: bool,
    /// Anchor for the popup, passed through unmodified.
    pub anchor: Anchor,
    /// Fixation for the popup, passed through unmodified.
    pub fixed_to: FixedTo,
}

impl AncestorContext {
    /// An active cascading context with default anchor and fixation.
    pub fn active(cascading_id: u64) -> Self {
        Self {
            cascading_id,
            cascading_menu: true,
            anchor: Anchor::default(),
            fixed_to: FixedTo::default(),
        }
    }
}
